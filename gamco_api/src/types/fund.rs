//! The closed-end fund record published by the `nav_closed_ends` endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

/// `chrono` format of the period-end dates (`last_month_end`, `last_qtr_end_2`).
pub(crate) const PERIOD_END_FORMAT: &str = "%m/%d/%Y";

/// Latest published metrics for a single closed-end fund.
///
/// Built by [`crate::decode`]; every field is plain data and equality is
/// structural over all of them, so two records compare equal only if the API
/// published exactly the same values (`"4.27"` and `"4.270"` differ).
///
/// Serializes back to the wire field names, with the period-end dates in
/// their `MM/DD/YYYY` wire form.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Fund {
    pub id: i64,

    pub fund_code: i64,

    /// Security identifier; in practice the same value as `cusip`.
    pub security_id: String,

    #[serde(rename = "fundshortname")]
    pub fund_short_name: String,

    /// Pricing date of `nav`.
    #[serde(rename = "pricedate")]
    pub nav_date: DateTime<Utc>,

    /// Net asset value per share, as published (decimal string).
    #[serde(rename = "price")]
    pub nav: String,

    /// Previous net asset value per share.
    #[serde(rename = "prior_price")]
    pub prior_nav: String,

    /// Absolute change between `prior_nav` and `nav`.
    pub change: String,

    /// Relative change as a fraction (`"0.004706"` is 0.47%).
    pub pct_change: String,

    /// Display ordering hint used by GAMCO's own fund table.
    pub sort: String,

    pub ytd_return: f64,
    pub ytd_return_monthly: f64,
    pub ytd_return_quarterly: f64,

    pub one_yr_return: f64,
    pub one_yr_return_monthly: f64,
    pub one_yr_return_quarterly: f64,

    pub three_yr_avg: f64,
    pub three_yr_avg_monthly: f64,
    pub three_yr_avg_quarterly: f64,

    pub five_yr_avg: f64,
    pub five_yr_avg_monthly: f64,
    pub five_yr_avg_quarterly: f64,

    pub ten_yr_avg: f64,
    pub ten_yr_avg_monthly: f64,
    pub ten_yr_avg_quarterly: f64,

    /// Average annual return since inception.
    pub incept_avg: f64,
    pub incept_avg_monthly: f64,
    pub incept_avg_quarterly: f64,

    /// Exchange ticker symbol. Key of [`super::FundCollection`].
    pub symbol: String,

    /// Asset class, e.g. `"Equity"` or `"Fixed Income"`.
    pub asset_type: String,

    pub inception_date: DateTime<Utc>,

    #[serde(rename = "legalname2")]
    pub legal_name2: String,

    #[serde(rename = "seriesname")]
    pub series_name: String,

    #[serde(rename = "displayname")]
    pub display_name: String,

    /// Second display name; usually the full legal name with a leading "The".
    #[serde(rename = "displayname_")]
    pub display_name_alt: String,

    /// Investment style tag, e.g. `"value"`.
    pub category: String,

    // Document links. Empty when GAMCO has not published the document.
    pub annual_report: String,
    pub semi_annual_report: String,
    pub cusip: String,
    pub quarterly_report: String,
    pub prospectus: String,
    pub sai: String,
    pub soi: String,
    pub factsheet: String,
    pub commentary: String,

    #[serde(serialize_with = "serialize_period_end")]
    pub last_month_end: NaiveDate,

    #[serde(rename = "last_qtr_end_2", serialize_with = "serialize_period_end")]
    pub last_qtr_end: NaiveDate,
}

impl Fund {
    /// Calendar day of the published NAV.
    pub fn nav_day(&self) -> NaiveDate {
        self.nav_date.date_naive()
    }

    /// Calendar day the fund started trading.
    pub fn inception_day(&self) -> NaiveDate {
        self.inception_date.date_naive()
    }
}

fn serialize_period_end<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(PERIOD_END_FORMAT))
}
