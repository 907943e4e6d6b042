//! Decoding of the `nav_closed_ends` payload.
//!
//! The payload is a flat JSON array. Text fields may be `null`, return rates
//! may be `null` for funds too young to have them, and dates come in two
//! encodings: RFC 3339 timestamps for `pricedate`/`inception_date` and
//! `MM/DD/YYYY` for the period-end fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::types::{Fund, FundCollection, PERIOD_END_FORMAT};
use crate::Error;

/// Decodes a `nav_closed_ends` body into funds indexed by symbol.
///
/// Fails without a partial result if the body is not an array of fund
/// objects or if any record carries a malformed date.
pub fn decode(text: &str) -> Result<FundCollection, Error> {
    let funds = decode_funds(text)?;
    Ok(FundCollection::from_funds(funds))
}

/// Decodes a `nav_closed_ends` body into funds, in source order.
pub fn decode_funds(text: &str) -> Result<Vec<Fund>, Error> {
    let records: Vec<RawFund> = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Failed to parse fund data: {}", e);
        Error::Parse(e)
    })?;
    let funds = records
        .into_iter()
        .map(Fund::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("Decoded {} fund records", funds.len());
    Ok(funds)
}

/// One element of the payload array, before dates are parsed and nulls are
/// normalized.
#[derive(Deserialize)]
struct RawFund {
    id: i64,
    fund_code: i64,
    security_id: Option<String>,
    fundshortname: Option<String>,
    pricedate: String,
    price: Option<String>,
    prior_price: Option<String>,
    change: Option<String>,
    pct_change: Option<String>,
    sort: Option<String>,
    ytd_return: Option<f64>,
    ytd_return_monthly: Option<f64>,
    ytd_return_quarterly: Option<f64>,
    one_yr_return: Option<f64>,
    one_yr_return_monthly: Option<f64>,
    one_yr_return_quarterly: Option<f64>,
    three_yr_avg: Option<f64>,
    three_yr_avg_monthly: Option<f64>,
    three_yr_avg_quarterly: Option<f64>,
    five_yr_avg: Option<f64>,
    five_yr_avg_monthly: Option<f64>,
    five_yr_avg_quarterly: Option<f64>,
    ten_yr_avg: Option<f64>,
    ten_yr_avg_monthly: Option<f64>,
    ten_yr_avg_quarterly: Option<f64>,
    incept_avg: Option<f64>,
    incept_avg_monthly: Option<f64>,
    incept_avg_quarterly: Option<f64>,
    symbol: Option<String>,
    asset_type: Option<String>,
    inception_date: String,
    legalname2: Option<String>,
    seriesname: Option<String>,
    displayname: Option<String>,
    displayname_: Option<String>,
    category: Option<String>,
    annual_report: Option<String>,
    semi_annual_report: Option<String>,
    cusip: Option<String>,
    quarterly_report: Option<String>,
    prospectus: Option<String>,
    sai: Option<String>,
    soi: Option<String>,
    factsheet: Option<String>,
    commentary: Option<String>,
    last_month_end: String,
    last_qtr_end_2: String,
}

impl TryFrom<RawFund> for Fund {
    type Error = Error;

    fn try_from(raw: RawFund) -> Result<Self, Self::Error> {
        Ok(Fund {
            id: raw.id,
            fund_code: raw.fund_code,
            security_id: raw.security_id.unwrap_or_default(),
            fund_short_name: raw.fundshortname.unwrap_or_default(),
            nav_date: parse_timestamp("pricedate", raw.pricedate)?,
            nav: raw.price.unwrap_or_default(),
            prior_nav: raw.prior_price.unwrap_or_default(),
            change: raw.change.unwrap_or_default(),
            pct_change: raw.pct_change.unwrap_or_default(),
            sort: raw.sort.unwrap_or_default(),
            ytd_return: raw.ytd_return.unwrap_or_default(),
            ytd_return_monthly: raw.ytd_return_monthly.unwrap_or_default(),
            ytd_return_quarterly: raw.ytd_return_quarterly.unwrap_or_default(),
            one_yr_return: raw.one_yr_return.unwrap_or_default(),
            one_yr_return_monthly: raw.one_yr_return_monthly.unwrap_or_default(),
            one_yr_return_quarterly: raw.one_yr_return_quarterly.unwrap_or_default(),
            three_yr_avg: raw.three_yr_avg.unwrap_or_default(),
            three_yr_avg_monthly: raw.three_yr_avg_monthly.unwrap_or_default(),
            three_yr_avg_quarterly: raw.three_yr_avg_quarterly.unwrap_or_default(),
            five_yr_avg: raw.five_yr_avg.unwrap_or_default(),
            five_yr_avg_monthly: raw.five_yr_avg_monthly.unwrap_or_default(),
            five_yr_avg_quarterly: raw.five_yr_avg_quarterly.unwrap_or_default(),
            ten_yr_avg: raw.ten_yr_avg.unwrap_or_default(),
            ten_yr_avg_monthly: raw.ten_yr_avg_monthly.unwrap_or_default(),
            ten_yr_avg_quarterly: raw.ten_yr_avg_quarterly.unwrap_or_default(),
            incept_avg: raw.incept_avg.unwrap_or_default(),
            incept_avg_monthly: raw.incept_avg_monthly.unwrap_or_default(),
            incept_avg_quarterly: raw.incept_avg_quarterly.unwrap_or_default(),
            symbol: raw.symbol.unwrap_or_default(),
            asset_type: raw.asset_type.unwrap_or_default(),
            inception_date: parse_timestamp("inception_date", raw.inception_date)?,
            legal_name2: raw.legalname2.unwrap_or_default(),
            series_name: raw.seriesname.unwrap_or_default(),
            display_name: raw.displayname.unwrap_or_default(),
            display_name_alt: raw.displayname_.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            annual_report: raw.annual_report.unwrap_or_default(),
            semi_annual_report: raw.semi_annual_report.unwrap_or_default(),
            cusip: raw.cusip.unwrap_or_default(),
            quarterly_report: raw.quarterly_report.unwrap_or_default(),
            prospectus: raw.prospectus.unwrap_or_default(),
            sai: raw.sai.unwrap_or_default(),
            soi: raw.soi.unwrap_or_default(),
            factsheet: raw.factsheet.unwrap_or_default(),
            commentary: raw.commentary.unwrap_or_default(),
            last_month_end: parse_period_end("last_month_end", raw.last_month_end)?,
            last_qtr_end: parse_period_end("last_qtr_end_2", raw.last_qtr_end_2)?,
        })
    }
}

/// Parses an RFC 3339 timestamp such as `2021-04-01T00:00:00.000Z`.
fn parse_timestamp(field: &'static str, value: String) -> Result<DateTime<Utc>, Error> {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
        Err(source) => Err(date_error(field, value, Some(source))),
    }
}

/// Parses an `MM/DD/YYYY` date such as `03/31/2021`.
///
/// `%m/%d/%Y` alone also takes unpadded fields, leading whitespace, signed
/// and two-digit years, so the exact shape is checked first.
fn parse_period_end(field: &'static str, value: String) -> Result<NaiveDate, Error> {
    if !is_period_end_shape(&value) {
        return Err(date_error(field, value, None));
    }
    match NaiveDate::parse_from_str(&value, PERIOD_END_FORMAT) {
        Ok(date) => Ok(date),
        Err(source) => Err(date_error(field, value, Some(source))),
    }
}

/// Two-digit month and day, four-digit year, `/` separators, nothing else.
fn is_period_end_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

fn date_error(
    field: &'static str,
    value: String,
    source: Option<chrono::ParseError>,
) -> Error {
    match &source {
        Some(e) => tracing::error!("Invalid date in field {}: {:?} ({})", field, value, e),
        None => tracing::error!("Invalid date in field {}: {:?}", field, value),
    }
    Error::DateFormat {
        field,
        value,
        source,
    }
}
