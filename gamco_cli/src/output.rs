use anyhow::Result;
use gamco_api::Fund;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Tabled, Serialize)]
struct FundRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "NAV")]
    #[serde(rename = "NAV")]
    nav: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
    #[tabled(rename = "% Change")]
    #[serde(rename = "% Change")]
    pct_change: String,
    #[tabled(rename = "NAV Date")]
    #[serde(rename = "NAV Date")]
    nav_date: String,
    #[tabled(rename = "YTD")]
    #[serde(rename = "YTD")]
    ytd: String,
    #[tabled(rename = "1Y")]
    #[serde(rename = "1Y")]
    one_yr: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_fund_rows(funds: &[Fund]) -> Vec<FundRow> {
    funds
        .iter()
        .map(|f| FundRow {
            symbol: f.symbol.clone(),
            name: f.display_name.clone(),
            nav: f.nav.clone(),
            change: f.change.clone(),
            pct_change: format_pct_str(&f.pct_change),
            nav_date: f.nav_day().to_string(),
            ytd: format_rate(f.ytd_return),
            one_yr: format_rate(f.one_yr_return),
            category: f.category.clone(),
        })
        .collect()
}

fn build_detail_rows(f: &Fund) -> Vec<DetailRow> {
    let row = |field, value: String| DetailRow { field, value };
    let mut rows = vec![
        row("Symbol", f.symbol.clone()),
        row("Name", f.display_name.clone()),
        row("Legal Name", f.legal_name2.clone()),
        row("Asset Type", f.asset_type.clone()),
        row("Category", f.category.clone()),
        row("CUSIP", f.cusip.clone()),
        row("Inception", f.inception_day().to_string()),
        row("NAV", f.nav.clone()),
        row("Prior NAV", f.prior_nav.clone()),
        row("Change", f.change.clone()),
        row("% Change", format_pct_str(&f.pct_change)),
        row("NAV Date", f.nav_day().to_string()),
        row("Month End", f.last_month_end.to_string()),
        row("Quarter End", f.last_qtr_end.to_string()),
        row("YTD", format_rate(f.ytd_return)),
        row("1Y", format_rate(f.one_yr_return)),
        row("3Y Avg", format_rate(f.three_yr_avg)),
        row("5Y Avg", format_rate(f.five_yr_avg)),
        row("10Y Avg", format_rate(f.ten_yr_avg)),
        row("Since Inception", format_rate(f.incept_avg)),
    ];
    // Documents GAMCO has not published are left out.
    let documents = [
        ("Annual Report", &f.annual_report),
        ("Semi-Annual Report", &f.semi_annual_report),
        ("Quarterly Report", &f.quarterly_report),
        ("Prospectus", &f.prospectus),
        ("SAI", &f.sai),
        ("SOI", &f.soi),
        ("Factsheet", &f.factsheet),
        ("Commentary", &f.commentary),
    ];
    rows.extend(
        documents
            .into_iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(field, url)| row(field, url.clone())),
    );
    rows
}

// -- Table output --

pub fn print_funds_table(funds: &[Fund]) {
    println!("{}", Table::new(build_fund_rows(funds)));
}

pub fn print_fund_table(fund: &Fund) {
    println!("{}", Table::new(build_detail_rows(fund)));
}

// -- Markdown output --

pub fn print_funds_markdown(funds: &[Fund]) {
    let mut table = Table::new(build_fund_rows(funds));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_fund_markdown(fund: &Fund) {
    let mut table = Table::new(build_detail_rows(fund));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_funds_csv(funds: &[Fund]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_fund_rows(funds) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_fund_csv(fund: &Fund) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_detail_rows(fund) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Formats a return-rate fraction as a percentage (`0.0767` -> `7.67%`).
fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Same as [`format_rate`] for the API's decimal-string fractions; unparseable
/// values are shown as published.
fn format_pct_str(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(rate) => format_rate(rate),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_funds_fixture() -> Vec<Fund> {
        let json_str = include_str!("../../gamco_api/tests/fixtures/nav_closed_ends.json");
        gamco_api::decode_funds(json_str).unwrap()
    }

    // -- format tests --

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.0767238547), "7.67%");
    }

    #[test]
    fn test_format_rate_negative() {
        assert_eq!(format_rate(-0.004018), "-0.40%");
    }

    #[test]
    fn test_format_rate_zero() {
        assert_eq!(format_rate(0.0), "0.00%");
    }

    #[test]
    fn test_format_pct_str() {
        assert_eq!(format_pct_str("0.004706"), "0.47%");
    }

    #[test]
    fn test_format_pct_str_unparseable() {
        assert_eq!(format_pct_str("n/a"), "n/a");
        assert_eq!(format_pct_str(""), "");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_fund_rows_mapping() {
        let funds = load_funds_fixture();
        let rows = build_fund_rows(&funds);
        assert_eq!(rows.len(), 3);

        let row = &rows[0];
        assert_eq!(row.symbol, "GUT");
        assert_eq!(row.name, "Gabelli Utility Trust");
        assert_eq!(row.nav, "4.27");
        assert_eq!(row.change, "0.02");
        assert_eq!(row.pct_change, "0.47%");
        assert_eq!(row.nav_date, "2021-04-01");
        assert_eq!(row.ytd, "7.67%");
        assert_eq!(row.one_yr, "38.00%");
        assert_eq!(row.category, "value");
    }

    #[test]
    fn test_build_fund_rows_empty() {
        let rows = build_fund_rows(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_build_detail_rows_dates() {
        let funds = load_funds_fixture();
        let rows = build_detail_rows(&funds[2]);
        let value = |field: &str| {
            rows.iter()
                .find(|r| r.field == field)
                .map(|r| r.value.clone())
                .unwrap()
        };
        assert_eq!(value("Symbol"), "GLU");
        assert_eq!(value("Inception"), "2004-05-28");
        assert_eq!(value("Month End"), "2021-03-31");
        assert_eq!(value("Quarter End"), "2020-12-31");
        assert_eq!(value("10Y Avg"), "0.00%");
    }

    #[test]
    fn test_build_detail_rows_skips_missing_documents() {
        let funds = load_funds_fixture();

        let gut_rows = build_detail_rows(&funds[0]);
        assert!(gut_rows.iter().any(|r| r.field == "Annual Report"));
        assert!(!gut_rows.iter().any(|r| r.field == "SOI"));

        let glu_rows = build_detail_rows(&funds[2]);
        assert!(!glu_rows.iter().any(|r| r.field == "Prospectus"));
        assert_eq!(glu_rows.len(), 20);
    }
}
