use anyhow::Result;
use clap::Args;
use gamco_api::{Client, Fund};

use crate::output::{print_funds_csv, print_funds_markdown, print_funds_table, print_json, OutputFormat};

#[derive(Args)]
pub struct FundsArgs {
    /// Filter by category (e.g. value, income)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by asset type (e.g. equity, "fixed income")
    #[arg(long)]
    pub asset_type: Option<String>,
}

pub fn run(args: &FundsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let funds = client.get_funds()?;
    let selected: Vec<Fund> = funds
        .into_funds()
        .into_iter()
        .filter(|f| matches_filter(&f.category, args.category.as_deref()))
        .filter(|f| matches_filter(&f.asset_type, args.asset_type.as_deref()))
        .collect();

    match format {
        OutputFormat::Table => print_funds_table(&selected),
        OutputFormat::Json => print_json(&selected),
        OutputFormat::Csv => print_funds_csv(&selected)?,
        OutputFormat::Markdown => print_funds_markdown(&selected),
    }
    Ok(())
}

fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    filter.map_or(true, |wanted| value.eq_ignore_ascii_case(wanted.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_matches_everything() {
        assert!(matches_filter("value", None));
        assert!(matches_filter("", None));
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert!(matches_filter("Equity", Some("equity")));
        assert!(matches_filter("Fixed Income", Some(" fixed income ")));
        assert!(!matches_filter("Equity", Some("income")));
    }
}
