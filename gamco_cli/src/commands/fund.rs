use anyhow::Result;
use clap::Args;
use gamco_api::Client;

use crate::output::{print_fund_csv, print_fund_markdown, print_fund_table, print_json, OutputFormat};

#[derive(Args)]
pub struct FundArgs {
    /// Ticker symbol (e.g. GUT)
    pub symbol: String,
}

pub fn run(args: &FundArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let symbol = args.symbol.trim().to_uppercase();
    let fund = client.get_fund(&symbol)?;

    match format {
        OutputFormat::Table => print_fund_table(&fund),
        OutputFormat::Json => print_json(&fund),
        OutputFormat::Csv => print_fund_csv(&fund)?,
        OutputFormat::Markdown => print_fund_markdown(&fund),
    }
    Ok(())
}
