mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gamco_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gamco")]
#[command(about = "Query GAMCO closed-end fund NAVs")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// API base URL (defaults to the production GAMCO API)
    #[arg(long, env = "GAMCO_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all published funds
    Funds(commands::funds::FundsArgs),
    /// Show a single fund by ticker symbol
    Fund(commands::fund::FundArgs),
    /// Print the raw API response
    Raw,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gamco=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match &cli.base_url {
        Some(url) => Client::with_base_url(url),
        None => Client::new(),
    };

    match &cli.command {
        Commands::Funds(args) => commands::funds::run(args, &client, &cli.output)?,
        Commands::Fund(args) => commands::fund::run(args, &client, &cli.output)?,
        Commands::Raw => println!("{}", client.fetch()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_table() {
        let cli = Cli::try_parse_from(["gamco", "funds"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn output_accepts_markdown_alias() {
        let cli = Cli::try_parse_from(["gamco", "raw", "--output", "md"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Markdown);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let err = Cli::try_parse_from(["gamco", "--output", "xml", "funds"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
