//! CLI subcommand implementations.

pub mod fund;
pub mod funds;
