//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibstrat — Fibonacci term calculator with interchangeable strategies.
#[derive(Parser, Debug)]
#[command(name = "fibstrat", version, about)]
pub struct AppConfig {
    /// The n-th Fibonacci number to compute.
    #[arg(short, long, default_value = "0", env = "FIBSTRAT_N", allow_hyphen_values = true)]
    pub n: i64,

    /// Strategy to use: ordinal index or case-insensitive name
    /// (see --list).
    #[arg(short, long, default_value = fibstrat_core::DEFAULT_STRATEGY)]
    pub method: String,

    /// Hide the answer (suitable for huge numbers).
    #[arg(long)]
    pub hide: bool,

    /// List the available strategies and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
