//! fibstrat — Fibonacci term calculator with interchangeable strategies.

use fibstrat_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing: WARN by default, INFO with --verbose,
    // overridable through the environment filter.
    let default_level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("fibstrat: {err}");
        std::process::exit(errors::exit_code(&err));
    }
}
