//! Application entry point and dispatch.

use fibstrat_core::registry::{DefaultFactory, GeneratorFactory};
use fibstrat_core::FibError;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<(), FibError> {
    let factory = DefaultFactory::new();

    if config.list {
        print_strategies(&factory);
        return Ok(());
    }

    let generator = factory.get(&config.method)?;
    tracing::info!(strategy = generator.name(), n = config.n, "computing Fibonacci term");

    let value = generator.compute(config.n)?;

    if !config.hide {
        println!("Fibonacci number {} = {}", config.n, value);
    }
    Ok(())
}

fn print_strategies(factory: &DefaultFactory) {
    println!("Available strategies:");
    for (index, name) in factory.available().iter().enumerate() {
        println!("  {index}  {name}");
    }
}
