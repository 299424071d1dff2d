use colored::Colorize;
use design_patterns::structural::adapter;
use design_patterns::{logging, CatalogConfig, ConfigError};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = CatalogConfig::from_env()?;
    println!("{}", "=== Adapter Pattern ===".bold());

    for details in adapter::demo(&config) {
        println!("{details}");
    }
    Ok(())
}
