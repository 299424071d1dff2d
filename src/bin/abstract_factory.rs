use colored::Colorize;
use design_patterns::creational::abstract_factory;
use design_patterns::{logging, CatalogConfig, ConfigError};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = CatalogConfig::from_env()?;
    println!("{}", "=== Abstract Factory Pattern ===".bold());

    let (corporate, individual) = abstract_factory::demo(&config);
    println!("Factory: {}", config.factory.bank.to_string().cyan());
    println!("  {corporate}");
    println!("  {individual}");
    Ok(())
}
