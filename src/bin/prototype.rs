use colored::Colorize;
use design_patterns::creational::prototype;
use design_patterns::{logging, CatalogConfig, ConfigError};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = CatalogConfig::from_env()?;
    println!("{}", "=== Prototype Pattern ===".bold());

    for (source, account) in prototype::demo(&config) {
        println!("{}", source.name().cyan());
        println!("  prototype number: {}", source.number());
        println!("  clone number:     {}", account.number().to_string().green());
    }
    Ok(())
}
