use colored::Colorize;
use design_patterns::creational::singleton::{self, Repository};
use design_patterns::{logging, CatalogConfig, ConfigError};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = CatalogConfig::from_env()?;
    println!("{}", "=== Singleton Pattern ===".bold());

    for id in singleton::demo(&config) {
        println!("{id}");
    }
    println!(
        "Constructions: {}",
        Repository::constructions().to_string().green()
    );
    Ok(())
}
