// Runs every pattern demo in catalog order.

use colored::Colorize;
use design_patterns::behavioral::{command, mediator};
use design_patterns::creational::{abstract_factory, builder, factory_method, prototype, singleton};
use design_patterns::structural::{adapter, bridge, decorator};
use design_patterns::{logging, CatalogConfig, ConfigError};

fn section(title: &str) {
    println!();
    println!("{}", format!("=== {title} ===").bold());
}

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = CatalogConfig::from_env()?;

    println!("{}", "Design Patterns Catalog".bold().underline());

    section("Command");
    println!("Executed command {}", command::demo());

    section("Mediator");
    for dispatch in mediator::demo() {
        println!("{dispatch:?}");
    }

    section("Abstract Factory");
    let (corporate, individual) = abstract_factory::demo(&config);
    println!("{corporate}, {individual}");

    section("Builder");
    let (individual, corporate) = builder::demo();
    println!("{individual}, {corporate}");

    section("Factory Method");
    for account in factory_method::demo() {
        println!("Created {account}");
    }

    section("Prototype");
    for (source, account) in prototype::demo(&config) {
        println!("{}: {} -> {}", source.name(), source.number(), account.number());
    }

    section("Singleton");
    let ids = singleton::demo(&config);
    if let Some(id) = ids.first() {
        println!("{} accesses, id {id}", ids.len());
    }

    section("Adapter");
    for details in adapter::demo(&config) {
        println!("{details}");
    }

    section("Bridge");
    for name in bridge::demo() {
        println!("{name}");
    }

    section("Decorator");
    let purchase = decorator::demo();
    println!("Bought {} from {}", purchase.account, purchase.bank);

    Ok(())
}
