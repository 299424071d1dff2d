use colored::Colorize;
use design_patterns::creational::factory_method;
use design_patterns::logging;

fn main() {
    logging::init();
    println!("{}", "=== Factory Method Pattern ===".bold());

    for account in factory_method::demo() {
        println!("Created {}", account.to_string().green());
    }
}
