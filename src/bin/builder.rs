use colored::Colorize;
use design_patterns::creational::builder;
use design_patterns::logging;

fn main() {
    logging::init();
    println!("{}", "=== Builder Pattern ===".bold());

    let (individual, corporate) = builder::demo();
    println!("{individual}");
    println!("{corporate}");
}
