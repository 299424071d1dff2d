use colored::Colorize;
use design_patterns::logging;
use design_patterns::structural::bridge;

fn main() {
    logging::init();
    println!("{}", "=== Bridge Pattern ===".bold());

    for name in bridge::demo() {
        println!("{}", name.green());
    }
}
