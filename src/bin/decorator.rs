use colored::Colorize;
use design_patterns::logging;
use design_patterns::structural::decorator;

fn main() {
    logging::init();
    println!("{}", "=== Decorator Pattern ===".bold());

    let purchase = decorator::demo();
    println!("Bought {} from {}", purchase.account.green(), purchase.bank);
}
