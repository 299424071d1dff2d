use colored::Colorize;
use design_patterns::behavioral::command;
use design_patterns::logging;

fn main() {
    logging::init();
    println!("{}", "=== Command Pattern ===".bold());

    let id = command::demo();
    println!("Executed command {}", id.to_string().green());
}
