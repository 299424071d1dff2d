use colored::Colorize;
use design_patterns::behavioral::mediator::{self, Dispatch};
use design_patterns::logging;

fn main() {
    logging::init();
    println!("{}", "=== Mediator Pattern ===".bold());

    for dispatch in mediator::demo() {
        match dispatch {
            Dispatch::Handled { handler } => println!("{}", handler.green()),
            Dispatch::Unhandled(kind) => println!("{}", format!("{kind:?}: no handler").yellow()),
        }
    }
}
