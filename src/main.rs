use std::env;

use passgen::{cli, exits, logging, tui};

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::setup_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
