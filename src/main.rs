use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod history;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tips;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 && terminal::is_interactive() {
        logging::init(false);
        tui::run();
        ExitCode::SUCCESS
    } else {
        cli::run(args)
    }
}
