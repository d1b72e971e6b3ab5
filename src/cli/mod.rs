//! Command mode: flags in, passwords or ratings out.

mod context;
mod flags;
pub mod prompts;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Parse arguments and run. Clap handles `--help`/`--version` and usage
/// errors itself.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = CliFlags::parse_from(args);
    crate::logging::init(flags.quiet);
    prompts::set_quiet(flags.quiet);

    match Context::new(flags).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
