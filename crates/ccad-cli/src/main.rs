use ccad_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging is best-effort; a read-only home must not block a run.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ccad error: {:#}", err);
        std::process::exit(1);
    }
}
