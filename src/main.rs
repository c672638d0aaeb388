use std::process::ExitCode;

use gradus::{GradusError, cli};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, GradusError::Help) {
                eprintln!("{e}");
            }
            if e.shows_usage() {
                cli::print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
