mod handlers;
pub mod parse;

use clap::CommandFactory;
pub use parse::Cli;

use crate::core::error::GradusError;

/// Flag precedence: help, then table, then graph, then conversion.
pub fn run() -> Result<(), GradusError> {
    let cli = parse::parse_args()?;
    if cli.help {
        return Err(GradusError::Help);
    }
    if cli.table {
        return handlers::table();
    }
    if cli.graph {
        return handlers::graph();
    }
    handlers::convert(cli)
}

/// Usage text, always on stderr.
pub fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}
