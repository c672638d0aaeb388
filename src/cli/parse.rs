use clap::{ArgAction, Parser};

use crate::core::error::GradusError;

const SCALES_HELP: &str = "\
Available scales: C (Celsius), F (Fahrenheit), K (Kelvin), R (Rankine)
                  Re (Réaumur), De (Delisle), N (Newton), Ro (Rømer)";

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "gradus",
    about = "Convert temperatures between eight scales",
    override_usage = "gradus [OPTIONS] -s <SCALE> -t <SCALE> [TEMPERATURE]...",
    disable_help_flag = true,
    args_override_self = true,
    after_help = SCALES_HELP
)]
pub struct Cli {
    /// Source temperature scale
    #[arg(short, long, value_name = "SCALE")]
    pub source: Option<String>,

    /// Target temperature scale
    #[arg(short, long, value_name = "SCALE")]
    pub target: Option<String>,

    /// Display the temperature conversion table
    #[arg(short = 'T', long)]
    pub table: bool,

    /// Display the temperature comparison graph
    #[arg(short = 'G', long)]
    pub graph: bool,

    /// Read every input item as a list of values
    #[arg(short, long)]
    pub array: bool,

    /// Input separator characters (default: whitespace)
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub in_sep: Option<String>,

    /// Output separator (default: newline)
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub out_sep: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Display this help message
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Temperatures to convert (read from stdin, one per line, if omitted)
    #[arg(value_name = "TEMPERATURE", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Parse `std::env::args`. Malformed command lines become
/// `GradusError::Arguments` instead of clap's own exit.
pub fn parse_args() -> Result<Cli, GradusError> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, GradusError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or("invalid arguments");
        GradusError::Arguments(first.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_command_line() {
        let cli = parse_from([
            "gradus", "-s", "C", "--target", "Ro", "-a", "--in-sep", ",", "--out-sep", "; ",
            "--debug", "1,2", "3",
        ])
        .unwrap();
        assert_eq!(cli.source.as_deref(), Some("C"));
        assert_eq!(cli.target.as_deref(), Some("Ro"));
        assert!(cli.array && cli.debug);
        assert!(!cli.table && !cli.graph && !cli.help);
        assert_eq!(cli.in_sep.as_deref(), Some(","));
        assert_eq!(cli.out_sep.as_deref(), Some("; "));
        assert_eq!(cli.values, ["1,2", "3"]);
    }

    #[test]
    fn test_negative_positional_values() {
        let cli = parse_from(["gradus", "-s", "C", "-t", "F", "-40", "-12.5"]).unwrap();
        assert_eq!(cli.values, ["-40", "-12.5"]);
    }

    #[test]
    fn test_separator_may_start_with_hyphen() {
        let cli = parse_from(["gradus", "-s", "C", "-t", "F", "--out-sep", "-", "1"]).unwrap();
        assert_eq!(cli.out_sep.as_deref(), Some("-"));
    }

    #[test]
    fn test_mode_flags() {
        let cli = parse_from(["gradus", "-T", "-G", "-h"]).unwrap();
        assert!(cli.table && cli.graph && cli.help);
        assert!(cli.source.is_none() && cli.values.is_empty());
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_from(["gradus", "--bogus"]).unwrap_err();
        assert!(matches!(err, GradusError::Arguments(ref msg) if msg.contains("--bogus")));
    }

    #[test]
    fn test_repeated_options_keep_last_value() {
        let cli = parse_from([
            "gradus", "-s", "C", "-s", "K", "-t", "F", "--target", "Re", "--in-sep", ",",
            "--in-sep", ";", "--out-sep", " ", "--out-sep", "|", "-a", "-a", "1",
        ])
        .unwrap();
        assert_eq!(cli.source.as_deref(), Some("K"));
        assert_eq!(cli.target.as_deref(), Some("Re"));
        assert_eq!(cli.in_sep.as_deref(), Some(";"));
        assert_eq!(cli.out_sep.as_deref(), Some("|"));
        assert!(cli.array);
    }

    #[test]
    fn test_version_flag_is_unknown() {
        for flag in ["-V", "--version"] {
            let err = parse_from(["gradus", flag]).unwrap_err();
            assert!(matches!(err, GradusError::Arguments(ref msg) if msg.contains(flag)));
        }
    }

    #[test]
    fn test_missing_option_value() {
        let err = parse_from(["gradus", "-s"]).unwrap_err();
        assert!(matches!(err, GradusError::Arguments(_)));
    }
}
