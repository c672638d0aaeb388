//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::scale::Scale;

/// A token that names none of the supported scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScale(pub String);

impl fmt::Display for UnknownScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scale `{}`", self.0)
    }
}
impl Error for UnknownScale {}

/// Why a token could not become a temperature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Not a number, or a number followed by garbage.
    Invalid(String),
    /// Too large (or too small) for an `f64`.
    OutOfRange(String),
    /// `inf`, `infinity` or `nan`.
    NonFinite(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::Invalid(s) => write!(f, "Invalid number: {s}"),
            NumberError::OutOfRange(s) => write!(f, "Number out of range: {s}"),
            NumberError::NonFinite(s) => write!(f, "Special number not allowed: {s}"),
        }
    }
}
impl Error for NumberError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    UnknownSource(String),
    UnknownTarget(String),
    NegativeAbsolute { scale: Scale, value: f64 },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownSource(s) => write!(f, "Unknown source scale: {s}"),
            ConvertError::UnknownTarget(s) => write!(f, "Unknown target scale: {s}"),
            ConvertError::NegativeAbsolute { scale, value } => write!(
                f,
                "Temperature in {scale} scale cannot be negative (got {value:.2})"
            ),
        }
    }
}
impl Error for ConvertError {}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingScales,
    InvalidSource(String),
    InvalidTarget(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingScales => f.write_str("Source and target scales are required"),
            ConfigError::InvalidSource(s) => write!(f, "Invalid source scale: {s}"),
            ConfigError::InvalidTarget(s) => write!(f, "Invalid target scale: {s}"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up to `main`.
#[derive(Debug)]
pub enum GradusError {
    Io(io::Error),
    Number(NumberError),
    Convert(ConvertError),
    Config(ConfigError),
    /// First line of clap's diagnostic for a malformed command line.
    Arguments(String),
    /// `-h` / `--help`: usage goes to stderr and the run fails.
    Help,
}

impl GradusError {
    /// Whether the usage text should follow the diagnostic.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            GradusError::Config(_)
                | GradusError::Arguments(_)
                | GradusError::Help
                | GradusError::Convert(
                    ConvertError::UnknownSource(_) | ConvertError::UnknownTarget(_)
                )
        )
    }
}

impl fmt::Display for GradusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradusError::Io(e) => write!(f, "{e}"),
            GradusError::Number(e) => write!(f, "{e}"),
            GradusError::Convert(e) => write!(f, "{e}"),
            GradusError::Config(e) => write!(f, "{e}"),
            GradusError::Arguments(msg) => f.write_str(msg),
            GradusError::Help => Ok(()),
        }
    }
}
impl Error for GradusError {}

// automatic conversions
impl From<io::Error> for GradusError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<NumberError> for GradusError {
    fn from(e: NumberError) -> Self {
        Self::Number(e)
    }
}
impl From<ConvertError> for GradusError {
    fn from(e: ConvertError) -> Self {
        Self::Convert(e)
    }
}
impl From<ConfigError> for GradusError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
