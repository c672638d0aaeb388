//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{RunConfig, RunConfigBuilder},
    constants::DECIMAL_PRECISION,
    convert::{convert, convert_scales},
    error::{ConfigError, ConvertError, GradusError, NumberError, UnknownScale},
    number::parse_number,
    scale::Scale,
};

pub use render::{render_graph, render_table};

/// Parse `token` and convert it between two scales named by their tokens,
/// e.g. `convert_token("100", "C", "F")`.
pub fn convert_token(token: &str, source: &str, target: &str) -> Result<f64, GradusError> {
    let value = parse_number(token)?;
    Ok(convert(value, source, target)?)
}
