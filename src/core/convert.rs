//! Scale-to-scale conversion, always pivoting through Celsius.

use crate::core::{constants::ZERO_SNAP, error::ConvertError, scale::Scale};

/// Convert `value` between two already-resolved scales.
///
/// Fails only when `value` is negative on an absolute source scale.
pub fn convert_scales(value: f64, source: Scale, target: Scale) -> Result<f64, ConvertError> {
    if source.is_absolute() && value < 0.0 {
        return Err(ConvertError::NegativeAbsolute {
            scale: source,
            value,
        });
    }
    Ok(target.from_celsius(source.to_celsius(value)))
}

/// Convert `value` between two scales named by command-line tokens.
pub fn convert(value: f64, source: &str, target: &str) -> Result<f64, ConvertError> {
    let src = Scale::lookup(source).ok_or_else(|| ConvertError::UnknownSource(source.to_owned()))?;
    let dst = Scale::lookup(target).ok_or_else(|| ConvertError::UnknownTarget(target.to_owned()))?;
    convert_scales(value, src, dst)
}

/// Flush rounding dust (and negative zero) to `0.0` so it prints as `0.00`.
#[inline]
#[must_use]
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ZERO_SNAP { 0.0 } else { value }
}
