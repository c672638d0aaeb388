//! The eight supported temperature scales and the alias table that names them.

use std::{fmt, str::FromStr};

use crate::core::error::UnknownScale;

/// Absolute zero on the Celsius scale
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

const FAHRENHEIT_RATIO: f64 = 9.0 / 5.0;
const FAHRENHEIT_OFFSET: f64 = 32.0;
const REAUMUR_RATIO: f64 = 4.0 / 5.0;
const DELISLE_RATIO: f64 = 3.0 / 2.0;
const DELISLE_BASE: f64 = 100.0;
const NEWTON_RATIO: f64 = 33.0 / 100.0;
const ROMER_RATIO: f64 = 21.0 / 40.0;
const ROMER_OFFSET: f64 = 7.5;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
    Delisle,
    Newton,
    Romer,
}

/// Every accepted spelling. Two-letter scales take `Xx`, `xx` and `XX`
/// only, never mixed case like `rE`.
const ALIASES: [(&str, Scale); 19] = [
    ("C", Scale::Celsius),
    ("c", Scale::Celsius),
    ("F", Scale::Fahrenheit),
    ("f", Scale::Fahrenheit),
    ("K", Scale::Kelvin),
    ("k", Scale::Kelvin),
    ("R", Scale::Rankine),
    ("r", Scale::Rankine),
    ("Re", Scale::Reaumur),
    ("re", Scale::Reaumur),
    ("RE", Scale::Reaumur),
    ("De", Scale::Delisle),
    ("de", Scale::Delisle),
    ("DE", Scale::Delisle),
    ("N", Scale::Newton),
    ("n", Scale::Newton),
    ("Ro", Scale::Romer),
    ("ro", Scale::Romer),
    ("RO", Scale::Romer),
];

impl Scale {
    pub const ALL: [Self; 8] = [
        Self::Celsius,
        Self::Fahrenheit,
        Self::Kelvin,
        Self::Rankine,
        Self::Reaumur,
        Self::Delisle,
        Self::Newton,
        Self::Romer,
    ];

    /// Resolve a command-line token. `None` means the scale is unknown.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|&(_, scale)| scale)
    }

    #[inline]
    #[must_use]
    pub fn is_valid(token: &str) -> bool {
        Self::lookup(token).is_some()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
            Self::Rankine => "Rankine",
            Self::Reaumur => "Réaumur",
            Self::Delisle => "Delisle",
            Self::Newton => "Newton",
            Self::Romer => "Rømer",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Rankine => "°R",
            Self::Reaumur => "°Ré",
            Self::Delisle => "°De",
            Self::Newton => "°N",
            Self::Romer => "°Rø",
        }
    }

    /// The canonical token, i.e. the first alias listed for this scale.
    #[must_use]
    pub fn token(self) -> &'static str {
        ALIASES
            .iter()
            .find(|&&(_, scale)| scale == self)
            .map_or("?", |&(alias, _)| alias)
    }

    /// Kelvin and Rankine start at absolute zero; negative readings are
    /// physically meaningless on them.
    #[inline]
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Kelvin | Self::Rankine)
    }

    /// Express `value` (in this scale) in degrees Celsius.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_RATIO,
            Self::Kelvin => value + ABSOLUTE_ZERO_CELSIUS,
            Self::Rankine => value / FAHRENHEIT_RATIO + ABSOLUTE_ZERO_CELSIUS,
            Self::Reaumur => value / REAUMUR_RATIO,
            Self::Delisle => DELISLE_BASE - value / DELISLE_RATIO,
            Self::Newton => value / NEWTON_RATIO,
            Self::Romer => (value - ROMER_OFFSET) / ROMER_RATIO,
        }
    }

    /// Express a Celsius reading in this scale.
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * FAHRENHEIT_RATIO + FAHRENHEIT_OFFSET,
            Self::Kelvin => celsius - ABSOLUTE_ZERO_CELSIUS,
            Self::Rankine => (celsius - ABSOLUTE_ZERO_CELSIUS) * FAHRENHEIT_RATIO,
            Self::Reaumur => celsius * REAUMUR_RATIO,
            Self::Delisle => (DELISLE_BASE - celsius) * DELISLE_RATIO,
            Self::Newton => celsius * NEWTON_RATIO,
            Self::Romer => celsius * ROMER_RATIO + ROMER_OFFSET,
        }
    }
}

impl FromStr for Scale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownScale(s.to_owned()))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_aliases_ignore_case() {
        for (upper, lower, scale) in [
            ("C", "c", Scale::Celsius),
            ("F", "f", Scale::Fahrenheit),
            ("K", "k", Scale::Kelvin),
            ("R", "r", Scale::Rankine),
            ("N", "n", Scale::Newton),
        ] {
            assert_eq!(Scale::lookup(upper), Some(scale));
            assert_eq!(Scale::lookup(lower), Some(scale));
        }
    }

    #[test]
    fn test_two_letter_aliases() {
        for token in ["Re", "re", "RE"] {
            assert_eq!(Scale::lookup(token), Some(Scale::Reaumur));
        }
        for token in ["De", "de", "DE"] {
            assert_eq!(Scale::lookup(token), Some(Scale::Delisle));
        }
        for token in ["Ro", "ro", "RO"] {
            assert_eq!(Scale::lookup(token), Some(Scale::Romer));
        }
    }

    #[test]
    fn test_mixed_case_and_unknown_tokens_rejected() {
        for token in ["rE", "dE", "rO", "X", "", "Celsius", " C", "C "] {
            assert_eq!(Scale::lookup(token), None, "token {token:?}");
            assert!(!Scale::is_valid(token));
        }
    }

    #[test]
    fn test_validity_matches_lookup() {
        for (alias, scale) in ALIASES {
            assert!(Scale::is_valid(alias));
            assert_eq!(alias.parse::<Scale>().unwrap(), scale);
        }
        assert!("Q".parse::<Scale>().is_err());
    }

    #[test]
    fn test_every_scale_has_a_token() {
        for scale in Scale::ALL {
            assert_eq!(Scale::lookup(scale.token()), Some(scale));
        }
    }

    #[test]
    fn test_absolute_scales() {
        let absolute: Vec<_> = Scale::ALL.into_iter().filter(|s| s.is_absolute()).collect();
        assert_eq!(absolute, [Scale::Kelvin, Scale::Rankine]);
    }

    #[test]
    fn test_celsius_round_trip_per_scale() {
        for scale in Scale::ALL {
            for c in [-40.0, 0.0, 36.6, 100.0, 1234.5] {
                let back = scale.to_celsius(scale.from_celsius(c));
                assert!((back - c).abs() < 1e-9, "{scale}: {c} -> {back}");
            }
        }
    }
}
