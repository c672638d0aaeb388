//! Token to `f64`, with the same failure classes as C `strtod` + `errno`.

use std::borrow::Cow;

use crate::core::error::NumberError;

/// Replace U+2212 MINUS SIGN with an ASCII hyphen so pasted values parse.
#[inline]
#[must_use]
pub fn normalize_unicode_minus(token: &str) -> Cow<'_, str> {
    if token.contains('\u{2212}') {
        Cow::Owned(token.replace('\u{2212}', "-"))
    } else {
        Cow::Borrowed(token)
    }
}

/// `inf`, `infinity` or `nan` in any case, optionally signed.
fn is_special_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|lit| unsigned.eq_ignore_ascii_case(lit))
}

/// A non-zero digit before the exponent: the literal does not denote zero.
fn has_nonzero_mantissa(s: &str) -> bool {
    s.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

/// Parse a temperature token into a finite `f64`.
///
/// * Leading whitespace is skipped, anything left over after the number is
///   an error.
/// * Literals that overflow to infinity, or underflow to zero or a subnormal,
///   are out of range.
/// * Infinity and NaN literals are rejected outright.
pub fn parse_number(token: &str) -> Result<f64, NumberError> {
    let normalized = normalize_unicode_minus(token);
    let trimmed = normalized.trim_start();

    if is_special_literal(trimmed) {
        return Err(NumberError::NonFinite(token.to_owned()));
    }

    let val = lexical_core::parse::<f64>(trimmed.as_bytes())
        .map_err(|_| NumberError::Invalid(token.to_owned()))?;

    if !val.is_finite() {
        return Err(NumberError::OutOfRange(token.to_owned()));
    }
    if (val == 0.0 && has_nonzero_mantissa(trimmed)) || val.is_subnormal() {
        return Err(NumberError::OutOfRange(token.to_owned()));
    }
    Ok(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("0"), Ok(0.0));
        assert_eq!(parse_number("-40"), Ok(-40.0));
        assert_eq!(parse_number("+12.5"), Ok(12.5));
        assert_eq!(parse_number("1e2"), Ok(100.0));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("0.000"), Ok(0.0));
    }

    #[test]
    fn test_leading_whitespace_and_unicode_minus() {
        assert_eq!(parse_number("  7"), Ok(7.0));
        assert_eq!(parse_number("\u{2212}3.5"), Ok(-3.5));
    }

    #[test]
    fn test_invalid() {
        for s in ["abc", "", "   ", "12abc", "1.2.3", "7 ", "--1", "1,5"] {
            assert_eq!(
                parse_number(s),
                Err(NumberError::Invalid(s.to_owned())),
                "token {s:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_number("1e400"),
            Err(NumberError::OutOfRange("1e400".into()))
        );
        assert_eq!(
            parse_number("-1e400"),
            Err(NumberError::OutOfRange("-1e400".into()))
        );
        for s in ["1e-400", "4e-320", "-2.5e-310"] {
            assert_eq!(
                parse_number(s),
                Err(NumberError::OutOfRange(s.to_owned())),
                "token {s:?}"
            );
        }
        assert_eq!(parse_number("2.3e-308"), Ok(2.3e-308));
    }

    #[test]
    fn test_hex_literals_rejected() {
        for s in ["0x10", "0X1p4"] {
            assert_eq!(parse_number(s), Err(NumberError::Invalid(s.to_owned())));
        }
    }

    #[test]
    fn test_special_values() {
        for s in ["inf", "-inf", "Infinity", "NaN", "nan", "+INF"] {
            assert_eq!(
                parse_number(s),
                Err(NumberError::NonFinite(s.to_owned())),
                "token {s:?}"
            );
        }
    }
}
