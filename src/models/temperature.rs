use std::fmt;

use crate::error::{ProcessingError, Result};

/// Convert a temperature field to fixed-point tenths of a degree.
///
/// Accepts an optional leading `-` followed by exactly `D.D` or `DD.D`,
/// converted by positional digit arithmetic. Anything else is rejected; the
/// input format guarantees values stay within [-99.9, 99.9].
pub fn parse_tenths(field: &[u8]) -> Result<i32> {
    let (sign, digits) = match field {
        [b'-', rest @ ..] => (-1, rest),
        _ => (1, field),
    };

    let magnitude = match digits {
        [units, b'.', frac] => ascii_digit(*units)? * 10 + ascii_digit(*frac)?,
        [tens, units, b'.', frac] => {
            ascii_digit(*tens)? * 100 + ascii_digit(*units)? * 10 + ascii_digit(*frac)?
        }
        _ => {
            return Err(ProcessingError::InvalidTemperature(format!(
                "expected D.D or DD.D, got '{}'",
                String::from_utf8_lossy(field)
            )))
        }
    };

    Ok(sign * magnitude)
}

fn ascii_digit(byte: u8) -> Result<i32> {
    if byte.is_ascii_digit() {
        Ok(i32::from(byte - b'0'))
    } else {
        Err(ProcessingError::InvalidTemperature(format!(
            "non-digit byte {byte:#04x} in numeric field"
        )))
    }
}

/// Render a fixed-point tenths value with exactly one fractional digit.
pub fn format_tenths(tenths: i32) -> FixedPoint {
    FixedPoint(tenths)
}

pub struct FixedPoint(i32);

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_and_negative_fields() {
        assert_eq!(parse_tenths(b"12.9").unwrap(), 129);
        assert_eq!(parse_tenths(b"0.0").unwrap(), 0);
        assert_eq!(parse_tenths(b"-10.1").unwrap(), -101);
        assert_eq!(parse_tenths(b"-1.1").unwrap(), -11);
        assert_eq!(parse_tenths(b"99.9").unwrap(), 999);
        assert_eq!(parse_tenths(b"-99.9").unwrap(), -999);
    }

    #[test]
    fn rejects_malformed_fields() {
        assert!(parse_tenths(b"").is_err());
        assert!(parse_tenths(b"-").is_err());
        assert!(parse_tenths(b"12").is_err());
        assert!(parse_tenths(b"1.23").is_err());
        assert!(parse_tenths(b"123.4").is_err());
        assert!(parse_tenths(b"1x.0").is_err());
        assert!(parse_tenths(b"--1.0").is_err());
    }

    #[test]
    fn formats_with_one_fractional_digit() {
        assert_eq!(format_tenths(389).to_string(), "38.9");
        assert_eq!(format_tenths(-389).to_string(), "-38.9");
        assert_eq!(format_tenths(0).to_string(), "0.0");
        assert_eq!(format_tenths(-5).to_string(), "-0.5");
        assert_eq!(format_tenths(100).to_string(), "10.0");
    }

    #[test]
    fn format_then_parse_round_trips() {
        use crate::utils::constants::{MAX_TEMP_TENTHS, MIN_TEMP_TENTHS};
        for tenths in [MIN_TEMP_TENTHS, -101, -11, -1, 0, 1, 39, 250, MAX_TEMP_TENTHS] {
            let rendered = format_tenths(tenths).to_string();
            assert_eq!(parse_tenths(rendered.as_bytes()).unwrap(), tenths);
        }
    }
}
