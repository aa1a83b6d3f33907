//! Degrees/minutes/seconds conversion
//!
//! Metadata writers store coordinates as three rationals plus a hemisphere
//! reference character. These helpers convert in both directions.

use crate::coord::rational::{float_to_rational, Rational};
use serde::{Deserialize, Serialize};

/// A coordinate magnitude split into degrees, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
}

impl Dms {
    /// Convert back to decimal degrees, negated for `S`/`W` hemispheres
    pub fn to_decimal(&self, hemisphere: &str) -> f64 {
        dms_to_decimal(
            self.degrees.to_f64(),
            self.minutes.to_f64(),
            self.seconds.to_f64(),
            hemisphere,
        )
    }
}

/// Convert degrees, minutes, seconds into decimal degrees
///
/// The result is negative when the first character of `hemisphere` is one of
/// `S`, `W` (either case). An empty hemisphere counts as positive.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, hemisphere: &str) -> f64 {
    let sign = match hemisphere.chars().next() {
        Some('S' | 'W' | 's' | 'w') => -1.0,
        _ => 1.0,
    };
    sign * (degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Convert decimal degrees into degrees, minutes, seconds
///
/// Works on the absolute value; use [`latitude_ref`] / [`longitude_ref`] for
/// the hemisphere. Degrees and minutes are whole; the remaining seconds are
/// approximated by [`float_to_rational`].
pub fn decimal_to_dms(decimal: f64) -> Dms {
    let magnitude = decimal.abs();
    let degrees = magnitude.trunc();
    let remainder = (magnitude - degrees) * 60.0;
    let minutes = remainder.trunc();
    let seconds = (remainder - minutes) * 60.0;

    Dms {
        degrees: Rational::whole(degrees as u64),
        minutes: Rational::whole(minutes as u64),
        seconds: float_to_rational(seconds),
    }
}

/// Hemisphere reference for a latitude ("N" or "S")
pub fn latitude_ref(lat: f64) -> &'static str {
    if lat >= 0.0 {
        "N"
    } else {
        "S"
    }
}

/// Hemisphere reference for a longitude ("E" or "W")
pub fn longitude_ref(lon: f64) -> &'static str {
    if lon >= 0.0 {
        "E"
    } else {
        "W"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dms_to_decimal() {
        assert_abs_diff_eq!(dms_to_decimal(45.0, 30.0, 0.0, "N"), 45.5);
        assert_abs_diff_eq!(dms_to_decimal(45.0, 30.0, 36.0, "S"), -45.51);
        assert_abs_diff_eq!(dms_to_decimal(73.0, 0.0, 0.0, "w"), -73.0);
        assert_abs_diff_eq!(dms_to_decimal(73.0, 0.0, 0.0, ""), 73.0);
        assert_abs_diff_eq!(dms_to_decimal(10.0, 0.0, 0.0, "East"), 10.0);
    }

    #[test]
    fn test_decimal_to_dms() {
        let dms = decimal_to_dms(-45.51);
        assert_eq!(dms.degrees, Rational::whole(45));
        assert_eq!(dms.minutes, Rational::whole(30));
        assert_abs_diff_eq!(dms.seconds.to_f64(), 36.0, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut x = -180.0;
        while x <= 180.0 {
            let dms = decimal_to_dms(x);
            let back = dms.to_decimal(longitude_ref(x));
            assert!((back - x).abs() < 1e-5, "{} came back as {}", x, back);
            x += 0.123457;
        }
    }

    #[test]
    fn test_hemisphere_refs() {
        assert_eq!(latitude_ref(0.0), "N");
        assert_eq!(latitude_ref(-0.1), "S");
        assert_eq!(longitude_ref(12.0), "E");
        assert_eq!(longitude_ref(-12.0), "W");
    }
}
