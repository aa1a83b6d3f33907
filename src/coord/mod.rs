//! Coordinate math
//!
//! This module handles:
//! - Coordinate validity checks
//! - Decimal / degrees-minutes-seconds / rational conversions
//! - Great-circle distance
//! - Cardinal-direction formatting

pub mod distance;
pub mod dms;
pub mod rational;

pub use distance::great_circle_distance;
pub use dms::{decimal_to_dms, dms_to_decimal, latitude_ref, longitude_ref, Dms};
pub use rational::{float_to_rational, Rational};

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from optional components, if both are present and valid
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) if is_valid_coordinate(lat, lon) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    /// Whether both components are finite and within range
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lon)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || self.lat.abs() > MAX_LATITUDE {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lon.is_finite() || self.lon.abs() > MAX_LONGITUDE {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_coords(self.lat, self.lon))
    }
}

/// Determine the validity of coordinates
///
/// NaN and infinities are treated as non-numeric and rejected.
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat.abs() <= MAX_LATITUDE && lon.abs() <= MAX_LONGITUDE
}

/// Validity check for entities whose coordinates may be absent
pub fn valid_coords(lat: Option<f64>, lon: Option<f64>) -> bool {
    GeoPoint::from_parts(lat, lon).is_some()
}

/// Parse a decimal coordinate component, rejecting non-numeric text
pub fn parse_component(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Add cardinal directions to decimal coordinates
///
/// `format_coords(45.0, -73.0) == "N 45.00000, W 73.00000"`
pub fn format_coords(lat: f64, lon: f64) -> String {
    format!(
        "{} {:.5}, {} {:.5}",
        latitude_ref(lat),
        lat.abs(),
        longitude_ref(lon),
        lon.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(is_valid_coordinate(0.0, 0.0));
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
        assert!(is_valid_coordinate(48.8566, 2.3522));
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!is_valid_coordinate(90.0001, 0.0));
        assert!(!is_valid_coordinate(0.0, -180.5));
        assert!(!is_valid_coordinate(f64::NAN, 0.0));
        assert!(!is_valid_coordinate(0.0, f64::INFINITY));
    }

    #[test]
    fn test_valid_coords_with_absent_parts() {
        assert!(valid_coords(Some(1.0), Some(2.0)));
        assert!(!valid_coords(None, Some(2.0)));
        assert!(!valid_coords(Some(1.0), None));
        assert!(!valid_coords(Some(100.0), Some(2.0)));
    }

    #[test]
    fn test_validate() {
        assert!(GeoPoint::new(40.7128, -74.0060).validate().is_ok());
        assert!(GeoPoint::new(91.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, 181.0).validate().is_err());
    }

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component(" 48.5 "), Some(48.5));
        assert_eq!(parse_component("north"), None);
        assert_eq!(parse_component("NaN"), None);
    }

    #[test]
    fn test_format_coords() {
        assert_eq!(format_coords(45.0, -73.0), "N 45.00000, W 73.00000");
        assert_eq!(format_coords(-33.8688, 151.2093), "S 33.86880, E 151.20930");
        assert_eq!(GeoPoint::new(0.0, 0.0).to_string(), "N 0.00000, E 0.00000");
    }
}
