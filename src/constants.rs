//! Centralized constants for the gottengeo crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Maximum absolute latitude in degrees
    pub const MAX_LATITUDE: f64 = 90.0;

    /// Maximum absolute longitude in degrees
    pub const MAX_LONGITUDE: f64 = 180.0;
}

/// Metadata encoding constants
pub mod metadata {
    /// Largest denominator produced when encoding floats as rationals
    pub const MAX_DENOMINATOR: u64 = 99_999;
}

/// Geoname cache settings
pub mod cache {
    /// Decimal places kept in the quantized cache key (~1km)
    pub const KEY_PRECISION: usize = 2;
}

/// Summary formatting settings
pub mod summary {
    /// Combined length of place names above which multi-line output is used
    pub const MULTILINE_THRESHOLD: usize = 35;

    /// Text shown for entities without valid coordinates
    pub const NOT_GEOTAGGED: &str = "Not geotagged";

    /// Anchor title for map links
    pub const MAPS_ANCHOR: &str = "View in Google Maps";
}
