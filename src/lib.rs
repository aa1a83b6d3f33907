//! gottengeo: geotagging core
//!
//! A library and CLI tool for the geographic side of photo geotagging:
//! reverse geocoding against a GeoNames gazetteer, reading GPX/KML tracks,
//! and converting coordinates to and from photo metadata rationals.
//!
//! ## Features
//!
//! - Nearest-city lookup with a rounded-coordinate cache
//! - Prefix-loaded city name search
//! - Event-driven XML element extraction for GPX and KML
//! - Degrees/minutes/seconds and bounded-denominator rationals
//! - Text, JSON and map URL summaries
//!
//! ## Quick Start
//!
//! ```rust
//! use gottengeo::coord::format_coords;
//! use gottengeo::geonames::{GeonameIndex, InMemoryGazetteer};
//! use std::sync::Arc;
//!
//! let gazetteer = InMemoryGazetteer::new(
//!     "Paris\t48.85341\t2.3488\tFR\t11\tEurope/Paris\n\
//!      London\t51.50853\t-0.12574\tGB\tENG\tEurope/London\n",
//! );
//! let index = GeonameIndex::with_builtin_territories(Arc::new(gazetteer));
//!
//! let record = index.lookup(48.8566, 2.3522).unwrap().unwrap();
//! assert_eq!(record.city, "Paris");
//! assert_eq!(record.country_name, "France");
//!
//! assert_eq!(format_coords(48.8566, 2.3522), "N 48.85660, E 2.35220");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geonames;
pub mod track;
pub mod xml;

// Re-export commonly used types
pub use config::Config;
pub use coord::{GeoPoint, Rational};
pub use error::{Error, Result};
pub use format::LocationReport;
pub use geonames::{GeonameIndex, GeonameRecord};
pub use track::{Track, TrackPoint};
pub use xml::StreamingElementParser;
