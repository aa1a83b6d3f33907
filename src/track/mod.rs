//! GPS track loading
//!
//! Track loaders drive the streaming element parser over GPX or KML files
//! and collect timestamped points. A [`Track`] can then answer "where was I
//! at time T?" by interpolating between neighbouring points.
//!
//! ## Flex Point
//! Adding a new track format requires:
//! 1. Create `src/track/{format}.rs` implementing `TrackLoader`
//! 2. Add a `TrackFormat` variant and its file extension
//! 3. Return the loader from `get_loader`

pub mod gpx;
pub mod kml;

use crate::coord::GeoPoint;
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// A single timestamped position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub point: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    /// Seconds since the Unix epoch (UTC)
    pub timestamp: i64,
}

/// Points of one or more track files, ordered by timestamp
///
/// A later point with the same timestamp replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    points: BTreeMap<i64, TrackPoint>,
}

impl Track {
    /// Build a track from unordered points
    pub fn new(points: impl IntoIterator<Item = TrackPoint>) -> Self {
        let mut track = Self::default();
        track.extend(points);
        track
    }

    /// Add points, replacing any with the same timestamp
    pub fn extend(&mut self, points: impl IntoIterator<Item = TrackPoint>) {
        for point in points {
            self.points.insert(point.timestamp, point);
        }
    }

    /// Merge another track into this one
    pub fn merge(&mut self, other: Track) {
        self.points.extend(other.points);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in timestamp order
    pub fn points(&self) -> impl Iterator<Item = &TrackPoint> {
        self.points.values()
    }

    /// Timestamp of the first point
    pub fn start(&self) -> Option<i64> {
        self.points.keys().next().copied()
    }

    /// Timestamp of the last point
    pub fn end(&self) -> Option<i64> {
        self.points.keys().next_back().copied()
    }

    /// Position at the given time
    ///
    /// # Returns
    /// - the recorded point for an exact timestamp match
    /// - a linear interpolation between the surrounding points when the time
    ///   falls strictly inside the track (elevation only when both
    ///   neighbours have one)
    /// - None outside the track's time range
    pub fn position_at(&self, timestamp: i64) -> Option<TrackPoint> {
        if let Some(point) = self.points.get(&timestamp) {
            return Some(*point);
        }

        let (_, before) = self.points.range(..timestamp).next_back()?;
        let (_, after) = self.points.range(timestamp..).next()?;

        let span = (after.timestamp - before.timestamp) as f64;
        let fraction = (timestamp - before.timestamp) as f64 / span;
        let lerp = |a: f64, b: f64| a + (b - a) * fraction;

        Some(TrackPoint {
            point: GeoPoint::new(
                lerp(before.point.lat, after.point.lat),
                lerp(before.point.lon, after.point.lon),
            ),
            elevation: match (before.elevation, after.elevation) {
                (Some(a), Some(b)) => Some(lerp(a, b)),
                _ => None,
            },
            timestamp,
        })
    }
}

/// Supported track file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Gpx,
    Kml,
}

impl TrackFormat {
    /// Pick a format from a file's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "gpx" => Ok(Self::Gpx),
            "kml" => Ok(Self::Kml),
            _ => Err(Error::FormatMismatch {
                expected: "a .gpx or .kml track".to_string(),
                found: path.display().to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gpx => write!(f, "gpx"),
            Self::Kml => write!(f, "kml"),
        }
    }
}

/// Trait for track file loaders
pub trait TrackLoader {
    /// The format this loader reads
    fn format(&self) -> TrackFormat;

    /// Load a track from a buffered reader
    fn load_reader(&self, reader: &mut dyn BufRead) -> Result<Track>;

    /// Load a track file from disk
    fn load_file(&self, path: &Path) -> Result<Track> {
        let mut reader = BufReader::new(File::open(path)?);
        let track = self.load_reader(&mut reader)?;
        info!(
            "Loaded {} points from {} ({})",
            track.len(),
            path.display(),
            self.format()
        );
        Ok(track)
    }

    /// Load a track from a string
    fn load_str(&self, xml: &str) -> Result<Track> {
        let mut bytes = xml.as_bytes();
        self.load_reader(&mut bytes)
    }
}

/// Get the loader for a format
pub fn get_loader(format: TrackFormat) -> Box<dyn TrackLoader> {
    match format {
        TrackFormat::Gpx => Box::new(gpx::GpxLoader),
        TrackFormat::Kml => Box::new(kml::KmlLoader),
    }
}

/// Load a track file, choosing the loader by extension
pub fn load_track(path: impl AsRef<Path>) -> Result<Track> {
    let path = path.as_ref();
    let format = TrackFormat::from_path(path)?;
    get_loader(format).load_file(path)
}

/// Parse a track timestamp into epoch seconds
///
/// Accepts RFC 3339 and, for files that omit the offset, a bare
/// `YYYY-MM-DDTHH:MM:SS[.fff]` read as UTC.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.timestamp());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|time| time.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: i64, lat: f64, lon: f64, elevation: Option<f64>) -> TrackPoint {
        TrackPoint {
            point: GeoPoint::new(lat, lon),
            elevation,
            timestamp,
        }
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1970-01-01T00:00:10Z"), Some(10));
        assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp(" 2021-01-01T00:00:00 "), Some(1_609_459_200));
        assert_eq!(parse_timestamp("2021-01-01T00:00:00.500"), Some(1_609_459_200));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_track_orders_and_replaces() {
        let track = Track::new([
            point(20, 1.0, 1.0, None),
            point(10, 0.0, 0.0, None),
            point(20, 2.0, 2.0, None),
        ]);

        assert_eq!(track.len(), 2);
        assert_eq!(track.start(), Some(10));
        assert_eq!(track.end(), Some(20));
        let lats: Vec<f64> = track.points().map(|p| p.point.lat).collect();
        assert_eq!(lats, vec![0.0, 2.0]);
    }

    #[test]
    fn test_position_at() {
        let track = Track::new([
            point(100, 10.0, 20.0, Some(100.0)),
            point(200, 20.0, 40.0, Some(200.0)),
            point(300, 30.0, 60.0, None),
        ]);

        assert_eq!(track.position_at(100), Some(point(100, 10.0, 20.0, Some(100.0))));

        let middle = track.position_at(150).unwrap();
        assert_eq!(middle.point, GeoPoint::new(15.0, 30.0));
        assert_eq!(middle.elevation, Some(150.0));
        assert_eq!(middle.timestamp, 150);

        let late = track.position_at(250).unwrap();
        assert_eq!(late.point, GeoPoint::new(25.0, 50.0));
        assert_eq!(late.elevation, None);

        assert_eq!(track.position_at(99), None);
        assert_eq!(track.position_at(301), None);
        assert_eq!(Track::default().position_at(0), None);
    }

    #[test]
    fn test_merge() {
        let mut track = Track::new([point(1, 0.0, 0.0, None)]);
        track.merge(Track::new([point(2, 1.0, 1.0, None)]));
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_track_format_from_path() {
        assert_eq!(TrackFormat::from_path(Path::new("a.gpx")).unwrap(), TrackFormat::Gpx);
        assert_eq!(TrackFormat::from_path(Path::new("b.KML")).unwrap(), TrackFormat::Kml);
        assert!(matches!(
            TrackFormat::from_path(Path::new("c.txt")),
            Err(Error::FormatMismatch { .. })
        ));
        assert!(TrackFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_track_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.gpx");
        std::fs::write(
            &path,
            r#"<gpx><trk><trkseg><trkpt lat="1" lon="2"><time>2021-01-01T00:00:00Z</time></trkpt></trkseg></trk></gpx>"#,
        )
        .unwrap();

        let track = load_track(&path).unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.start(), Some(1_609_459_200));
    }
}
