//! Human-readable summaries of locations
//!
//! Pure string formatting over [`LocationReport`]: any field may be absent,
//! and only present fields are joined.

use crate::config::Config;
use crate::constants::summary::{MAPS_ANCHOR, MULTILINE_THRESHOLD, NOT_GEOTAGGED};
use crate::coord::{format_coords, GeoPoint};
use crate::error::Result;
use crate::geonames::GeonameRecord;
use crate::track::TrackPoint;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separators used when joining place names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStyle {
    /// Joiner for short place names
    pub separator: String,
    /// Joiner once the names get long
    pub multiline_separator: String,
    /// Combined name length above which `multiline_separator` is used
    pub multiline_threshold: usize,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            multiline_separator: ",\n".to_string(),
            multiline_threshold: MULTILINE_THRESHOLD,
        }
    }
}

/// Join the present, non-empty parts with `joiner`
pub fn format_list(parts: &[Option<&str>], joiner: &str) -> String {
    parts
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Elevation with above/below sea level wording
pub fn format_elevation(altitude: f64) -> String {
    let wording = if altitude >= 0.0 {
        "m above sea level"
    } else {
        "m below sea level"
    };
    format!("{:.1}{}", altitude.abs(), wording)
}

/// Epoch seconds as `YYYY-MM-DD HH:MM:SS` in the given time zone
pub fn format_timestamp<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp(timestamp, 0)
        .map(|time| time.with_timezone(tz).format("%Y-%m-%d %X").to_string())
}

/// Pango markup link to a map URL
pub fn maps_link(url: &str, anchor: &str) -> String {
    format!(r#"<a title="{}" href="{}">Google</a>"#, anchor, url)
}

/// Everything known about one photo or trackpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoname: Option<GeonameRecord>,
}

impl LocationReport {
    /// Create an empty report with a label (usually a file name)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Report for a point on a track
    pub fn from_track_point(point: &TrackPoint) -> Self {
        Self {
            timestamp: Some(point.timestamp),
            elevation: point.elevation,
            ..Self::default()
        }
        .with_point(point.point)
    }

    pub fn with_point(mut self, point: GeoPoint) -> Self {
        self.lat = Some(point.lat);
        self.lon = Some(point.lon);
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_geoname(mut self, geoname: Option<GeonameRecord>) -> Self {
        self.geoname = geoname;
        self
    }

    /// The coordinates, if present and valid
    pub fn point(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.lat, self.lon)
    }

    pub fn valid_coords(&self) -> bool {
        self.point().is_some()
    }

    /// Timestamp in local time
    pub fn pretty_time(&self) -> Option<String> {
        format_timestamp(self.timestamp?, &Local)
    }

    /// Coordinates with cardinal directions, or "Not geotagged"
    pub fn pretty_coords(&self) -> String {
        match self.point() {
            Some(point) => format_coords(point.lat, point.lon),
            None => NOT_GEOTAGGED.to_string(),
        }
    }

    /// City, state and country, if present
    ///
    /// Switches to the multi-line separator when `multiline` is set and the
    /// names are longer than the style's threshold.
    pub fn pretty_geoname(&self, multiline: bool, style: &SummaryStyle) -> String {
        let Some(geoname) = &self.geoname else {
            return String::new();
        };

        let names = [
            Some(geoname.city.as_str()),
            geoname.province_state.as_deref(),
            Some(geoname.country_name.as_str()),
        ];
        let length: usize = names.iter().flatten().map(|s| s.chars().count()).sum();
        let joiner = if multiline && length > style.multiline_threshold {
            &style.multiline_separator
        } else {
            &style.separator
        };
        format_list(&names, joiner)
    }

    pub fn pretty_elevation(&self) -> Option<String> {
        self.elevation.filter(|e| e.is_finite()).map(format_elevation)
    }

    /// Plain-text summary, one fact per line
    pub fn short_summary(&self, style: &SummaryStyle) -> String {
        let time = self.pretty_time();
        let coords = self.pretty_coords();
        let geoname = self.pretty_geoname(true, style);
        let elevation = self.pretty_elevation();

        format_list(
            &[
                time.as_deref(),
                Some(coords.as_str()),
                Some(geoname.as_str()),
                elevation.as_deref(),
            ],
            "\n",
        )
    }

    /// Pango-markup summary headed by the label's base name
    pub fn long_summary(&self, style: &SummaryStyle) -> String {
        let name = self
            .label
            .as_deref()
            .map(|label| {
                Path::new(label)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| label.to_string())
            })
            .unwrap_or_default();

        format!(
            "<span {}>{}</span>\n<span {}>{}</span>",
            r#"size="larger""#,
            name,
            r#"style="italic" size="smaller""#,
            self.short_summary(style)
        )
    }

    /// Map link using the configured URL provider, if coordinates are valid
    pub fn maps_link(&self, config: &Config) -> Result<Option<String>> {
        let Some(point) = self.point() else {
            return Ok(None);
        };
        let url = config.format_url(None, point.lat, point.lon)?;
        Ok(Some(maps_link(&url, MAPS_ANCHOR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn paris() -> GeonameRecord {
        GeonameRecord {
            city: "Paris".to_string(),
            province_state: None,
            country_code: "FR".to_string(),
            country_name: "France".to_string(),
            timezone: "Europe/Paris".to_string(),
        }
    }

    fn long_name() -> GeonameRecord {
        GeonameRecord {
            city: "Rancho Santa Margarita".to_string(),
            province_state: Some("California".to_string()),
            country_code: "US".to_string(),
            country_name: "United States".to_string(),
            timezone: "America/Los_Angeles".to_string(),
        }
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[Some("a"), None, Some(""), Some("b")], ", "), "a, b");
        assert_eq!(format_list(&[None, None], ", "), "");
    }

    #[test]
    fn test_format_elevation() {
        assert_eq!(format_elevation(123.456), "123.5m above sea level");
        assert_eq!(format_elevation(0.0), "0.0m above sea level");
        assert_eq!(format_elevation(-10.0), "10.0m below sea level");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(1_609_459_200, &Utc),
            Some("2021-01-01 00:00:00".to_string())
        );
    }

    #[test]
    fn test_maps_link() {
        assert_eq!(
            maps_link("http://maps.google.com/maps?q=1,2", "View"),
            r#"<a title="View" href="http://maps.google.com/maps?q=1,2">Google</a>"#
        );
    }

    #[test]
    fn test_pretty_coords() {
        let report = LocationReport::new("a.jpg").with_point(GeoPoint::new(45.0, -73.0));
        assert_eq!(report.pretty_coords(), "N 45.00000, W 73.00000");
        assert_eq!(LocationReport::new("b.jpg").pretty_coords(), "Not geotagged");

        let invalid = LocationReport::new("c.jpg").with_point(GeoPoint::new(100.0, 0.0));
        assert_eq!(invalid.pretty_coords(), "Not geotagged");
    }

    #[test]
    fn test_pretty_geoname() {
        let style = SummaryStyle::default();

        let short = LocationReport::default().with_geoname(Some(paris()));
        assert_eq!(short.pretty_geoname(true, &style), "Paris, France");

        let long = LocationReport::default().with_geoname(Some(long_name()));
        assert_eq!(
            long.pretty_geoname(true, &style),
            "Rancho Santa Margarita,\nCalifornia,\nUnited States"
        );
        assert_eq!(
            long.pretty_geoname(false, &style),
            "Rancho Santa Margarita, California, United States"
        );

        assert_eq!(LocationReport::default().pretty_geoname(true, &style), "");
    }

    #[test]
    fn test_custom_style() {
        let style = SummaryStyle {
            separator: " / ".to_string(),
            multiline_separator: "\n".to_string(),
            multiline_threshold: 5,
        };
        let report = LocationReport::default().with_geoname(Some(paris()));
        assert_eq!(report.pretty_geoname(false, &style), "Paris / France");
        assert_eq!(report.pretty_geoname(true, &style), "Paris\nFrance");
    }

    #[test]
    fn test_short_summary_skips_absent_fields() {
        let style = SummaryStyle::default();
        let report = LocationReport::new("a.jpg")
            .with_point(GeoPoint::new(48.8566, 2.3522))
            .with_geoname(Some(paris()))
            .with_elevation(35.0);

        assert_eq!(
            report.short_summary(&style),
            "N 48.85660, E 2.35220\nParis, France\n35.0m above sea level"
        );
        assert_eq!(LocationReport::default().short_summary(&style), "Not geotagged");
    }

    #[test]
    fn test_short_summary_with_time() {
        let report = LocationReport::default().with_timestamp(1_609_459_200);
        let summary = report.short_summary(&SummaryStyle::default());
        assert_eq!(summary.lines().count(), 2);
        assert!(summary.ends_with("Not geotagged"));
    }

    #[test]
    fn test_long_summary() {
        let report = LocationReport::new("/photos/2021/IMG_0001.JPG");
        assert_eq!(
            report.long_summary(&SummaryStyle::default()),
            "<span size=\"larger\">IMG_0001.JPG</span>\n\
             <span style=\"italic\" size=\"smaller\">Not geotagged</span>"
        );
    }

    #[test]
    fn test_report_maps_link() {
        let config = Config::default();
        let report = LocationReport::new("a.jpg").with_point(GeoPoint::new(48.8566, 2.3522));
        let link = report.maps_link(&config).unwrap().unwrap();
        assert!(link.contains(r#"href="https://maps.google.com/maps?q=48.8566,2.3522""#));

        assert_eq!(LocationReport::new("b.jpg").maps_link(&config).unwrap(), None);
    }

    #[test]
    fn test_from_track_point() {
        let point = TrackPoint {
            point: GeoPoint::new(1.0, 2.0),
            elevation: Some(3.0),
            timestamp: 4,
        };
        let report = LocationReport::from_track_point(&point);
        assert_eq!(report.point(), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(report.elevation, Some(3.0));
        assert_eq!(report.timestamp, Some(4));
        assert_eq!(report.label, None);
    }
}
