//! KML track loader
//!
//! Reads Google's `gx:Track` extension, where timestamps and coordinates are
//! listed as parallel `<when>` and `<gx:coord>` sequences.

use crate::coord::{parse_component, GeoPoint};
use crate::error::Result;
use crate::track::{parse_timestamp, Track, TrackFormat, TrackLoader, TrackPoint};
use crate::xml::{Attributes, ElementHandler, ElementState, StreamingElementParser};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::debug;

const WHEN: &str = "when";
const COORD: &str = "gx:coord";

/// KML loader - pairs each `<gx:coord>` with the oldest unpaired `<when>`
pub struct KmlLoader;

impl TrackLoader for KmlLoader {
    fn format(&self) -> TrackFormat {
        TrackFormat::Kml
    }

    fn load_reader(&self, reader: &mut dyn BufRead) -> Result<Track> {
        let mut parser = StreamingElementParser::new(Some("kml"), [WHEN, COORD]);
        let mut handler = TrackCollector::default();
        parser.parse_reader(reader, &mut handler)?;
        Ok(Track::new(handler.points))
    }
}

#[derive(Default)]
struct TrackCollector {
    /// Timestamps waiting for a coordinate (None if unparseable)
    pending: VecDeque<Option<i64>>,
    points: Vec<TrackPoint>,
}

impl ElementHandler for TrackCollector {
    fn element_start(&mut self, _name: &str, _attributes: &Attributes) -> bool {
        true
    }

    fn element_end(&mut self, name: &str, state: &ElementState) {
        let text = state.get(name).unwrap_or_default();
        match name {
            WHEN => self.pending.push_back(parse_timestamp(text)),
            COORD => {
                let timestamp = self.pending.pop_front().flatten();
                match (timestamp, parse_coord(text)) {
                    (Some(timestamp), Some((point, elevation))) => self.points.push(TrackPoint {
                        point,
                        elevation,
                        timestamp,
                    }),
                    _ => debug!("Skipping KML coordinate '{}'", text),
                }
            }
            _ => {}
        }
    }
}

/// Parse "lon lat [ele]"
fn parse_coord(text: &str) -> Option<(GeoPoint, Option<f64>)> {
    let mut parts = text.split_whitespace();
    let lon = parse_component(parts.next()?);
    let lat = parse_component(parts.next()?);
    let elevation = parts.next().and_then(parse_component);
    Some((GeoPoint::from_parts(lat, lon)?, elevation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document>
    <Placemark>
      <gx:Track>
        <when>2010-05-28T02:02:09Z</when>
        <when>2010-05-28T02:02:35Z</when>
        <when>not a time</when>
        <when>2010-05-28T02:02:54Z</when>
        <gx:coord>-122.207881 37.371915 156.000000</gx:coord>
        <gx:coord>-122.205712 37.373288 152.000000</gx:coord>
        <gx:coord>-122.204678 37.373939 147.000000</gx:coord>
        <gx:coord>-122.203572 37.374630</gx:coord>
      </gx:Track>
    </Placemark>
  </Document>
</kml>
"#;

    #[test]
    fn test_parse_coord() {
        let (point, elevation) = parse_coord("-122.207881 37.371915 156.0").unwrap();
        assert_eq!(point, GeoPoint::new(37.371915, -122.207881));
        assert_eq!(elevation, Some(156.0));
        assert_eq!(parse_coord("-122.2 37.3").unwrap().1, None);
        assert!(parse_coord("-122.2").is_none());
        assert!(parse_coord("200 100").is_none());
    }

    #[test]
    fn test_load_kml() {
        let track = KmlLoader.load_str(KML).unwrap();

        // The third <when> is unparseable, so its coordinate is dropped
        assert_eq!(track.len(), 3);

        let points: Vec<_> = track.points().collect();
        assert_eq!(points[0].point, GeoPoint::new(37.371915, -122.207881));
        assert_eq!(points[0].elevation, Some(156.0));
        assert_eq!(points[2].point, GeoPoint::new(37.374630, -122.203572));
        assert_eq!(points[2].elevation, None);
        assert_eq!(points[2].timestamp - points[0].timestamp, 45);
    }

    #[test]
    fn test_gpx_is_not_kml() {
        let result = KmlLoader.load_str("<gpx/>");
        assert!(matches!(result, Err(Error::FormatMismatch { .. })));
    }
}
