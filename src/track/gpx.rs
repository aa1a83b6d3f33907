//! GPX track loader

use crate::coord::GeoPoint;
use crate::error::Result;
use crate::track::{parse_timestamp, Track, TrackFormat, TrackLoader, TrackPoint};
use crate::xml::{Attributes, ElementHandler, ElementState, StreamingElementParser};
use std::io::BufRead;
use tracing::debug;

/// GPX loader - reads `<trkpt>` records
pub struct GpxLoader;

impl TrackLoader for GpxLoader {
    fn format(&self) -> TrackFormat {
        TrackFormat::Gpx
    }

    fn load_reader(&self, reader: &mut dyn BufRead) -> Result<Track> {
        let mut parser = StreamingElementParser::new(Some("gpx"), ["trkpt"]);
        let mut handler = TrackpointCollector::default();
        parser.parse_reader(reader, &mut handler)?;
        Ok(Track::new(handler.points))
    }
}

#[derive(Default)]
struct TrackpointCollector {
    points: Vec<TrackPoint>,
}

impl ElementHandler for TrackpointCollector {
    fn element_start(&mut self, _name: &str, _attributes: &Attributes) -> bool {
        true
    }

    fn element_end(&mut self, _name: &str, state: &ElementState) {
        match trackpoint(state) {
            Some(point) => self.points.push(point),
            None => debug!("Skipping GPX trackpoint without valid position or time"),
        }
    }
}

fn trackpoint(state: &ElementState) -> Option<TrackPoint> {
    let point = GeoPoint::from_parts(state.parse("lat"), state.parse("lon"))?;
    let timestamp = parse_timestamp(state.get("time")?)?;
    Some(TrackPoint {
        point,
        elevation: state.parse("ele"),
        timestamp,
    })
}
