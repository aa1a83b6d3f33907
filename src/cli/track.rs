//! Track command handler
//!
//! Loads one or more GPX/KML files into a single track, then either prints
//! its extent or reports the interpolated position at given times.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{format_timestamp, LocationReport};
use crate::track::{load_track, parse_timestamp, Track};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Track command arguments
#[derive(Args)]
pub struct TrackArgs {
    /// GPX or KML files, merged into one track
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Timestamps to locate (RFC 3339), repeatable
    #[arg(long = "at", short = 't')]
    pub at: Vec<String>,

    /// Reverse geocode located positions
    #[arg(long)]
    pub geonames: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the track command
pub fn run(args: TrackArgs, gazetteer: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    let mut track = Track::default();
    for file in &args.files {
        track.merge(load_track(file)?);
    }
    info!(points = track.len(), files = args.files.len(), "track loaded");

    if args.at.is_empty() {
        print_extent(&track);
        return Ok(());
    }

    let index = if args.geonames {
        Some(super::open_index(gazetteer, &config)?)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(args.at.len());
    for text in &args.at {
        let timestamp = parse_timestamp(text)
            .ok_or_else(|| Error::Parse(format!("Invalid timestamp: {}", text)))?;

        let mut report = match track.position_at(timestamp) {
            Some(point) => LocationReport::from_track_point(&point),
            None => LocationReport::default().with_timestamp(timestamp),
        };
        report.label = Some(text.clone());

        if let (Some(index), Some(point)) = (&index, report.point()) {
            report.geoname = index.lookup(point.lat, point.lon)?;
        }
        reports.push(report);
    }

    println!("{}", super::render(&reports, args.format, &config)?);
    Ok(())
}

/// Print point count and time range
fn print_extent(track: &Track) {
    println!("{} points", track.len());
    if let (Some(start), Some(end)) = (track.start(), track.end()) {
        let start = format_timestamp(start, &Utc).unwrap_or_else(|| start.to_string());
        let end = format_timestamp(end, &Utc).unwrap_or_else(|| end.to_string());
        println!("{} - {} UTC", start, end);
    }
}
