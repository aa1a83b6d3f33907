//! Lookup command handler
//!
//! Reverse geocodes a coordinate against the gazetteer.

use crate::config::Config;
use crate::coord::GeoPoint;
use crate::error::Result;
use crate::format::LocationReport;
use clap::Args;
use std::path::PathBuf;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// Elevation in meters, shown in the summary
    #[arg(long, short = 'e')]
    pub elevation: Option<f64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Print an HTML map link instead of a summary
    #[arg(long, conflicts_with = "format")]
    pub link: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the lookup command
pub fn run(args: LookupArgs, gazetteer: Option<PathBuf>) -> Result<()> {
    if args.list_formats {
        super::list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let point = GeoPoint::new(args.lat, args.lon);
    point.validate()?;

    let index = super::open_index(gazetteer, &config)?;
    let geoname = index.lookup(point.lat, point.lon)?;
    if geoname.is_none() {
        eprintln!("No cities found in {}", index.source().describe());
    }

    let mut report = LocationReport::default()
        .with_point(point)
        .with_geoname(geoname);
    if let Some(elevation) = args.elevation {
        report = report.with_elevation(elevation);
    }

    if args.link {
        if let Some(link) = report.maps_link(&config)? {
            println!("{}", link);
        }
        return Ok(());
    }

    println!("{}", super::render(&[report], args.format, &config)?);
    Ok(())
}
