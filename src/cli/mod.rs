//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod convert;
pub mod lookup;
pub mod search;
pub mod track;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, LocationReport};
use crate::geonames::{FileGazetteer, GeonameIndex};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Geotagging toolkit: reverse geocoding, track interpolation, coordinate conversion
#[derive(Parser)]
#[command(name = "gottengeo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Gazetteer file (overrides gazetteer.path)
    #[arg(long, global = true)]
    pub gazetteer: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the nearest city to a coordinate
    Lookup(lookup::LookupArgs),

    /// Search cities by name
    Search(search::SearchArgs),

    /// Convert between decimal degrees and degrees/minutes/seconds
    Convert(convert::ConvertArgs),

    /// Load GPX/KML tracks and query positions
    Track(track::TrackArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let gazetteer = cli.gazetteer;

    match cli.command {
        Commands::Lookup(args) => lookup::run(args, gazetteer),
        Commands::Search(args) => search::run(args, gazetteer),
        Commands::Convert(args) => convert::run(args),
        Commands::Track(args) => track::run(args, gazetteer),
        Commands::Config(args) => config::run(args),
    }
}

/// Resolve the gazetteer path from the flag or config
pub(crate) fn gazetteer_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => config.gazetteer_path(),
    }
}

/// Build a geoname index over the resolved gazetteer
pub(crate) fn open_index(flag: Option<PathBuf>, config: &Config) -> Result<GeonameIndex> {
    let path = gazetteer_path(flag, config)?;
    debug!(path = %path.display(), "using gazetteer");
    Ok(GeonameIndex::with_builtin_territories(Arc::new(
        FileGazetteer::new(path),
    )))
}

/// Format reports with the named formatter, falling back to the config default
pub(crate) fn render(
    reports: &[LocationReport],
    format: Option<String>,
    config: &Config,
) -> Result<String> {
    let format = format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    formatter.format(reports, config)
}

/// Print available output formats
pub(crate) fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_negative() {
        let cli = Cli::try_parse_from(["gottengeo", "lookup", "-33.87", "151.21"]).unwrap();
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.lat, -33.87);
                assert_eq!(args.lon, 151.21);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_global_gazetteer_flag() {
        let cli = Cli::try_parse_from([
            "gottengeo", "search", "par", "--gazetteer", "/tmp/cities.txt",
        ])
        .unwrap();
        assert_eq!(cli.gazetteer, Some(PathBuf::from("/tmp/cities.txt")));
    }

    #[test]
    fn test_gazetteer_path_flag_wins() {
        let mut config = Config::default();
        config.gazetteer.path = Some(PathBuf::from("/from/config.txt"));

        let path = gazetteer_path(Some(PathBuf::from("/from/flag.txt")), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.txt"));

        let path = gazetteer_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.txt"));
    }

    #[test]
    fn test_render_unknown_format() {
        let config = Config::default();
        assert!(render(&[], Some("yaml".to_string()), &config).is_err());
        assert!(render(&[], None, &config).is_ok());
    }
}
