//! Search command handler

use crate::config::Config;
use crate::error::Result;
use crate::geonames::{BuiltinTerritories, CitySearch, FileGazetteer};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// City name or part of one (at least three characters)
    pub query: String,

    /// Maximum number of results to show
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Run the search command
pub fn run(args: SearchArgs, gazetteer: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let path = super::gazetteer_path(gazetteer, &config)?;

    if args.query.chars().count() < 3 {
        eprintln!("Search query must be at least three characters");
        std::process::exit(1);
    }

    let mut search = CitySearch::new(
        Arc::new(FileGazetteer::new(path)),
        Arc::new(BuiltinTerritories),
    );
    let results: Vec<_> = search
        .search(&args.query)?
        .into_iter()
        .take(args.count)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No cities match '{}'", args.query);
        return Ok(());
    }

    for result in &results {
        println!("{:>10.5} {:>11.5}  {}", result.lat, result.lon, result.label);
    }

    Ok(())
}
