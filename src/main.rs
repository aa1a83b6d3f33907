//! gottengeo CLI entry point
//!
//! Reverse geocoding, GPX/KML track lookup and coordinate conversion

use gottengeo::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
