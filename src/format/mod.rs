//! Output formatters
//!
//! Provides summary formatting for locations plus trait-based output
//! formatting for lists of [`LocationReport`]s.

pub mod json;
pub mod summary;
pub mod text;
pub mod url;

pub use summary::{format_elevation, format_list, format_timestamp, maps_link, LocationReport, SummaryStyle};

use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a list of location reports
    ///
    /// # Arguments
    /// * `reports` - The reports to format
    /// * `config` - Application config (summary style, url providers)
    fn format(&self, reports: &[LocationReport], config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable summaries".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "JSON array of reports".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL per geotagged report".to_string(),
        },
    ]
}
