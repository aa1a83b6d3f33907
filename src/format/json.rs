//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{LocationReport, OutputFormatter};

/// JSON formatter - outputs the reports as a pretty-printed array
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of reports"
    }

    fn format(&self, reports: &[LocationReport], _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}
