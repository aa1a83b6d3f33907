//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{LocationReport, OutputFormatter};

/// Text formatter - one summary block per report
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable summaries"
    }

    fn format(&self, reports: &[LocationReport], config: &Config) -> Result<String> {
        let style = config.summary_style();

        let blocks: Vec<String> = reports
            .iter()
            .map(|report| {
                let summary = report.short_summary(&style);
                match &report.label {
                    Some(label) => format!("{}\n{}", label, summary),
                    None => summary,
                }
            })
            .collect();

        Ok(blocks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;

    #[test]
    fn test_text_format() {
        let formatter = TextFormatter;
        let config = Config::default();
        let reports = vec![
            LocationReport::new("a.jpg").with_point(GeoPoint::new(45.0, -73.0)),
            LocationReport::new("b.jpg"),
        ];

        let output = formatter.format(&reports, &config).unwrap();

        assert_eq!(
            output,
            "a.jpg\nN 45.00000, W 73.00000\n\nb.jpg\nNot geotagged"
        );
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
