//! URL output formatter

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{LocationReport, OutputFormatter};

/// URL formatter - outputs a map URL for every geotagged report
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URLs with optional provider override
    pub fn format_with_provider(
        &self,
        reports: &[LocationReport],
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let urls = reports
            .iter()
            .filter_map(LocationReport::point)
            .map(|point| config.format_url(provider, point.lat, point.lon))
            .collect::<Result<Vec<_>>>()?;

        if urls.is_empty() {
            return Err(Error::InvalidCoordinates(
                "No geotagged locations to link".to_string(),
            ));
        }
        Ok(urls.join("\n"))
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL per geotagged report"
    }

    fn format(&self, reports: &[LocationReport], config: &Config) -> Result<String> {
        self.format_with_provider(reports, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;

    fn reports() -> Vec<LocationReport> {
        vec![
            LocationReport::new("a.jpg").with_point(GeoPoint::new(40.7128, -74.006)),
            LocationReport::new("b.jpg"),
        ]
    }

    #[test]
    fn test_url_format_default_provider() {
        let output = UrlFormatter.format(&reports(), &Config::default()).unwrap();

        // Default provider is Google; ungeotagged reports are skipped
        assert_eq!(output, "https://maps.google.com/maps?q=40.7128,-74.006");
    }

    #[test]
    fn test_url_format_with_provider() {
        let output = UrlFormatter
            .format_with_provider(&reports(), &Config::default(), Some("openstreetmap"))
            .unwrap();

        assert!(output.contains("openstreetmap.org"));
    }

    #[test]
    fn test_url_format_without_locations() {
        let result = UrlFormatter.format(&[LocationReport::new("b.jpg")], &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
