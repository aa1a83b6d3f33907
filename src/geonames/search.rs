//! City-name search over the gazetteer
//!
//! Results are loaded lazily by three-letter prefix: once a query reaches
//! three characters the gazetteer is scanned for city names containing that
//! prefix, and each prefix is only ever loaded once. The full query then
//! filters the loaded results.

use crate::format::summary::format_list;
use crate::geonames::gazetteer::{for_each_entry, GazetteerSource};
use crate::geonames::territories::TerritoryNames;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Number of leading characters that trigger a gazetteer scan
const PREFIX_LEN: usize = 3;

/// A city matching a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// "City, State, Country" with absent parts omitted
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

/// Incremental city search
pub struct CitySearch {
    source: Arc<dyn GazetteerSource>,
    territories: Arc<dyn TerritoryNames>,
    searched: HashSet<String>,
    results: Vec<SearchResult>,
}

impl CitySearch {
    /// Create a search over the given gazetteer
    pub fn new(source: Arc<dyn GazetteerSource>, territories: Arc<dyn TerritoryNames>) -> Self {
        Self {
            source,
            territories,
            searched: HashSet::new(),
            results: Vec::new(),
        }
    }

    /// Load results for the query's three-letter prefix, if not loaded yet
    ///
    /// # Returns
    /// Number of results appended (0 for short queries and repeated prefixes)
    pub fn load_results(&mut self, query: &str) -> Result<usize> {
        let query = query.to_lowercase();
        let prefix: String = query.chars().take(PREFIX_LEN).collect();
        if prefix.chars().count() < PREFIX_LEN || self.searched.contains(&prefix) {
            return Ok(0);
        }

        let territories = Arc::clone(&self.territories);
        let mut found = Vec::new();
        for_each_entry(self.source.as_ref(), |entry| {
            if entry.name.to_lowercase().contains(&prefix) {
                let state = territories.state(&entry.country_code, &entry.state_code);
                let country = territories.country_or_code(&entry.country_code);
                found.push(SearchResult {
                    label: format_list(&[Some(entry.name.as_str()), state, Some(country)], ", "),
                    lat: entry.lat,
                    lon: entry.lon,
                });
            }
        })?;

        // Only remember the prefix once the scan has succeeded
        self.searched.insert(prefix.clone());
        debug!("Loaded {} search results for '{}'", found.len(), prefix);

        let count = found.len();
        self.results.extend(found);
        Ok(count)
    }

    /// Loaded results whose label contains the full query (case-insensitive)
    pub fn matches<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a SearchResult> + 'a {
        let query = query.to_lowercase();
        self.results
            .iter()
            .filter(move |r| r.label.to_lowercase().contains(&query))
    }

    /// Load results for the query, then return all matches
    pub fn search(&mut self, query: &str) -> Result<Vec<SearchResult>> {
        self.load_results(query)?;
        Ok(self.matches(query).cloned().collect())
    }

    /// All results loaded so far
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}
