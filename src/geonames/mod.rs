//! Reverse geocoding against a local gazetteer
//!
//! Provides nearest-city lookup with a memoizing cache keyed by coordinates
//! rounded to two decimal places, plus city-name search for the same data.
//!
//! A [`GeonameIndex`] is meant to be created once and shared (`Arc`) for the
//! life of the process. Lookups that round to the same key share one
//! gazetteer scan.

pub mod gazetteer;
pub mod search;
pub mod territories;

pub use gazetteer::{for_each_entry, FileGazetteer, GazetteerEntry, GazetteerSource, InMemoryGazetteer};
pub use search::{CitySearch, SearchResult};
pub use territories::{BuiltinTerritories, TerritoryNames};

use crate::constants::cache::KEY_PRECISION;
use crate::coord::{great_circle_distance, is_valid_coordinate, GeoPoint};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// The nearest named place to a coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeonameRecord {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_state: Option<String>,
    pub country_code: String,
    pub country_name: String,
    pub timezone: String,
}

/// Quantized cache key for a coordinate ("lat,lon" at two decimals)
///
/// Returns None for invalid coordinates, which must never become keys.
pub fn cache_key(lat: f64, lon: f64) -> Option<String> {
    if !is_valid_coordinate(lat, lon) {
        return None;
    }
    Some(format!(
        "{:.*},{:.*}",
        KEY_PRECISION, lat, KEY_PRECISION, lon
    ))
}

/// Nearest-city lookup service with a process-lifetime cache
pub struct GeonameIndex {
    source: Arc<dyn GazetteerSource>,
    territories: Arc<dyn TerritoryNames>,
    cache: RwLock<HashMap<String, GazetteerEntry>>,
    scans: AtomicUsize,
}

impl std::fmt::Debug for GeonameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeonameIndex")
            .field("source", &self.source.describe())
            .field("cached_keys", &self.cached_keys())
            .field("scans", &self.scan_count())
            .finish()
    }
}

impl GeonameIndex {
    /// Create an index over the given gazetteer and territory tables
    pub fn new(source: Arc<dyn GazetteerSource>, territories: Arc<dyn TerritoryNames>) -> Self {
        Self {
            source,
            territories,
            cache: RwLock::new(HashMap::new()),
            scans: AtomicUsize::new(0),
        }
    }

    /// Create an index using the built-in territory tables
    pub fn with_builtin_territories(source: Arc<dyn GazetteerSource>) -> Self {
        Self::new(source, Arc::new(BuiltinTerritories))
    }

    /// Find the nearest city to the given coordinates
    ///
    /// # Returns
    /// - `Ok(None)` for invalid coordinates (no scan) or an empty gazetteer
    /// - `Ok(Some(record))` otherwise; repeated lookups that round to the same
    ///   key return the same record without rescanning
    /// - `Err(Error::ResourceUnavailable)` if the gazetteer cannot be read
    pub fn lookup(&self, lat: f64, lon: f64) -> Result<Option<GeonameRecord>> {
        let Some(key) = cache_key(lat, lon) else {
            return Ok(None);
        };

        if let Some(entry) = self.read_cache().get(&key) {
            debug!("Geoname cache hit for {}", key);
            return Ok(Some(self.resolve(entry)));
        }

        debug!("Geoname cache miss for {}", key);
        let Some(nearest) = self.scan_nearest(GeoPoint::new(lat, lon))? else {
            return Ok(None);
        };

        // A concurrent miss may have stored this key already; keep its value
        let mut cache = self.write_cache();
        let entry = cache.entry(key).or_insert(nearest);
        Ok(Some(self.resolve(entry)))
    }

    /// Number of full gazetteer scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// Number of keys currently cached
    pub fn cached_keys(&self) -> usize {
        self.read_cache().len()
    }

    /// The gazetteer this index reads from
    pub fn source(&self) -> &Arc<dyn GazetteerSource> {
        &self.source
    }

    /// The territory tables this index resolves names with
    pub fn territories(&self) -> &Arc<dyn TerritoryNames> {
        &self.territories
    }

    /// Scan the whole gazetteer for the entry closest to `point`
    ///
    /// Ties keep the first entry seen.
    fn scan_nearest(&self, point: GeoPoint) -> Result<Option<GazetteerEntry>> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        info!("Scanning gazetteer {}", self.source.describe());

        let mut nearest: Option<GazetteerEntry> = None;
        let mut best = f64::INFINITY;

        for_each_entry(self.source.as_ref(), |entry| {
            let distance = great_circle_distance(point, entry.point());
            if distance < best {
                best = distance;
                nearest = Some(entry);
            }
        })?;

        if let Some(entry) = &nearest {
            debug!("Nearest city to {} is {} ({:.1} km)", point, entry.name, best);
        }
        Ok(nearest)
    }

    fn resolve(&self, entry: &GazetteerEntry) -> GeonameRecord {
        let country_code = entry.country_code.as_str();
        GeonameRecord {
            city: entry.name.clone(),
            province_state: self
                .territories
                .state(country_code, &entry.state_code)
                .map(str::to_string),
            country_code: country_code.to_string(),
            country_name: self.territories.country_or_code(country_code).to_string(),
            timezone: entry.timezone.trim().to_string(),
        }
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, GazetteerEntry>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, GazetteerEntry>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
