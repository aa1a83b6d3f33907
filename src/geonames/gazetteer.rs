//! Gazetteer sources
//!
//! The gazetteer is a plain text file with one tab-separated record per line:
//! `name, latitude, longitude, country code, state code, timezone`.
//! Sources are opened, scanned and dropped per call; no handle is kept.

use crate::coord::{parse_component, GeoPoint};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use tracing::warn;

/// One parsed gazetteer line
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country_code: String,
    pub state_code: String,
    pub timezone: String,
}

impl GazetteerEntry {
    /// Parse a tab-separated gazetteer line
    ///
    /// Returns None for blank lines, lines with fewer than six fields, and
    /// lines whose coordinates are not numeric.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split('\t');
        let name = fields.next()?;
        let lat = parse_component(fields.next()?)?;
        let lon = parse_component(fields.next()?)?;
        let country_code = fields.next()?;
        let state_code = fields.next()?;
        let timezone = fields.next()?;

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            lat,
            lon,
            country_code: country_code.to_string(),
            state_code: state_code.to_string(),
            timezone: timezone.trim().to_string(),
        })
    }

    /// Coordinates of this entry
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Trait for gazetteer data sources
///
/// Implementations must be thread-safe (Send + Sync) so a lookup index can be
/// shared across threads.
pub trait GazetteerSource: Send + Sync {
    /// Human-readable description (usually the file path)
    fn describe(&self) -> String;

    /// Open a fresh reader positioned at the first line
    ///
    /// Fails with `Error::ResourceUnavailable` when the data cannot be opened.
    fn open(&self) -> Result<Box<dyn BufRead + '_>>;
}

/// Gazetteer stored in a file on disk
#[derive(Debug, Clone)]
pub struct FileGazetteer {
    path: PathBuf,
}

impl FileGazetteer {
    /// Create a source for the given path (not opened until scanned)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the gazetteer file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GazetteerSource for FileGazetteer {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(|e| Error::unavailable(self.describe(), e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Gazetteer held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryGazetteer {
    data: String,
}

impl InMemoryGazetteer {
    /// Create a source from gazetteer text
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl GazetteerSource for InMemoryGazetteer {
    fn describe(&self) -> String {
        format!("<in-memory gazetteer, {} bytes>", self.data.len())
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.data.as_bytes())))
    }
}

/// Stream every parseable entry of a gazetteer through `f`
///
/// Malformed lines, including lines that are not valid UTF-8, are skipped
/// with a warning. Read failures part-way through are reported as
/// `Error::ResourceUnavailable`.
pub fn for_each_entry<F>(source: &dyn GazetteerSource, mut f: F) -> Result<()>
where
    F: FnMut(GazetteerEntry),
{
    let mut reader = source.open()?;
    let mut buf = Vec::new();
    let mut number = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::unavailable(source.describe(), e))?;
        if read == 0 {
            break;
        }
        number += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(
                "Skipping non UTF-8 gazetteer line {} in {}",
                number,
                source.describe()
            );
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        match GazetteerEntry::parse_line(line) {
            Some(entry) => f(entry),
            None => warn!(
                "Skipping malformed gazetteer line {} in {}",
                number,
                source.describe()
            ),
        }
    }

    Ok(())
}
