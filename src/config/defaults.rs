//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::summary::MULTILINE_THRESHOLD;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default joiner for place names
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Default joiner for long place names
pub const DEFAULT_MULTILINE_SEPARATOR: &str = ",\n";

/// Default combined name length before switching to multi-line output
pub const DEFAULT_MULTILINE_THRESHOLD: usize = MULTILINE_THRESHOLD;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Gazetteer file name inside the data directory
pub const GAZETTEER_FILE_NAME: &str = "cities.txt";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "gottengeo";
