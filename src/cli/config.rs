//! Config command handler

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::PathBuf;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Key to show or set, e.g. "summary.multiline_threshold"
    pub key: Option<String>,

    /// New value for the key
    #[arg(requires = "key")]
    pub value: Option<String>,

    /// Print the config file location and exit
    #[arg(long, conflicts_with_all = ["key", "reset"])]
    pub path: bool,

    /// Overwrite the config file with defaults
    #[arg(long, conflicts_with = "key")]
    pub reset: bool,

    /// Also print the resolved gazetteer path
    #[arg(long, conflicts_with_all = ["key", "path", "reset"])]
    pub resolved: bool,
}

/// What the invocation asks for
#[derive(Debug, PartialEq, Eq)]
enum Action {
    ShowPath,
    Reset,
    Dump { resolved: bool },
    Get(String),
    Set(String, String),
}

impl From<ConfigArgs> for Action {
    fn from(args: ConfigArgs) -> Self {
        match (args.key, args.value) {
            _ if args.path => Action::ShowPath,
            _ if args.reset => Action::Reset,
            (Some(key), Some(value)) => Action::Set(key, value),
            (Some(key), None) => Action::Get(key),
            (None, _) => Action::Dump {
                resolved: args.resolved,
            },
        }
    }
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    let path = Config::config_path()?;

    match Action::from(args) {
        Action::ShowPath => println!("{}", path.display()),
        Action::Reset => {
            Config::default().save_to(&path)?;
            eprintln!("Reset {}", path.display());
        }
        action => {
            let mut config = Config::load_from(&path)?;
            if let Some(output) = apply(&mut config, action)? {
                println!("{}", output);
            } else {
                config.save_to(&path)?;
            }
        }
    }

    Ok(())
}

/// Apply a get, set or dump to a loaded config
///
/// Returns the text to print; `None` means the config changed and must be
/// saved.
fn apply(config: &mut Config, action: Action) -> Result<Option<String>> {
    match action {
        Action::Get(key) => config.get(&key).map(Some).ok_or_else(|| unknown_key(&key)),
        Action::Set(key, value) => {
            config.set(&key, &value)?;
            Ok(None)
        }
        Action::Dump { resolved } => {
            let mut output = toml::to_string_pretty(&*config)
                .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
            if resolved {
                let gazetteer: PathBuf = config.gazetteer_path()?;
                output.push_str(&format!("\n# gazetteer in use: {}\n", gazetteer.display()));
            }
            Ok(Some(output))
        }
        Action::ShowPath | Action::Reset => Ok(None),
    }
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {} (available: {})",
        key,
        Config::available_keys().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(key: Option<&str>, value: Option<&str>) -> ConfigArgs {
        ConfigArgs {
            key: key.map(str::to_string),
            value: value.map(str::to_string),
            path: false,
            reset: false,
            resolved: false,
        }
    }

    #[test]
    fn test_action_from_args() {
        assert_eq!(Action::from(args(None, None)), Action::Dump { resolved: false });
        assert_eq!(
            Action::from(args(Some("url.default"), None)),
            Action::Get("url.default".to_string())
        );
        assert_eq!(
            Action::from(args(Some("url.default"), Some("apple"))),
            Action::Set("url.default".to_string(), "apple".to_string())
        );

        let mut reset = args(None, None);
        reset.reset = true;
        assert_eq!(Action::from(reset), Action::Reset);
    }

    #[test]
    fn test_apply_get_and_set() {
        let mut config = Config::default();

        let shown = apply(&mut config, Action::Get("summary.separator".to_string())).unwrap();
        assert_eq!(shown, Some(", ".to_string()));

        let changed = apply(
            &mut config,
            Action::Set("summary.multiline_threshold".to_string(), "20".to_string()),
        )
        .unwrap();
        assert_eq!(changed, None);
        assert_eq!(config.summary.multiline_threshold, 20);
    }

    #[test]
    fn test_apply_unknown_key() {
        let mut config = Config::default();
        let err = apply(&mut config, Action::Get("defaults.radius".to_string())).unwrap_err();
        assert!(err.to_string().contains("url.default"));
    }

    #[test]
    fn test_dump_is_loadable_toml() {
        let mut config = Config::default();
        config.gazetteer.path = Some(PathBuf::from("/data/cities.txt"));

        let dump = apply(&mut config, Action::Dump { resolved: true })
            .unwrap()
            .unwrap();
        assert!(dump.contains("# gazetteer in use: /data/cities.txt"));

        let parsed: Config = toml::from_str(&dump).unwrap();
        assert_eq!(parsed.url.default, "google");
        assert_eq!(parsed.gazetteer.path, Some(PathBuf::from("/data/cities.txt")));
    }
}
