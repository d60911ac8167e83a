use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_LINES: usize = 20;
pub const AUTO_MANAGER: &str = "Auto";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Display-line budget per query
    #[serde(deserialize_with = "lenient_max_lines")]
    pub max_lines: usize,
    /// Manager name, or "Auto"
    pub manager: String,
    /// Shell command run after an entry is copied
    pub copy_hook: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            manager: AUTO_MANAGER.to_string(),
            copy_hook: None,
        }
    }
}

impl Preferences {
    /// The hook command, if one is set and not blank.
    pub fn hook(&self) -> Option<&str> {
        self.copy_hook
            .as_deref()
            .map(str::trim)
            .filter(|hook| !hook.is_empty())
    }

    pub fn with_overrides(
        mut self,
        max_lines: Option<&str>,
        manager: Option<String>,
        copy_hook: Option<String>,
    ) -> Self {
        if let Some(raw) = max_lines {
            self.max_lines = parse_max_lines(raw);
        }
        if let Some(manager) = manager {
            self.manager = manager;
        }
        if copy_hook.is_some() {
            self.copy_hook = copy_hook;
        }
        self
    }
}

/// Parses a line budget, falling back to the default for anything that is not a positive integer.
///
/// The budget must be at least 1: `0` and negative values also give the default,
/// rather than an always-empty result list.
pub fn parse_max_lines(raw: &str) -> usize {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_MAX_LINES)
}

fn lenient_max_lines<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(match value {
        toml::Value::Integer(n) => usize::try_from(n)
            .ok()
            .filter(|n| *n >= 1)
            .unwrap_or(DEFAULT_MAX_LINES),
        toml::Value::String(s) => parse_max_lines(&s),
        _ => DEFAULT_MAX_LINES,
    })
}

/// Result of loading preferences
pub struct ConfigResult {
    pub preferences: Preferences,
    pub warning: Option<String>,
}

/// Loads preferences from `path`, or from ~/.config/clipdeck/config.toml.
/// Falls back to defaults when the file is missing or cannot be parsed.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    tracing::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        tracing::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            preferences: Preferences::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                preferences: Preferences::default(),
                warning: Some(format!("Failed to read config {}: {}", config_path.display(), e)),
            };
        }
    };

    match toml::from_str::<Preferences>(&contents) {
        Ok(preferences) => {
            tracing::debug!("Config parsed: manager={}, max_lines={}", preferences.manager, preferences.max_lines);
            ConfigResult {
                preferences,
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            preferences: Preferences::default(),
            warning: Some(format!("Invalid config {}: {}", config_path.display(), e)),
        },
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clipdeck")
        .join("config.toml")
}
