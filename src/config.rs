//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/randtree/randtree.toml`
//! 3. Local config: `<dir>/.randtree.toml`
//! 4. Environment variables: `RANDTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::input::DEFAULT_SEPARATOR;
use crate::application::ApplicationError;

/// How trees are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree diagram
    #[default]
    Tree,
    /// JSON snapshot for external renderers
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApplicationError::Config {
                message: format!("unknown format: {other}"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (all fields optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub seed: Option<u64>,
    pub separator: Option<String>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

/// Unified configuration for randtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Seed for the descent coin; random shapes per run when unset
    pub seed: Option<u64>,
    /// Token separator for value lists
    pub separator: char,
    /// Default output format
    pub format: OutputFormat,
    /// Colorize terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            separator: DEFAULT_SEPARATOR,
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Get the XDG config directory for randtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "randtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("randtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".randtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_separator(raw: &str) -> Result<char, ApplicationError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("separator must be a single character, got {raw:?}"),
        }),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Result<Self, ApplicationError> {
        Ok(Self {
            seed: overlay.seed.or(self.seed),
            separator: match &overlay.separator {
                Some(raw) => parse_separator(raw)?,
                None => self.separator,
            },
            format: overlay.format.unwrap_or(self.format),
            color: overlay.color.unwrap_or(self.color),
        })
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.randtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?)?;
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?)?;
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply RANDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RANDTREE"))
            .build()
            .map_err(config_err)?;
        settings.apply_overrides(&config)
    }

    /// Apply values present in `config`, leaving the rest untouched.
    ///
    /// A key that is set but fails to parse is an error, not a fallback to
    /// the previous value.
    fn apply_overrides(mut self, config: &Config) -> Result<Self, ApplicationError> {
        if let Some(val) = present(config.get::<u64>("seed"))? {
            self.seed = Some(val);
        }
        if let Some(val) = present(config.get_string("separator"))? {
            self.separator = parse_separator(&val)?;
        }
        if let Some(val) = present(config.get_string("format"))? {
            self.format = val.parse()?;
        }
        if let Some(val) = present(config.get_bool("color"))? {
            self.color = val;
        }
        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# randtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/randtree/randtree.toml
#   Local:  <dir>/.randtree.toml            (select with -C <dir>)
#   Env:    RANDTREE_* environment variables (explicit overrides)

# Seed for the left/right coin; omit for a different shape on every run
# seed = 42

# Separator between values
# separator = ","

# Output format: "tree" or "json"
# format = "tree"

# Colorize highlighted paths
# color = true
"#
        .to_string()
    }
}

/// `None` for a missing key, an error for a value of the wrong type.
fn present<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
