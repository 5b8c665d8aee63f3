use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PatternError;
use crate::validator::ValidatorConfig;

/// Environment variable naming a config file for the demo binary.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

/// Settings for the `patterns` demo. Every field has a default, so an empty
/// file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub color: bool,
    pub validator: ValidatorConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            color: true,
            validator: ValidatorConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PatternError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, PatternError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads `path`, picking the parser from the extension. Files without a
    /// `.json` or `.toml` extension are treated as JSON when they start with `{`.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Loads the file named by `PATTERNS_CONFIG`, or the defaults when unset.
    pub fn discover() -> Result<Self, PatternError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Colour is off when disabled in the config or when `NO_COLOR` is set.
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }
}
