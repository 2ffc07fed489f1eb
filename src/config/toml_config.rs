use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        let config = Self::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.http.validate()
    }
}

impl Validate for HttpSettings {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("http.base_url", base_url)?;
        }
        validate_range(
            "http.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        let mut seen = HashSet::new();
        for (name, value) in &self.headers {
            validate_non_empty_string("http.headers", name)?;
            // Header names are case-insensitive on the wire.
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(AppError::InvalidConfigValueError {
                    field: "http.headers".to_string(),
                    value: name.clone(),
                    reason: "Header is configured more than once (names are case-insensitive)"
                        .to_string(),
                });
            }
            validate_non_empty_string(&format!("http.headers.{}", name), value)?;
        }
        Ok(())
    }
}
