// Tue Jan 13 2026 - Alex

use crate::resolver::taxonomy::NAME_PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?name={name}";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one run. Built once, then shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub workers: usize,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_per_second: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub mapping_prefix: String,
    pub resolved_prefix: String,
    pub accepted_extensions: Vec<String>,
    pub atomic_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            workers: num_cpus::get(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            user_agent: format!("species-name-updater/{}", env!("CARGO_PKG_VERSION")),
            rate_limit_per_second: None,
            output_dir: None,
            mapping_prefix: "Merged_".to_string(),
            resolved_prefix: "New_".to_string(),
            accepted_extensions: vec!["txt".to_string()],
            atomic_writes: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_timeouts(mut self, connect_secs: u64, request_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.request_timeout_secs = request_secs;
        self
    }

    pub fn with_rate_limit(mut self, per_second: Option<u32>) -> Self {
        self.rate_limit_per_second = per_second;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be greater than 0".to_string()));
        }
        if !self.endpoint.contains(NAME_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "endpoint must contain {}: {}",
                NAME_PLACEHOLDER, self.endpoint
            )));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be greater than 0".to_string()));
        }
        if self.rate_limit_per_second == Some(0) {
            return Err(ConfigError::Invalid("rate limit must be greater than 0".to_string()));
        }
        if self.mapping_prefix.is_empty() || self.resolved_prefix.is_empty() {
            return Err(ConfigError::Invalid("output prefixes must not be empty".to_string()));
        }
        if self.mapping_prefix == self.resolved_prefix {
            return Err(ConfigError::Invalid("output prefixes must differ".to_string()));
        }
        if self.accepted_extensions.is_empty() {
            return Err(ConfigError::Invalid("at least one input extension is required".to_string()));
        }
        Ok(())
    }

    /// Loads a JSON config file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
