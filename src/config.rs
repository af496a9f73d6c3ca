use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "DISPATCH_CONFIG";
/// Environment variable overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory listed by `/ListFiles`; relative zip paths resolve against it.
    pub root_dir: PathBuf,
    pub zip_input: PathBuf,
    pub zip_output: PathBuf,
    /// Bytes requested per read by the line-filtered file reader.
    pub read_chunk_size: usize,
    /// Substring a line must contain to be returned by `/GetFullTextFile`.
    pub marker: String,
    pub joke_url: String,
    pub upstream_connect_timeout_ms: u64,
    pub upstream_request_timeout_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            root_dir: PathBuf::from("."),
            zip_input: PathBuf::from("sample.txt"),
            zip_output: PathBuf::from("sample.gz"),
            read_chunk_size: 64 * 1024,
            marker: "Fusce".to_string(),
            joke_url: "http://api.jokes.com/random".to_string(),
            upstream_connect_timeout_ms: 5_000,
            upstream_request_timeout_ms: 10_000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// Starts from defaults, replaces them with the YAML file named by
    /// `DISPATCH_CONFIG` when set, then applies `LISTEN`.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = listen_addr;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.read_chunk_size > 0, "read_chunk_size must be positive");
        anyhow::ensure!(!self.marker.is_empty(), "marker must not be empty");
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("unknown log_level {:?}", self.log_level))?;
        Ok(())
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn zip_input_path(&self) -> PathBuf {
        self.root_dir.join(&self.zip_input)
    }

    pub fn zip_output_path(&self) -> PathBuf {
        self.root_dir.join(&self.zip_output)
    }

    pub fn upstream_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_connect_timeout_ms)
    }

    pub fn upstream_request_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_request_timeout_ms)
    }
}
