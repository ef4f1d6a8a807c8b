use std::fs;
use std::path::{Path, PathBuf};

use auditq_core::error::AppError;
use serde::Deserialize;

pub(crate) const DEFAULT_MODEL: &str = "llama3.1";
pub(crate) const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub(crate) const DEFAULT_OUT_DIR: &str = "auditq-run";
pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = 2;
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) ollama_url: Option<String>,
    #[serde(default)]
    pub(crate) out_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) max_attempts: Option<u32>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl Config {
    /// Load `explicit` if given (errors are fatal), otherwise the first discovered config file
    /// that parses. No file at all yields defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return Ok(config);
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e.render(), "ignoring config"),
            }
        }
        Ok(Self::default())
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::new("CONFIG_INVALID", "Failed to read config file")
                .with_details(format!("path={}; err={}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| {
            let err = e.details.clone().unwrap_or_default();
            e.with_details(format!("path={}; err={}", path.display(), err))
        })
    }

    pub(crate) fn parse(content: &str) -> Result<Self, AppError> {
        toml::from_str::<Config>(content).map_err(|e| {
            AppError::new("CONFIG_INVALID", "Failed to parse config file")
                .with_details(e.to_string())
        })
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("auditq").join("config.toml"));
        }

        // macOS: ~/Library/Application Support/auditq/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("auditq").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".auditq.toml"));
        }

        paths
    }

    pub(crate) fn model(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub(crate) fn ollama_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.ollama_url.clone())
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
    }

    pub(crate) fn out_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub(crate) fn max_attempts(&self) -> u32 {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    pub(crate) fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_listed() {
        assert!(!Config::config_paths().is_empty());
    }

    #[test]
    fn flags_override_file_override_defaults() {
        let cfg = Config::parse("model = \"qwen2.5\"\nmax_attempts = 5\n").expect("parse");
        assert_eq!(cfg.model(None), "qwen2.5");
        assert_eq!(cfg.model(Some("mistral".to_string())), "mistral");
        assert_eq!(cfg.ollama_url(None), DEFAULT_OLLAMA_URL);
        assert_eq!(cfg.max_attempts(), 5);
        assert_eq!(cfg.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.out_dir(None), PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("modle = \"typo\"").expect_err("typo");
        assert_eq!(err.code, "CONFIG_INVALID");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::parse("").expect("parse"), Config::default());
    }
}
