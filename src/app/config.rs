//! Application configuration
//!
//! This module handles application-wide configuration settings.

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable naming the directory saved orders are written to
pub const OUTPUT_DIR_ENV: &str = "TAKEAWAY_OUTPUT_DIR";

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory; relative order paths resolve against it
    pub working_dir: PathBuf,
    /// Directory saved orders are written to
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            output_dir: std::env::temp_dir(),
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Apply `TAKEAWAY_*` environment overrides
    pub fn merge_env_vars(self) -> Self {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    fn merge_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|d| !d.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        self
    }

    /// Output directory as an absolute path
    pub fn resolved_output_dir(&self) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            self.working_dir.join(&self.output_dir)
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            output_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbosity() {
        let config = AppConfig::default();
        assert_eq!(config.log_level(), "warn");
        assert_eq!(AppConfig { verbose: 1, ..config.clone() }.log_level(), "info");
        assert_eq!(AppConfig { verbose: 2, ..config.clone() }.log_level(), "debug");
        assert_eq!(AppConfig { verbose: 5, ..config }.log_level(), "trace");
    }

    #[test]
    fn test_env_overrides_output_dir() {
        let config = AppConfig::default().merge_env_with(|key| {
            (key == OUTPUT_DIR_ENV).then(|| "/srv/orders".to_string())
        });
        assert_eq!(config.output_dir, PathBuf::from("/srv/orders"));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let config = AppConfig::default()
            .with_output_dir(PathBuf::from("/keep"))
            .merge_env_with(|_| Some(String::new()));
        assert_eq!(config.output_dir, PathBuf::from("/keep"));
    }

    #[test]
    fn test_relative_output_dir_resolves_against_working_dir() {
        let config = AppConfig::default()
            .with_working_dir(PathBuf::from("/home/me"))
            .with_output_dir(PathBuf::from("orders"));
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/home/me/orders"));

        let config = config.with_output_dir(PathBuf::from("/var/orders"));
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/var/orders"));
    }
}
