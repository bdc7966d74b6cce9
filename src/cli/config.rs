// ABOUTME: Configuration management for the thermprint application
// ABOUTME: Loads and persists printer settings from a YAML configuration file

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DEFAULT_CONFIG_FILE: &str = "thermprint.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub printer: PrinterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Printer network address, host or host:port. Unset until configured.
    pub address: Option<String>,

    #[serde(default = "default_chars_per_line")]
    pub chars_per_line: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fold accented letters to ASCII. Enabled by default because the target
    /// device character set lacks extended glyphs.
    #[serde(default = "default_accent_folding")]
    pub accent_folding: bool,

    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

fn default_chars_per_line() -> usize {
    32
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_accent_folding() -> bool {
    true
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            address: None,
            chars_per_line: default_chars_per_line(),
            timeout_secs: default_timeout_secs(),
            accent_folding: default_accent_folding(),
            template_dir: default_template_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default file when `path`
    /// is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path:?}"))
    }

    /// Persist this configuration to `path` (or the default file).
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = Self::resolve_path(path);
        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {path:?}"))
    }

    fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.printer.address.is_none());
        assert_eq!(config.printer.chars_per_line, 32);
        assert_eq!(config.printer.timeout_secs, 10);
        assert!(config.printer.accent_folding);
        assert_eq!(config.printer.template_dir, PathBuf::from("templates"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.printer.chars_per_line, 32);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.printer.address = Some("192.168.1.50".to_string());
        config.printer.chars_per_line = 48;
        config.printer.accent_folding = false;
        config.save(Some(&path)).unwrap();

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.printer.address.as_deref(), Some("192.168.1.50"));
        assert_eq!(reloaded.printer.chars_per_line, 48);
        assert!(!reloaded.printer.accent_folding);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "printer:\n  address: 10.0.0.5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.printer.address.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.printer.chars_per_line, 32);
        assert!(config.printer.accent_folding);
    }
}
