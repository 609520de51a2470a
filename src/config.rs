use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::diversity::DEFAULT_CRITERIA;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HOLLYWOOD_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub diversity: DiversityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` when using defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Input and output files
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_cast_file")]
    pub cast_file: PathBuf,
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
    /// Where `tgf export` writes when no output path is given.
    #[serde(default = "default_tgf_output")]
    pub tgf_output: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cast_file: default_cast_file(),
            results_file: default_results_file(),
            tgf_output: default_tgf_output(),
        }
    }
}

/// Diversity test settings
#[derive(Debug, Clone, Deserialize)]
pub struct DiversityConfig {
    /// Number of criteria each results row carries.
    #[serde(default = "default_criteria")]
    pub criteria: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_cast_file() -> PathBuf {
    PathBuf::from("nextBechdel_castGender.txt")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("nextBechdel_allTests.txt")
}

fn default_tgf_output() -> PathBuf {
    PathBuf::from("outputFile.txt")
}

fn default_criteria() -> usize {
    DEFAULT_CRITERIA
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in HOLLYWOOD_CONFIG environment variable (must exist)
    /// 2. ./config.toml in current directory (defaults are used if absent)
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.source = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.diversity.criteria == 0 {
            anyhow::bail!("diversity.criteria must be greater than 0");
        }

        if self.data.cast_file.as_os_str().is_empty() {
            anyhow::bail!("data.cast_file must not be empty");
        }

        if self.data.results_file.as_os_str().is_empty() {
            anyhow::bail!("data.results_file must not be empty");
        }

        Ok(())
    }

    /// Human-readable origin of the configuration, for startup logs.
    pub fn source_description(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "defaults (no config.toml)".to_string(),
        }
    }

    pub fn cast_file(&self) -> &Path {
        &self.data.cast_file
    }

    pub fn results_file(&self) -> &Path {
        &self.data.results_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn with_config_env(config_path: &Path, f: impl FnOnce()) {
        let original = std::env::var(CONFIG_ENV).ok();
        std::env::set_var(CONFIG_ENV, config_path);
        f();
        std::env::remove_var(CONFIG_ENV);
        if let Some(val) = original {
            std::env::set_var(CONFIG_ENV, val);
        }
    }

    #[test]
    fn test_config_load_success() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[data]
cast_file = "small_castGender.txt"
results_file = "small_allTests.txt"

[diversity]
criteria = 13

[logging]
log_level = "debug"
"#,
        )
        .unwrap();
        with_config_env(&config_path, || {
            let config = Config::load();
            assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
            let config = config.unwrap();
            assert_eq!(config.cast_file(), Path::new("small_castGender.txt"));
            assert_eq!(config.results_file(), Path::new("small_allTests.txt"));
            assert_eq!(config.data.tgf_output, PathBuf::from("outputFile.txt"));
            assert_eq!(config.logging.log_level, "debug");
            assert_eq!(config.source.as_deref(), Some(config_path.as_path()));
        });
    }

    #[test]
    fn test_config_source() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("hollywood.toml");
        fs::write(&config_path, "[logging]\nlog_level = \"warn\"\n").unwrap();
        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.source, Some(config_path.clone()));
        assert_eq!(config.source_description(), config_path.display().to_string());

        let defaults = Config::default();
        assert!(defaults.source.is_none());
        assert!(defaults.source_description().starts_with("defaults"));
    }

    #[test]
    fn test_config_sections_are_optional() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[data]\ncast_file = \"cast.csv\"\n").unwrap();
        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.cast_file(), Path::new("cast.csv"));
        assert_eq!(config.results_file(), Path::new("nextBechdel_allTests.txt"));
        assert_eq!(config.diversity.criteria, DEFAULT_CRITERIA);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_config_rejects_zero_criteria() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[diversity]\ncriteria = 0\n").unwrap();
        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("criteria"));
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        with_config_env(Path::new("nonexistent.toml"), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }
}
