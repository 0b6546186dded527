//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Candidate term cap for the weighting step on resumes
    pub resume_max_terms: usize,
    /// Candidate term cap for the weighting step on job descriptions
    pub job_max_terms: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            resume_max_terms: 70,
            job_max_terms: 30,
            ngram_min: 1,
            ngram_max: 2,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            input: InputConfig { enable_cache: true },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let extraction = &self.extraction;
        if extraction.ngram_min == 0 || extraction.ngram_min > extraction.ngram_max {
            return Err(ResumeRankerError::Configuration(format!(
                "Invalid n-gram range: ({}, {})",
                extraction.ngram_min, extraction.ngram_max
            )));
        }
        if extraction.resume_max_terms == 0 || extraction.job_max_terms == 0 {
            return Err(ResumeRankerError::Configuration(
                "Term caps must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_term_caps() {
        let config = Config::default();
        assert_eq!(config.extraction.resume_max_terms, 70);
        assert_eq!(config.extraction.job_max_terms, 30);
        assert_eq!((config.extraction.ngram_min, config.extraction.ngram_max), (1, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.extraction.job_max_terms = 25;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_ngram_range_rejected() {
        let mut config = Config::default();
        config.extraction.ngram_min = 3;
        assert!(matches!(
            config.validate(),
            Err(ResumeRankerError::Configuration(_))
        ));

        config.extraction.ngram_min = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "extraction = 12").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeRankerError::Configuration(_))
        ));
    }
}
