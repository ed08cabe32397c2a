//! Configuration management for the resume ATS matcher

use crate::error::{Result, ResumeAtsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub employment: EmploymentWeights,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Thresholds used by the line heuristics of the resume parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// A section header line must be shorter than this many characters.
    pub header_max_len: usize,
    /// Maximum number of lines read after a skills header.
    pub skills_max_lines: usize,
    /// Lines shorter than this that mention another section end the skills block.
    pub skills_stop_line_len: usize,
    /// Non-bullet project lines longer than this start a new project.
    pub project_title_min_len: usize,
    pub skill_min_len: usize,
    pub skill_max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub semantic_weight: f64,
    /// Minimum skills-match percentage for the skills gate.
    pub skills_threshold: f64,
    pub use_synonyms: bool,
}

/// Multipliers applied to each employment type when summing experience months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentWeights {
    pub full_time: f64,
    pub internship: f64,
    pub part_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            header_max_len: 40,
            skills_max_lines: 10,
            skills_stop_line_len: 50,
            project_title_min_len: 10,
            skill_min_len: 2,
            skill_max_len: 50,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.7,
            semantic_weight: 0.3,
            skills_threshold: 75.0,
            use_synonyms: true,
        }
    }
}

impl Default for EmploymentWeights {
    fn default() -> Self {
        Self {
            full_time: 1.0,
            internship: 0.8,
            part_time: 0.6,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load the configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeAtsError::Configuration(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;
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
            .map_err(|e| ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.keyword_weight < 0.0 || scoring.semantic_weight < 0.0 {
            return Err(ResumeAtsError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }
        if ((scoring.keyword_weight + scoring.semantic_weight) - 1.0).abs() > 0.001 {
            return Err(ResumeAtsError::Configuration(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                scoring.keyword_weight + scoring.semantic_weight
            )));
        }
        if !(0.0..=100.0).contains(&scoring.skills_threshold) {
            return Err(ResumeAtsError::Configuration(format!(
                "Skills threshold must be within 0-100 (got {})",
                scoring.skills_threshold
            )));
        }

        let weights = &self.employment;
        if weights.full_time < 0.0 || weights.internship < 0.0 || weights.part_time < 0.0 {
            return Err(ResumeAtsError::Configuration(
                "Employment weights must not be negative".to_string(),
            ));
        }

        if self.parsing.skills_max_lines == 0 {
            return Err(ResumeAtsError::Configuration(
                "parsing.skills_max_lines must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.skills_threshold, 75.0);
        assert_eq!(config.employment.part_time, 0.6);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.skills_threshold = 60.0;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nskills_threshold = 80.0\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.skills_threshold, 80.0);
        assert_eq!(loaded.scoring.keyword_weight, 0.7);
        assert_eq!(loaded.parsing, ParsingConfig::default());
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mut config = Config::default();
        config.scoring.keyword_weight = 0.9;
        assert!(matches!(config.validate(), Err(ResumeAtsError::Configuration(_))));

        let mut config = Config::default();
        config.scoring.skills_threshold = 120.0;
        assert!(config.validate().is_err());
    }
}
