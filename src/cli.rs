//! CLI interface for the resume ATS matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for both resumes and job descriptions.
pub const INPUT_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Parse resumes into structured records and score them against job descriptions")]
#[command(long_about = "Extracts experience, education, projects and skills from resume text, then scores the resume against a job description with keyword overlap and TF-IDF similarity, and checks the skills and experience gates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into a structured record
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (use JSON to get an editable record for `match --parsed`)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show project bullets and other detail
        #[arg(short, long)]
        detailed: bool,
    },

    /// Score a resume against a job description
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Edited parsed-resume JSON used for the experience figures
        #[arg(short, long)]
        parsed: Option<PathBuf>,

        /// Minimum skills-match percentage for the skills gate
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Only count literally equal terms as overlap
        #[arg(long)]
        no_synonyms: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file; a directory gets a timestamped file name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the full term lists and score breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Skills threshold given on the command line, as a percentage.
pub fn validate_threshold(threshold: f64) -> Result<f64, String> {
    if (0.0..=100.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("Threshold must be between 0 and 100, got {}", threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "resume-ats", "match", "-r", "cv.pdf", "-j", "job.txt", "--threshold", "60", "--no-synonyms",
        ])
        .unwrap();

        match cli.command {
            Commands::Match { resume, threshold, no_synonyms, parsed, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(threshold, Some(60.0));
                assert!(no_synonyms);
                assert!(parsed.is_none());
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validation_helpers() {
        assert!(validate_file_extension(Path::new("a.PDF"), INPUT_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("a.docx"), INPUT_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("noext"), INPUT_EXTENSIONS).is_err());
        assert_eq!(validate_threshold(75.0), Ok(75.0));
        assert!(validate_threshold(101.0).is_err());
    }
}
