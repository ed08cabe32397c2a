//! resume-ats: parse resumes and score them against job descriptions

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction, INPUT_EXTENSIONS};
use resume_ats::config::{Config, OutputConfig, OutputFormat};
use resume_ats::input::InputManager;
use resume_ats::output::{save_report_to_file, suggest_filename, MatchReport, ReportGenerator};
use resume_ats::processing::ats_matcher::{ATSMatcher, GateThresholds};
use resume_ats::processing::resume::{ParsedResume, ResumeParser};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone();
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading configuration from {}", path.display())),
        None => Config::load().context("reading default configuration"),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse {
            resume,
            output,
            save,
            detailed,
        } => {
            check_input(&resume, "Resume")?;
            let format = output_format(output.as_deref(), &config.output)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("reading resume {}", resume.display()))?;
            debug!("Resume text length: {} characters", resume_text.len());

            let parsed = ResumeParser::new(config.parsing.clone()).parse(&resume_text);

            let output_config = output_options(&config.output, detailed);
            let content = ReportGenerator::from_config(&output_config).generate_resume(&parsed, format)?;
            println!("{}", content);

            if let Some(path) = save {
                let plain = ReportGenerator::from_config(&OutputConfig {
                    color_output: false,
                    ..output_config
                })
                .generate_resume(&parsed, format)?;
                save_report_to_file(&plain, &path)
                    .with_context(|| format!("saving output to {}", path.display()))?;
                info!("Saved parsed resume to {}", path.display());
            }
        }

        Commands::Match {
            resume,
            job,
            parsed,
            threshold,
            no_synonyms,
            output,
            save,
            detailed,
        } => {
            check_input(&resume, "Resume")?;
            check_input(&job, "Job description")?;
            let format = output_format(output.as_deref(), &config.output)?;

            let mut thresholds = GateThresholds::from(&config.scoring);
            if let Some(threshold) = threshold {
                thresholds.min_skills_pct = cli::validate_threshold(threshold).map_err(anyhow::Error::msg)?;
            }

            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("reading resume {}", resume.display()))?;
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("reading job description {}", job.display()))?;

            let record = match parsed {
                Some(path) => load_parsed_resume(&path).await?,
                None => ResumeParser::new(config.parsing.clone()).parse(&resume_text),
            };

            let matcher = ATSMatcher::with_config(config.scoring.clone())
                .with_synonyms(config.scoring.use_synonyms && !no_synonyms);
            debug!(
                "Scoring weights: keyword {}, semantic {}, synonyms {}",
                matcher.scoring().keyword_weight,
                matcher.scoring().semantic_weight,
                matcher.scoring().use_synonyms
            );

            let report = MatchReport::build(
                &matcher,
                &record,
                &resume_text,
                &job_text,
                &config.employment,
                thresholds,
            )
            .with_sources(resume.to_string_lossy(), job.to_string_lossy());

            info!(
                "Skills match {:.2}%, weighted experience {:.1} months",
                report.result.score, report.experience.weighted_months
            );

            let output_config = output_options(&config.output, detailed);
            let content = ReportGenerator::from_config(&output_config).generate_report(&report, format)?;
            println!("{}", content);

            if let Some(path) = save {
                let plain = ReportGenerator::from_config(&OutputConfig {
                    color_output: false,
                    ..output_config
                })
                .generate_report(&report, format)?;
                let path = if path.is_dir() {
                    path.join(suggest_filename(format, &resume.to_string_lossy(), true))
                } else {
                    path
                };
                save_report_to_file(&plain, &path)
                    .with_context(|| format!("saving report to {}", path.display()))?;
                info!("Saved report to {}", path.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).context("serializing configuration")?;
                    println!("# {}\n{}", path.display(), content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default()
                        .save_to(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Configuration reset to defaults: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn check_input(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("{} file {}: {}", label, path.display(), e))
}

fn output_format(requested: Option<&str>, config: &OutputConfig) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg),
        None => Ok(config.format),
    }
}

fn output_options(config: &OutputConfig, detailed: bool) -> OutputConfig {
    OutputConfig {
        detailed: config.detailed || detailed,
        ..config.clone()
    }
}

/// Load a parsed-resume JSON record, typically one saved by `parse --output json` and edited by hand.
async fn load_parsed_resume(path: &Path) -> Result<ParsedResume> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading parsed resume {}", path.display()))?;
    let parsed = ParsedResume::from_json_str(&json)
        .with_context(|| format!("parsing resume record {}", path.display()))?;
    info!(
        "Using edited resume record from {} ({} experience entries)",
        path.display(),
        parsed.experience.len()
    );
    Ok(parsed)
}
