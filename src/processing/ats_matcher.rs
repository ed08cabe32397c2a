//! ATS (Applicant Tracking System) keyword matching and scoring

use crate::config::{EmploymentWeights, ScoringConfig};
use crate::processing::resume::{ExperienceEntry, SkillSet};
use crate::processing::synonyms::SYNONYMS;
use crate::processing::text_processor::TextProcessor;
use crate::processing::tfidf;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::LazyLock;

static MIN_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\+?\s+years?").expect("valid min years regex"));

/// Outcome of scoring a resume against a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Final score in [0, 100], rounded to two decimals.
    pub score: f64,
    /// Job description terms found in the resume.
    pub overlap: BTreeSet<String>,
    /// Job description terms absent from the resume.
    pub missing: BTreeSet<String>,
    pub keyword_pct: f64,
    /// TF-IDF cosine similarity scaled to 0-100; `None` when the keyword-only fallback was used.
    pub semantic_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

/// Pass/fail thresholds supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateThresholds {
    pub min_skills_pct: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self { min_skills_pct: 75.0 }
    }
}

impl From<&ScoringConfig> for GateThresholds {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            min_skills_pct: config.skills_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateOutcome {
    pub skills_passed: bool,
    pub experience_passed: bool,
    pub required_months: u32,
}

/// Keyword overlap plus TF-IDF similarity matcher
pub struct ATSMatcher {
    text_processor: TextProcessor,
    scoring: ScoringConfig,
}

impl Default for ATSMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ATSMatcher {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(scoring: ScoringConfig) -> Self {
        Self {
            text_processor: TextProcessor::new(),
            scoring,
        }
    }

    /// Toggle synonym-aware overlap; when off, only literally equal terms match.
    pub fn with_synonyms(mut self, enabled: bool) -> Self {
        self.scoring.use_synonyms = enabled;
        self
    }

    pub fn with_text_processor(mut self, text_processor: TextProcessor) -> Self {
        self.text_processor = text_processor;
        self
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Score a resume against a job description.
    pub fn score(&self, job_description: &str, resume: &str) -> MatchResult {
        let jd_terms = self.text_processor.extract_technical_terms(job_description);
        if jd_terms.is_empty() {
            debug!("Job description has no technical terms; score is 0");
            return MatchResult::default();
        }

        let resume_terms = self.text_processor.extract_technical_terms(resume);
        let resume_phrases = if self.scoring.use_synonyms {
            SYNONYMS.find_terms(resume)
        } else {
            HashSet::new()
        };

        let (overlap, missing): (BTreeSet<String>, BTreeSet<String>) = jd_terms
            .iter()
            .cloned()
            .partition(|term| self.is_covered(term, &resume_terms, &resume_phrases));

        let keyword_pct = 100.0 * overlap.len() as f64 / jd_terms.len() as f64;

        let semantic_pct = match tfidf::cosine_similarity(job_description, resume) {
            Ok(similarity) => Some(similarity * 100.0),
            Err(e) => {
                debug!("Semantic similarity unavailable, using keyword score only: {}", e);
                None
            }
        };

        let score = match semantic_pct {
            Some(semantic) => {
                self.scoring.keyword_weight * keyword_pct + self.scoring.semantic_weight * semantic
            }
            None => keyword_pct,
        };

        debug!(
            "Matched {}/{} job terms, keyword {:.2}%, semantic {:?}",
            overlap.len(),
            jd_terms.len(),
            keyword_pct,
            semantic_pct
        );

        MatchResult {
            score: round2(score.clamp(0.0, 100.0)),
            overlap,
            missing,
            keyword_pct: round2(keyword_pct),
            semantic_pct: semantic_pct.map(round2),
        }
    }

    fn is_covered(&self, term: &str, resume_terms: &SkillSet, resume_phrases: &HashSet<String>) -> bool {
        if resume_terms.contains(term) {
            return true;
        }
        self.scoring.use_synonyms
            && SYNONYMS
                .equivalents(term)
                .into_iter()
                .any(|alias| resume_terms.contains(alias) || resume_phrases.contains(alias))
    }
}

/// First "<n> years" / "<n>+ years" figure in the text, or 0.
pub fn extract_min_years(job_description: &str) -> u32 {
    MIN_YEARS
        .captures(job_description)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

pub fn estimate_seniority(total_months: u32) -> Seniority {
    match total_months {
        0..=23 => Seniority::Junior,
        24..=59 => Seniority::Mid,
        _ => Seniority::Senior,
    }
}

/// Sum of each entry's months scaled by its employment-type weight.
pub fn weighted_total_months(entries: &[ExperienceEntry], weights: &EmploymentWeights) -> f64 {
    entries
        .iter()
        .map(|entry| entry.months() as f64 * entry.employment_type.weight(weights))
        .sum()
}

/// Skills gate compares the final score; the experience gate compares weighted months
/// against the required years.
pub fn evaluate_gates(
    result: &MatchResult,
    weighted_months: f64,
    min_years: u32,
    thresholds: &GateThresholds,
) -> GateOutcome {
    let required_months = min_years.saturating_mul(12);
    GateOutcome {
        skills_passed: result.score >= thresholds.min_skills_pct,
        experience_passed: weighted_months >= required_months as f64,
        required_months,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::dates::CanonicalMonth;
    use crate::processing::resume::EmploymentType;

    fn month(text: &str) -> Option<CanonicalMonth> {
        text.parse().ok()
    }

    fn entry(start: &str, end: &str, employment_type: EmploymentType) -> ExperienceEntry {
        ExperienceEntry::new("Co", "Role")
            .with_dates(month(start), month(end))
            .with_employment_type(employment_type)
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let result = ATSMatcher::new().score("", "Python AWS React developer");
        assert_eq!(result.score, 0.0);
        assert!(result.overlap.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_overlap_and_missing() {
        let matcher = ATSMatcher::new().with_synonyms(false);
        let result = matcher.score(
            "Looking for Python, AWS and Terraform experience",
            "Built services in Python on AWS",
        );

        assert_eq!(result.overlap.iter().collect::<Vec<_>>(), vec!["aws", "python"]);
        assert_eq!(result.missing.iter().collect::<Vec<_>>(), vec!["terraform"]);
        assert!((result.keyword_pct - 66.67).abs() < 1e-9);
        assert!(result.semantic_pct.is_some());
        assert!(result.score > 0.0 && result.score <= 100.0);
    }

    #[test]
    fn test_final_score_blends_keyword_and_semantic() {
        let result = ATSMatcher::new().score("python kafka", "python kafka");
        assert_eq!(result.keyword_pct, 100.0);
        assert_eq!(result.semantic_pct, Some(100.0));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_fallback_to_keyword_only() {
        // No token of two or more word characters on either side leaves TF-IDF without a vocabulary.
        let result = ATSMatcher::new().score("C", "C R");
        assert_eq!(result.semantic_pct, None);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_synonym_aware_overlap() {
        let jd = "Kubernetes and AWS required";
        let resume = "Ran K8s clusters on Amazon Web Services";

        let with = ATSMatcher::new().score(jd, resume);
        assert!(with.overlap.contains("kubernetes"));
        assert!(with.overlap.contains("aws"));

        let literal = ATSMatcher::new().with_synonyms(false);
        assert!(!literal.scoring().use_synonyms);
        let without = literal.score(jd, resume);
        assert!(without.overlap.is_empty());
        assert!(without.missing.contains("kubernetes"));
    }

    #[test]
    fn test_custom_stop_words_drop_job_terms() {
        let matcher = ATSMatcher::new()
            .with_synonyms(false)
            .with_text_processor(TextProcessor::new().with_stop_words(["acme"]));
        let result = matcher.score("Acme needs Rust and Kafka", "Rust at Acme");

        assert_eq!(result.overlap.iter().collect::<Vec<_>>(), vec!["rust"]);
        assert_eq!(result.missing.iter().collect::<Vec<_>>(), vec!["kafka"]);
        assert_eq!(result.keyword_pct, 50.0);
    }

    #[test]
    fn test_extract_min_years() {
        assert_eq!(extract_min_years("Requires 5+ years of Rust"), 5);
        assert_eq!(extract_min_years("3 Years experience, ideally 7 years"), 3);
        assert_eq!(extract_min_years("1 year minimum"), 1);
        assert_eq!(extract_min_years("years of experience preferred"), 0);
    }

    #[test]
    fn test_seniority_boundaries() {
        assert_eq!(estimate_seniority(0), Seniority::Junior);
        assert_eq!(estimate_seniority(23), Seniority::Junior);
        assert_eq!(estimate_seniority(24), Seniority::Mid);
        assert_eq!(estimate_seniority(59), Seniority::Mid);
        assert_eq!(estimate_seniority(60), Seniority::Senior);
        assert_eq!(Seniority::Mid.to_string(), "Mid");
    }

    #[test]
    fn test_weighted_total_months() {
        let entries = vec![
            entry("2020-01", "2021-01", EmploymentType::FullTime),
            entry("2021-01", "2021-11", EmploymentType::PartTime),
            entry("2019-06", "2019-11", EmploymentType::Internship),
        ];
        assert_eq!(entries.iter().map(ExperienceEntry::months).collect::<Vec<_>>(), vec![12, 10, 5]);

        let weighted = weighted_total_months(&entries, &EmploymentWeights::default());
        assert!((weighted - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_gates() {
        let result = MatchResult {
            score: 80.0,
            ..Default::default()
        };
        let outcome = evaluate_gates(&result, 40.0, 3, &GateThresholds::default());
        assert!(outcome.skills_passed);
        assert!(outcome.experience_passed);
        assert_eq!(outcome.required_months, 36);

        let strict = GateThresholds { min_skills_pct: 90.0 };
        let outcome = evaluate_gates(&result, 30.0, 3, &strict);
        assert!(!outcome.skills_passed);
        assert!(!outcome.experience_passed);
    }

    #[test]
    fn test_gate_thresholds_from_config() {
        let thresholds = GateThresholds::from(&ScoringConfig::default());
        assert_eq!(thresholds.min_skills_pct, 75.0);
    }
}
