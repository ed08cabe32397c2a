//! Match report combining the score, experience figures and gate outcomes

use crate::config::EmploymentWeights;
use crate::processing::ats_matcher::{
    estimate_seniority, evaluate_gates, extract_min_years, ATSMatcher, GateOutcome, GateThresholds, MatchResult,
    Seniority,
};
use crate::processing::resume::ParsedResume;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub result: MatchResult,
    pub experience: ExperienceSummary,
    pub thresholds: GateThresholds,
    pub gates: GateOutcome,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    /// Years of experience the job description asks for (0 when unstated).
    pub min_years: u32,
    pub required_months: u32,
    pub total_months: u32,
    pub weighted_months: f64,
    pub seniority: Seniority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_file: String,
    pub version: String,
}

impl MatchReport {
    /// Score `resume_text` against `job_text` and evaluate both gates.
    ///
    /// Experience figures come from `resume`, which may be a hand-edited copy of
    /// the parsed record rather than the one produced from `resume_text`.
    pub fn build(
        matcher: &ATSMatcher,
        resume: &ParsedResume,
        resume_text: &str,
        job_text: &str,
        weights: &EmploymentWeights,
        thresholds: GateThresholds,
    ) -> Self {
        let result = matcher.score(job_text, resume_text);
        let min_years = extract_min_years(job_text);
        let total_months = resume.total_months();
        let weighted_months = resume.weighted_months(weights);
        let gates = evaluate_gates(&result, weighted_months, min_years, &thresholds);

        Self {
            result,
            experience: ExperienceSummary {
                min_years,
                required_months: gates.required_months,
                total_months,
                weighted_months,
                seniority: estimate_seniority(total_months),
            },
            thresholds,
            gates,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: String::new(),
                job_file: String::new(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn with_sources(mut self, resume_file: impl Into<String>, job_file: impl Into<String>) -> Self {
        self.metadata.resume_file = resume_file.into();
        self.metadata.job_file = job_file.into();
        self
    }

    pub fn is_eligible(&self) -> bool {
        self.gates.skills_passed && self.gates.experience_passed
    }

    pub fn verdict(&self) -> &'static str {
        match (self.gates.skills_passed, self.gates.experience_passed) {
            (true, true) => "Eligible: skills and experience gates passed",
            (true, false) => "Skills match, but experience is below the requirement",
            (false, true) => "Experience is sufficient, but the skills match is below threshold",
            (false, false) => "Not eligible: skills and experience gates failed",
        }
    }
}

/// "53.0 months (4.4 years)"
pub fn format_months(months: f64) -> String {
    format!("{:.1} months ({:.1} years)", months, months / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::dates::YearMonth;
    use crate::processing::resume::ResumeParser;

    const RESUME: &str = "Jane Roe\n\
        Experience\n\
        Acme Corp - Backend Engineer (Jan 2020 - Jan 2024)\n\
        • Built Rust services on AWS with Kubernetes\n\
        Skills\n\
        Rust, AWS, Kubernetes, PostgreSQL";

    fn parsed() -> ParsedResume {
        let today = YearMonth::new(2024, 6).unwrap();
        ResumeParser::default().with_reference_month(today).parse(RESUME)
    }

    #[test]
    fn test_build_report() {
        let report = MatchReport::build(
            &ATSMatcher::new(),
            &parsed(),
            RESUME,
            "Senior engineer, 3+ years of Rust, AWS and Kubernetes",
            &EmploymentWeights::default(),
            GateThresholds { min_skills_pct: 50.0 },
        )
        .with_sources("resume.txt", "job.txt");

        assert_eq!(report.experience.min_years, 3);
        assert_eq!(report.experience.required_months, 36);
        assert_eq!(report.experience.total_months, 48);
        assert_eq!(report.experience.seniority, Seniority::Mid);
        assert!(report.gates.experience_passed);
        assert_eq!(report.metadata.resume_file, "resume.txt");
        assert!(report.result.overlap.contains("rust"));
    }

    #[test]
    fn test_verdict_follows_gates() {
        let mut report = MatchReport::build(
            &ATSMatcher::new(),
            &ParsedResume::default(),
            "",
            "10 years of COBOL",
            &EmploymentWeights::default(),
            GateThresholds::default(),
        );
        assert!(!report.is_eligible());
        assert_eq!(report.verdict(), "Not eligible: skills and experience gates failed");

        report.gates.skills_passed = true;
        report.gates.experience_passed = true;
        assert!(report.is_eligible());
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(18.0), "18.0 months (1.5 years)");
    }
}
