//! Structured resume records and the parsing pipeline

use crate::config::{EmploymentWeights, ParsingConfig};
use crate::error::Result;
use crate::processing::ats_matcher::weighted_total_months;
use crate::processing::dates::{self, months_between_at, CanonicalMonth, YearMonth};
use crate::processing::document::{segment, ResumeDocument, SectionType};
use crate::processing::extract::{education, experience, projects, skills, Flushable};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PT")]
    PartTime,
    #[serde(rename = "INT")]
    Internship,
}

impl EmploymentType {
    pub fn weight(&self, weights: &EmploymentWeights) -> f64 {
        match self {
            EmploymentType::FullTime => weights.full_time,
            EmploymentType::PartTime => weights.part_time,
            EmploymentType::Internship => weights.internship,
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            EmploymentType::FullTime => "FT",
            EmploymentType::PartTime => "PT",
            EmploymentType::Internship => "INT",
        };
        write!(f, "{}", code)
    }
}

/// One job. `months` is always derived from the two dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExperienceRecord")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    start_date: Option<CanonicalMonth>,
    end_date: Option<CanonicalMonth>,
    pub bullets: Vec<String>,
    pub employment_type: EmploymentType,
    months: u32,
}

/// Serialized shape of an experience entry; `months` is recomputed on load.
#[derive(Deserialize)]
struct ExperienceRecord {
    #[serde(default)]
    company: String,
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "dates::lenient::deserialize")]
    start_date: Option<CanonicalMonth>,
    #[serde(default, deserialize_with = "dates::lenient::deserialize")]
    end_date: Option<CanonicalMonth>,
    #[serde(default)]
    bullets: Vec<String>,
    #[serde(default)]
    employment_type: EmploymentType,
}

impl From<ExperienceRecord> for ExperienceEntry {
    fn from(record: ExperienceRecord) -> Self {
        let mut entry = ExperienceEntry {
            company: record.company,
            title: record.title,
            bullets: record.bullets,
            employment_type: record.employment_type,
            ..Default::default()
        };
        entry.set_dates(record.start_date, record.end_date);
        entry
    }
}

impl ExperienceEntry {
    pub fn new(company: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_dates(mut self, start: Option<CanonicalMonth>, end: Option<CanonicalMonth>) -> Self {
        self.set_dates(start, end);
        self
    }

    pub fn with_employment_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = employment_type;
        self
    }

    pub fn start_date(&self) -> Option<&CanonicalMonth> {
        self.start_date.as_ref()
    }

    pub fn end_date(&self) -> Option<&CanonicalMonth> {
        self.end_date.as_ref()
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Replace both dates and recompute `months` against the current month.
    pub fn set_dates(&mut self, start: Option<CanonicalMonth>, end: Option<CanonicalMonth>) {
        self.set_dates_at(start, end, YearMonth::current());
    }

    /// Replace both dates and recompute `months`, resolving "Present" to `today`.
    pub fn set_dates_at(&mut self, start: Option<CanonicalMonth>, end: Option<CanonicalMonth>, today: YearMonth) {
        self.start_date = start;
        self.end_date = end;
        self.recompute_months_at(today);
    }

    pub fn recompute_months_at(&mut self, today: YearMonth) {
        self.months = months_between_at(self.start_date.as_ref(), self.end_date.as_ref(), today);
    }
}

impl Flushable for ExperienceEntry {
    fn is_flushable(&self) -> bool {
        !self.company.is_empty() || !self.title.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub graduation_date: Option<String>,
    pub gpa: Option<f64>,
    pub courses: Vec<String>,
}

impl Flushable for EducationEntry {
    fn is_flushable(&self) -> bool {
        !self.institution.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub bullets: Vec<String>,
}

impl Flushable for ProjectEntry {
    fn is_flushable(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Case-insensitive, deduplicated set of skill tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill in normalized (trimmed, lower-case) form. Blank input is ignored.
    pub fn insert(&mut self, skill: &str) -> bool {
        let normalized = skill.trim().to_lowercase();
        !normalized.is_empty() && self.0.insert(normalized)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&skill.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill.as_ref());
        }
        set
    }
}

/// The structured record produced from one resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
}

impl ParsedResume {
    /// Sum of raw experience months.
    pub fn total_months(&self) -> u32 {
        self.experience.iter().map(ExperienceEntry::months).sum()
    }

    pub fn weighted_months(&self, weights: &EmploymentWeights) -> f64 {
        weighted_total_months(&self.experience, weights)
    }

    pub fn skill_set(&self) -> SkillSet {
        self.skills.iter().collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Runs segmentation and per-section extraction over resume text.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    config: ParsingConfig,
    reference_month: Option<YearMonth>,
}

impl ResumeParser {
    pub fn new(config: ParsingConfig) -> Self {
        Self {
            config,
            reference_month: None,
        }
    }

    /// Resolve "Present" against a fixed month instead of the wall clock.
    pub fn with_reference_month(mut self, month: YearMonth) -> Self {
        self.reference_month = Some(month);
        self
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        let document = ResumeDocument::from_text(text);
        self.parse_document(&document)
    }

    pub fn parse_document(&self, document: &ResumeDocument) -> ParsedResume {
        let sections = segment(document.lines(), self.config.header_max_len);
        let today = self.reference_month.unwrap_or_else(YearMonth::current);

        let parsed = ParsedResume {
            experience: experience::extract(
                document.section_lines(&sections, SectionType::Experience),
                today,
            ),
            education: education::extract(document.section_lines(&sections, SectionType::Education)),
            projects: projects::extract(
                document.section_lines(&sections, SectionType::Projects),
                self.config.project_title_min_len,
            ),
            skills: skills::extract(
                document.section_lines(&sections, SectionType::Skills),
                &self.config,
            ),
        };

        debug!(
            "Sections found: {:?}",
            sections.sections().map(|(kind, _)| kind).collect::<Vec<_>>()
        );
        info!(
            "Parsed resume: {} experience, {} education, {} projects, {} skills",
            parsed.experience.len(),
            parsed.education.len(),
            parsed.projects.len(),
            parsed.skills.len()
        );

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    fn month(text: &str) -> Option<CanonicalMonth> {
        Some(text.parse().unwrap())
    }

    #[test]
    fn test_end_to_end_single_job() {
        let text = "Experience\nAcme Corp - Backend Engineer (Jan 2020 - Present)\n• Built APIs\nEducation";
        let parsed = ResumeParser::default().with_reference_month(reference()).parse(text);

        assert_eq!(parsed.experience.len(), 1);
        let job = &parsed.experience[0];
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.start_date().unwrap().to_string(), "2020-01");
        assert_eq!(job.end_date(), Some(&CanonicalMonth::Present));
        assert_eq!(job.bullets, vec!["Built APIs".to_string()]);
        assert_eq!(job.employment_type, EmploymentType::FullTime);
        assert_eq!(job.months(), 60);
        assert!(parsed.education.is_empty());
    }

    #[test]
    fn test_full_resume() {
        let text = "\
Jane Doe
Experience
Acme Corp - Backend Engineer (Jan 2020 - Present)
• Built APIs in Rust
• Cut latency by 40%
Globex - Intern (Jun 2018 - Aug 2018)
- Wrote tests
Education
State University - B.S. Computer Science
GPA: 3.7
Relevant Coursework: Algorithms, Operating Systems; Databases
Projects
Distributed Key Value Store
• Raft consensus in Rust
Skills
Languages: Rust, Python, Go
Tools: Docker | Kubernetes";

        let parsed = ResumeParser::default().with_reference_month(reference()).parse(text);

        assert_eq!(parsed.experience.len(), 2);
        assert_eq!(parsed.experience[1].company, "Globex");
        assert_eq!(parsed.experience[1].months(), 2);
        assert_eq!(parsed.experience[0].bullets.len(), 2);

        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.education[0].institution, "State University");
        assert_eq!(parsed.education[0].degree, "B.S. Computer Science");
        assert_eq!(parsed.education[0].gpa, Some(3.7));
        assert_eq!(parsed.education[0].courses.len(), 3);

        assert_eq!(parsed.projects.len(), 1);
        assert_eq!(parsed.projects[0].bullets, vec!["Raft consensus in Rust".to_string()]);

        assert_eq!(parsed.skills, vec!["Rust", "Python", "Go Docker", "Kubernetes"]);
        assert_eq!(parsed.total_months(), 62);
    }

    #[test]
    fn test_garbage_input_yields_empty_record() {
        let parsed = ResumeParser::default().parse("lorem ipsum\n\n12345\n•\n");
        assert_eq!(parsed, ParsedResume::default());

        let parsed = ResumeParser::default().parse("");
        assert_eq!(parsed, ParsedResume::default());
    }

    #[test]
    fn test_months_follow_date_changes() {
        let mut entry = ExperienceEntry::new("Acme", "Dev").with_dates(month("2020-01"), month("2021-01"));
        assert_eq!(entry.months(), 12);

        entry.set_dates_at(month("2020-01"), month("2020-04"), reference());
        assert_eq!(entry.months(), 3);

        entry.set_dates_at(None, month("2020-04"), reference());
        assert_eq!(entry.months(), 0);
    }

    #[test]
    fn test_json_round_trip_shape() {
        let resume = ParsedResume {
            experience: vec![ExperienceEntry::new("Acme", "Dev")
                .with_dates(month("2020-01"), month("2021-07"))
                .with_employment_type(EmploymentType::PartTime)],
            education: vec![EducationEntry {
                institution: "State University".into(),
                gpa: Some(3.5),
                ..Default::default()
            }],
            projects: vec![],
            skills: vec!["Rust".into()],
        };

        let json = resume.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["experience"][0]["start_date"], "2020-01");
        assert_eq!(value["experience"][0]["employment_type"], "PT");
        assert_eq!(value["experience"][0]["months"], 18);
        assert_eq!(value["education"][0]["graduation_date"], serde_json::Value::Null);

        assert_eq!(ParsedResume::from_json_str(&json).unwrap(), resume);
    }

    #[test]
    fn test_json_load_recomputes_months_and_softens_dates() {
        let json = r#"{
            "experience": [
                {"company": "Acme", "title": "Dev", "start_date": "Jan 2019", "end_date": "2020-01", "months": 999},
                {"company": "Initech", "title": "Ops", "start_date": "sometime", "end_date": "2020-01", "employment_type": "INT"}
            ],
            "skills": ["Go"]
        }"#;

        let parsed = ParsedResume::from_json_str(json).unwrap();
        assert_eq!(parsed.experience[0].months(), 12);
        assert_eq!(parsed.experience[0].start_date().unwrap().to_string(), "2019-01");
        assert_eq!(parsed.experience[1].start_date(), None);
        assert_eq!(parsed.experience[1].months(), 0);
        assert_eq!(parsed.experience[1].employment_type, EmploymentType::Internship);
        assert!(parsed.education.is_empty());
    }

    #[test]
    fn test_skill_set_normalizes() {
        let resume = ParsedResume {
            skills: vec!["Rust".into(), " rust ".into(), "Go".into(), "".into()],
            ..Default::default()
        };
        let set = resume.skill_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("RUST"));
        assert_eq!(set.to_vec(), vec!["go".to_string(), "rust".to_string()]);
    }
}
