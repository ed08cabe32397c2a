//! Output formatters for parsed resumes and match reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::{format_months, MatchReport};
use crate::processing::resume::{EducationEntry, ExperienceEntry, ParsedResume};
use askama::Template;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::Path;

/// Terms listed per group before the console output truncates (non-detailed mode).
const TERM_PREVIEW: usize = 15;

/// Trait for formatting resumes and match reports
pub trait OutputFormatter {
    fn format_resume(&self, resume: &ParsedResume) -> Result<String>;
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_gate(&self, name: &str, passed: bool) -> String {
        let (label, color) = if passed {
            ("PASS", Color::Green)
        } else {
            ("FAIL", Color::Red)
        };
        if self.use_colors {
            format!("{:<18} [{}]\n", name, label.color(color).bold())
        } else {
            format!("{:<18} [{}]\n", name, label)
        }
    }

    fn format_terms(&self, terms: &BTreeSet<String>, color: Color) -> String {
        if terms.is_empty() {
            return "  None\n".to_string();
        }

        let limit = if self.detailed { terms.len() } else { TERM_PREVIEW };
        let shown: Vec<&str> = terms.iter().take(limit).map(String::as_str).collect();
        let mut line = format!("  {}", self.colorize(&shown.join(", "), color));
        if terms.len() > limit {
            line.push_str(&format!(" (+{} more)", terms.len() - limit));
        }
        line.push('\n');
        line
    }

    fn format_experience(&self, entry: &ExperienceEntry) -> String {
        let mut output = format!(
            "  {} {}\n",
            self.colorize(&entry_heading(&entry.company, &entry.title), Color::Cyan),
            entry.employment_type
        );
        output.push_str(&format!("    {}\n", date_range(entry)));
        for bullet in &entry.bullets {
            output.push_str(&format!("    • {}\n", bullet));
        }
        output
    }

    fn format_education(&self, entry: &EducationEntry) -> String {
        let mut output = format!("  {}\n", self.colorize(&entry_heading(&entry.institution, &entry.degree), Color::Cyan));
        let details = education_details(entry);
        if !details.is_empty() {
            output.push_str(&format!("    {}\n", details));
        }
        if !entry.courses.is_empty() {
            output.push_str(&format!("    Courses: {}\n", entry.courses.join(", ")));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_resume(&self, resume: &ParsedResume) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("PARSED RESUME", 1));

        output.push_str(&self.format_header(&format!("Experience ({})", resume.experience.len()), 2));
        for entry in &resume.experience {
            output.push_str(&self.format_experience(entry));
        }

        output.push_str(&self.format_header(&format!("Education ({})", resume.education.len()), 2));
        for entry in &resume.education {
            output.push_str(&self.format_education(entry));
        }

        output.push_str(&self.format_header(&format!("Projects ({})", resume.projects.len()), 2));
        for project in &resume.projects {
            output.push_str(&format!("  {}\n", self.colorize(&project.title, Color::Cyan)));
            if self.detailed {
                for bullet in &project.bullets {
                    output.push_str(&format!("    • {}\n", bullet));
                }
            }
        }

        output.push_str(&self.format_header(&format!("Skills ({})", resume.skills.len()), 2));
        if !resume.skills.is_empty() {
            output.push_str(&format!("  {}\n", resume.skills.join(", ")));
        }

        output.push_str(&format!(
            "\nTotal experience: {}\n",
            format_months(resume.total_months() as f64)
        ));
        Ok(output)
    }

    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH REPORT", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Skills Match", 2));
        output.push_str(&format!(
            "Score: {}\n",
            self.colorize(&format!("{:.2}%", report.result.score), score_color(report.result.score))
        ));
        if self.detailed {
            output.push_str(&format!("  Keyword overlap: {:.2}%\n", report.result.keyword_pct));
            match report.result.semantic_pct {
                Some(semantic) => output.push_str(&format!("  TF-IDF similarity: {:.2}%\n", semantic)),
                None => output.push_str("  TF-IDF similarity: unavailable (keyword score only)\n"),
            }
        }

        output.push_str(&self.format_header("Experience", 2));
        output.push_str(&format!(
            "Weighted experience: {}\n",
            format_months(report.experience.weighted_months)
        ));
        output.push_str(&format!(
            "Required: {} years ({} months)\n",
            report.experience.min_years, report.experience.required_months
        ));
        output.push_str(&format!("Seniority: {}\n", report.experience.seniority));

        output.push_str(&self.format_header("Gates", 2));
        output.push_str(&self.format_gate(
            &format!("Skills (>= {:.1}%)", report.thresholds.min_skills_pct),
            report.gates.skills_passed,
        ));
        output.push_str(&self.format_gate("Experience", report.gates.experience_passed));
        output.push_str(&format!("\nVerdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));

        output.push_str(&self.format_header("Matched skills", 3));
        output.push_str(&self.format_terms(&report.result.overlap, Color::Green));
        output.push_str(&self.format_header("Missing skills", 3));
        output.push_str(&self.format_terms(&report.result.missing, Color::Yellow));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_resume(&self, resume: &ParsedResume) -> Result<String> {
        if self.pretty {
            resume.to_json_pretty()
        } else {
            Ok(serde_json::to_string(resume)?)
        }
    }

    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_resume(&self, resume: &ParsedResume) -> Result<String> {
        let mut output = String::from("# Parsed Resume\n\n");

        output.push_str("## Experience\n\n");
        for entry in &resume.experience {
            output.push_str(&format!(
                "### {}\n\n*{}* ({})\n\n",
                entry_heading(&entry.company, &entry.title),
                date_range(entry),
                entry.employment_type
            ));
            for bullet in &entry.bullets {
                output.push_str(&format!("- {}\n", bullet));
            }
            output.push('\n');
        }

        output.push_str("## Education\n\n");
        for entry in &resume.education {
            output.push_str(&format!("### {}\n\n", entry_heading(&entry.institution, &entry.degree)));
            let details = education_details(entry);
            if !details.is_empty() {
                output.push_str(&format!("{}\n\n", details));
            }
            if !entry.courses.is_empty() {
                output.push_str(&format!("**Courses:** {}\n\n", entry.courses.join(", ")));
            }
        }

        output.push_str("## Projects\n\n");
        for project in &resume.projects {
            output.push_str(&format!("### {}\n\n", project.title));
            for bullet in &project.bullets {
                output.push_str(&format!("- {}\n", bullet));
            }
            output.push('\n');
        }

        output.push_str("## Skills\n\n");
        for skill in &resume.skills {
            output.push_str(&format!("- {}\n", skill));
        }

        Ok(output)
    }

    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::from("# Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                file_name(&report.metadata.resume_file),
                file_name(&report.metadata.job_file)
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));
        output.push_str("| Metric | Value |\n|---|---|\n");
        output.push_str(&format!("| Skills match | {:.2}% |\n", report.result.score));
        output.push_str(&format!("| Keyword overlap | {:.2}% |\n", report.result.keyword_pct));
        output.push_str(&format!(
            "| TF-IDF similarity | {} |\n",
            report
                .result
                .semantic_pct
                .map(|s| format!("{:.2}%", s))
                .unwrap_or_else(|| "n/a".to_string())
        ));
        output.push_str(&format!(
            "| Weighted experience | {} |\n",
            format_months(report.experience.weighted_months)
        ));
        output.push_str(&format!(
            "| Required experience | {} years ({} months) |\n",
            report.experience.min_years, report.experience.required_months
        ));
        output.push_str(&format!("| Seniority | {} |\n\n", report.experience.seniority));

        output.push_str("## Gates\n\n");
        output.push_str(&format!(
            "- Skills (>= {:.1}%): {}\n",
            report.thresholds.min_skills_pct,
            markdown_gate(report.gates.skills_passed)
        ));
        output.push_str(&format!(
            "- Experience: {}\n\n",
            markdown_gate(report.gates.experience_passed)
        ));

        output.push_str("## Matched Skills\n\n");
        output.push_str(&markdown_terms(&report.result.overlap));
        output.push_str("## Missing Skills\n\n");
        output.push_str(&markdown_terms(&report.result.missing));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Askama template for the HTML match report
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Match Report</title>
    <style>
        body { font-family: sans-serif; max-width: 860px; margin: 2rem auto; color: #222; }
        .score { font-size: 2.5rem; font-weight: bold; }
        .pass { color: #1a7f37; } .fail { color: #cf222e; }
        .terms span { display: inline-block; margin: 2px; padding: 2px 8px; border-radius: 10px; background: #eef; }
        td { padding: 4px 12px; }
    </style>
</head>
<body>
    <h1>Resume Match Report</h1>
    <p>Generated {{ generated_at }}{% if !resume_file.is_empty() %} | Resume: {{ resume_file }} | Job: {{ job_file }}{% endif %}</p>
    <div class="score">{{ score }}%</div>
    <p><strong>{{ verdict }}</strong></p>
    <table>
        <tr><td>Keyword overlap</td><td>{{ keyword_pct }}%</td></tr>
        <tr><td>TF-IDF similarity</td><td>{{ semantic_pct }}</td></tr>
        <tr><td>Weighted experience</td><td>{{ weighted_experience }}</td></tr>
        <tr><td>Required experience</td><td>{{ min_years }} years ({{ required_months }} months)</td></tr>
        <tr><td>Seniority</td><td>{{ seniority }}</td></tr>
        <tr><td>Skills gate (&ge; {{ skills_threshold }}%)</td><td class="{{ skills_class }}">{{ skills_gate }}</td></tr>
        <tr><td>Experience gate</td><td class="{{ experience_class }}">{{ experience_gate }}</td></tr>
    </table>
    <h2>Matched skills</h2>
    <div class="terms">{% for term in overlap %}<span>{{ term }}</span>{% endfor %}</div>
    <h2>Missing skills</h2>
    <div class="terms">{% for term in missing %}<span>{{ term }}</span>{% endfor %}</div>
    <footer><p>resume-ats {{ version }}</p></footer>
</body>
</html>"#,
    ext = "html"
)]
struct ReportTemplate {
    generated_at: String,
    resume_file: String,
    job_file: String,
    score: String,
    verdict: String,
    keyword_pct: String,
    semantic_pct: String,
    weighted_experience: String,
    min_years: u32,
    required_months: u32,
    seniority: String,
    skills_threshold: String,
    skills_class: &'static str,
    skills_gate: &'static str,
    experience_class: &'static str,
    experience_gate: &'static str,
    overlap: Vec<String>,
    missing: Vec<String>,
    version: String,
}

/// Askama template for an HTML rendering of a parsed resume
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Parsed Resume</title>
    <style>
        body { font-family: sans-serif; max-width: 860px; margin: 2rem auto; color: #222; }
        .meta { color: #666; }
    </style>
</head>
<body>
    <h1>Parsed Resume</h1>
    <h2>Experience</h2>
    {% for job in experience %}
    <h3>{{ job.heading }}</h3>
    <p class="meta">{{ job.dates }}</p>
    <ul>{% for bullet in job.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>
    {% endfor %}
    <h2>Education</h2>
    {% for school in education %}
    <h3>{{ school.heading }}</h3>
    <p class="meta">{{ school.details }}</p>
    {% endfor %}
    <h2>Projects</h2>
    {% for project in projects %}
    <h3>{{ project.heading }}</h3>
    <ul>{% for bullet in project.bullets %}<li>{{ bullet }}</li>{% endfor %}</ul>
    {% endfor %}
    <h2>Skills</h2>
    <p>{{ skills }}</p>
</body>
</html>"#,
    ext = "html"
)]
struct ResumeTemplate {
    experience: Vec<HtmlEntry>,
    education: Vec<HtmlEntry>,
    projects: Vec<HtmlEntry>,
    skills: String,
}

#[derive(Debug, Clone)]
struct HtmlEntry {
    heading: String,
    dates: String,
    details: String,
    bullets: Vec<String>,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn create_report_data(&self, report: &MatchReport) -> ReportTemplate {
        let (skills_class, skills_gate) = html_gate(report.gates.skills_passed);
        let (experience_class, experience_gate) = html_gate(report.gates.experience_passed);

        ReportTemplate {
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            resume_file: file_name(&report.metadata.resume_file),
            job_file: file_name(&report.metadata.job_file),
            score: format!("{:.2}", report.result.score),
            verdict: report.verdict().to_string(),
            keyword_pct: format!("{:.2}", report.result.keyword_pct),
            semantic_pct: report
                .result
                .semantic_pct
                .map(|s| format!("{:.2}%", s))
                .unwrap_or_else(|| "n/a".to_string()),
            weighted_experience: format_months(report.experience.weighted_months),
            min_years: report.experience.min_years,
            required_months: report.experience.required_months,
            seniority: report.experience.seniority.to_string(),
            skills_threshold: format!("{:.1}", report.thresholds.min_skills_pct),
            skills_class,
            skills_gate,
            experience_class,
            experience_gate,
            overlap: report.result.overlap.iter().cloned().collect(),
            missing: report.result.missing.iter().cloned().collect(),
            version: report.metadata.version.clone(),
        }
    }

    fn create_resume_data(&self, resume: &ParsedResume) -> ResumeTemplate {
        ResumeTemplate {
            experience: resume
                .experience
                .iter()
                .map(|entry| HtmlEntry {
                    heading: entry_heading(&entry.company, &entry.title),
                    dates: format!("{} ({})", date_range(entry), entry.employment_type),
                    details: String::new(),
                    bullets: entry.bullets.clone(),
                })
                .collect(),
            education: resume
                .education
                .iter()
                .map(|entry| HtmlEntry {
                    heading: entry_heading(&entry.institution, &entry.degree),
                    dates: String::new(),
                    details: education_details(entry),
                    bullets: entry.courses.clone(),
                })
                .collect(),
            projects: resume
                .projects
                .iter()
                .map(|project| HtmlEntry {
                    heading: project.title.clone(),
                    dates: String::new(),
                    details: String::new(),
                    bullets: project.bullets.clone(),
                })
                .collect(),
            skills: resume.skills.join(", "),
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_resume(&self, resume: &ParsedResume) -> Result<String> {
        Ok(self.create_resume_data(resume).render()?)
    }

    fn format_report(&self, report: &MatchReport) -> Result<String> {
        Ok(self.create_report_data(report).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_resume(&self, resume: &ParsedResume, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_resume(resume)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}

/// "Company - Title", or whichever half is present.
fn entry_heading(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{} - {}", left, right),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => "(untitled)".to_string(),
    }
}

fn date_range(entry: &ExperienceEntry) -> String {
    let start = entry.start_date().map(ToString::to_string).unwrap_or_else(|| "?".to_string());
    let end = entry.end_date().map(ToString::to_string).unwrap_or_else(|| "?".to_string());
    format!("{} to {}, {} months", start, end, entry.months())
}

fn education_details(entry: &EducationEntry) -> String {
    let mut parts = Vec::new();
    if let Some(date) = &entry.graduation_date {
        parts.push(format!("Graduated {}", date));
    }
    if let Some(gpa) = entry.gpa {
        parts.push(format!("GPA {:.2}", gpa));
    }
    parts.join(" | ")
}

fn score_color(score: f64) -> Color {
    if score >= 75.0 {
        Color::Green
    } else if score >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn markdown_gate(passed: bool) -> &'static str {
    if passed {
        "✅ passed"
    } else {
        "❌ failed"
    }
}

fn markdown_terms(terms: &BTreeSet<String>) -> String {
    if terms.is_empty() {
        "None\n\n".to_string()
    } else {
        format!("{}\n\n", terms.iter().map(|t| format!("`{}`", t)).collect::<Vec<_>>().join(", "))
    }
}

fn html_gate(passed: bool) -> (&'static str, &'static str) {
    if passed {
        ("pass", "PASS")
    } else {
        ("fail", "FAIL")
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
