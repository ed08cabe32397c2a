//! Line-level predicates shared by the section segmenter and entry extractors

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Bullet markers, including the UTF-8-read-as-Latin-1 rendering of "•".
const BULLET_PREFIXES: [&str; 7] = ["â€¢", "•", "·", "–", "-", "*", "\u{f0b7}"];

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("valid year regex"));

static GPA_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\.\d+").expect("valid gpa regex"));

/// Length in user-perceived characters.
pub fn text_len(line: &str) -> usize {
    line.graphemes(true).count()
}

pub fn is_bullet(line: &str) -> bool {
    let trimmed = line.trim_start();
    BULLET_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Remove one leading bullet marker and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim_start();
    BULLET_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
        .trim()
}

pub fn has_year(line: &str) -> bool {
    YEAR_TOKEN.is_match(line)
}

pub fn contains_any(line: &str, needles: &[&str]) -> bool {
    let lower = line.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

/// A job header line: not a bullet, and carries a year.
pub fn is_job_header(line: &str) -> bool {
    !is_bullet(line) && has_year(line)
}

pub fn is_institution_line(line: &str) -> bool {
    contains_any(line, &["university", "college", "institute", "school"])
}

pub fn is_degree_line(line: &str) -> bool {
    contains_any(line, &["bachelor", "master", "phd", "degree", "b.s", "m.s"])
}

pub fn is_gpa_line(line: &str) -> bool {
    contains_any(line, &["gpa"])
}

pub fn is_course_line(line: &str) -> bool {
    contains_any(line, &["course"]) && line.contains(':')
}

/// First "d.dd" number on the line.
pub fn gpa_value(line: &str) -> Option<f64> {
    GPA_VALUE
        .find(line)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// A non-bullet line long enough to read as a project title.
pub fn is_project_title(line: &str, min_len: usize) -> bool {
    !is_bullet(line) && text_len(line) > min_len
}

/// Split on the first literal " - " separator.
pub fn split_dash(line: &str) -> Option<(&str, &str)> {
    line.split_once(" - ")
        .map(|(left, right)| (left.trim(), right.trim()))
}

/// Trim separators and brackets left behind when a date range is cut out of a line.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '–' | '—' | '|' | ',' | '(' | ')' | '[' | ']' | '@' | ':')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_detection() {
        assert!(is_bullet("• Built APIs"));
        assert!(is_bullet("  - Led migrations"));
        assert!(is_bullet("* Wrote tests"));
        assert!(is_bullet("· Profiled services"));
        assert!(is_bullet("– Shipped features"));
        assert!(is_bullet("â€¢ Mojibake bullet"));
        assert!(!is_bullet("Acme Corp - Engineer"));
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• Built APIs"), "Built APIs");
        assert_eq!(strip_bullet("â€¢ Built APIs"), "Built APIs");
        assert_eq!(strip_bullet("-Wrote docs "), "Wrote docs");
        assert_eq!(strip_bullet("Plain line"), "Plain line");
    }

    #[test]
    fn test_job_header_requires_year_and_no_bullet() {
        assert!(is_job_header("Acme Corp - Engineer (Jan 2020 - Present)"));
        assert!(!is_job_header("• Migrated 2000 services"));
        assert!(!is_job_header("Acme Corp - Engineer"));
    }

    #[test]
    fn test_education_predicates() {
        assert!(is_institution_line("Stanford University"));
        assert!(is_institution_line("Lincoln High SCHOOL"));
        assert!(is_degree_line("Bachelor of Science in CS"));
        assert!(is_degree_line("M.S. Computer Science"));
        assert!(is_gpa_line("GPA: 3.85/4.0"));
        assert_eq!(gpa_value("GPA: 3.85/4.0"), Some(3.85));
        assert_eq!(gpa_value("GPA: excellent"), None);
        assert!(is_course_line("Relevant Coursework: Algorithms, Databases"));
        assert!(!is_course_line("Coursework in algorithms"));
    }

    #[test]
    fn test_project_title_length_guard() {
        assert!(is_project_title("Distributed Cache in Rust", 10));
        assert!(!is_project_title("Short one", 10));
        assert!(!is_project_title("- A bullet that is long enough", 10));
    }

    #[test]
    fn test_split_and_trim() {
        assert_eq!(
            split_dash("Acme Corp - Backend Engineer (Jan 2020 - Present)"),
            Some(("Acme Corp", "Backend Engineer (Jan 2020 - Present)"))
        );
        assert_eq!(split_dash("Acme Corp – Engineer"), None);
        assert_eq!(trim_separators(" Backend Engineer ( "), "Backend Engineer");
    }
}
