//! Degree entries from the education section

use crate::processing::dates::{normalize, DATE_PATTERN};
use crate::processing::extract::EntryAccumulator;
use crate::processing::lines::{gpa_value, is_course_line, is_degree_line, is_gpa_line, is_institution_line, split_dash};
use crate::processing::resume::EducationEntry;

pub fn extract(lines: &[String]) -> Vec<EducationEntry> {
    lines
        .iter()
        .fold(EntryAccumulator::default(), |acc, line| {
            let acc = if is_institution_line(line) {
                acc.start(institution_entry(line))
            } else if is_degree_line(line) {
                acc.update(|entry: &mut EducationEntry| {
                    if entry.degree.is_empty() {
                        entry.degree = line.clone();
                    }
                })
            } else if is_course_line(line) {
                acc.update(|entry: &mut EducationEntry| {
                    if let Some(courses) = parse_courses(line) {
                        entry.courses = courses;
                    }
                })
            } else {
                acc
            };

            acc.update(|entry: &mut EducationEntry| {
                if is_gpa_line(line) {
                    if let Some(gpa) = gpa_value(line) {
                        entry.gpa = Some(gpa);
                    }
                }
                if entry.graduation_date.is_none() {
                    entry.graduation_date = last_date(line);
                }
            })
        })
        .finish()
}

/// "State University - B.S. Computer Science" splits into institution and degree.
fn institution_entry(line: &str) -> EducationEntry {
    let (institution, degree) = match split_dash(line) {
        Some((left, right)) => (left.to_string(), right.to_string()),
        None => (line.to_string(), String::new()),
    };

    EducationEntry {
        institution,
        degree,
        ..Default::default()
    }
}

/// Course names after the first colon, split on commas and semicolons; `None` without a colon.
fn parse_courses(line: &str) -> Option<Vec<String>> {
    line.split_once(':').map(|(_, rest)| {
        rest.split([',', ';'])
            .map(str::trim)
            .filter(|course| !course.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// The last recognizable month/year on the line, as a canonical string.
fn last_date(line: &str) -> Option<String> {
    DATE_PATTERN
        .find_iter(line)
        .filter_map(|m| normalize(m.as_str()))
        .last()
        .map(|date| date.to_string())
}
