//! Job entries from the experience section

use crate::processing::dates::{normalize, CanonicalMonth, YearMonth, DATE_PATTERN};
use crate::processing::extract::EntryAccumulator;
use crate::processing::lines::{contains_any, is_bullet, is_job_header, split_dash, strip_bullet, trim_separators};
use crate::processing::resume::ExperienceEntry;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_OR_ONGOING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:\d{4}|present|current|now)\b").expect("valid year/ongoing regex")
});

static BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("valid bare year regex"));

pub fn extract(lines: &[String], today: YearMonth) -> Vec<ExperienceEntry> {
    lines
        .iter()
        .fold(EntryAccumulator::default(), |acc, line| {
            if is_job_header(line) {
                acc.start(parse_header(line, today))
            } else if is_bullet(line) {
                let bullet = strip_bullet(line);
                if bullet.is_empty() {
                    acc
                } else {
                    acc.update(|entry: &mut ExperienceEntry| entry.bullets.push(bullet.to_string()))
                }
            } else {
                acc
            }
        })
        .finish()
}

/// Parse a job header line such as "Acme Corp - Backend Engineer (Jan 2020 - Present)".
///
/// With a " - " separator the left side is the company and the title is the text
/// before the first date; without one the whole line minus its dates is the title.
pub fn parse_header(line: &str, today: YearMonth) -> ExperienceEntry {
    let (company, title, remainder) = match split_dash(line) {
        Some((left, right)) => {
            let title = match first_date_position(right) {
                Some(pos) if !trim_separators(&right[..pos]).is_empty() => {
                    trim_separators(&right[..pos]).to_string()
                }
                _ => strip_dates(right),
            };
            (left.to_string(), title, right)
        }
        None => (String::new(), strip_dates(line), line),
    };

    let tokens = date_tokens(remainder);
    let start = tokens.first().copied();
    let mut end = tokens.get(1).copied();
    if tokens.len() == 1 && contains_any(remainder, &["present"]) {
        end = Some(CanonicalMonth::Present);
    }

    debug!("Job header '{}' -> company '{}', title '{}', {:?}..{:?}", line, company, title, start, end);

    let mut entry = ExperienceEntry::new(company, title);
    entry.set_dates_at(start, end, today);
    entry
}

/// Month/year matches that name a real month, in order of appearance.
fn date_tokens(text: &str) -> Vec<CanonicalMonth> {
    DATE_PATTERN
        .find_iter(text)
        .filter_map(|m| normalize(m.as_str()))
        .collect()
}

/// Byte offset where the date portion of a header begins.
fn first_date_position(text: &str) -> Option<usize> {
    let date = DATE_PATTERN
        .find_iter(text)
        .find(|m| normalize(m.as_str()).is_some())
        .map(|m| m.start());
    let year = BARE_YEAR.find(text).map(|m| m.start());

    match (date, year) {
        (Some(d), Some(y)) => Some(d.min(y)),
        (d, y) => d.or(y),
    }
}

/// Remove dates, bare years and ongoing markers, leaving the descriptive text.
fn strip_dates(text: &str) -> String {
    let without_dates = DATE_PATTERN.replace_all(text, |caps: &regex::Captures| {
        if normalize(&caps[0]).is_some() {
            String::new()
        } else {
            caps[0].to_string()
        }
    });
    let without_years = YEAR_OR_ONGOING.replace_all(&without_dates, "");
    let collapsed = without_years.split_whitespace().collect::<Vec<_>>().join(" ");
    trim_separators(&collapsed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> YearMonth {
        YearMonth::new(2024, 6).unwrap()
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_header_with_separator_and_present() {
        let entry = parse_header("Acme Corp - Backend Engineer (Jan 2020 - Present)", today());
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.title, "Backend Engineer");
        assert_eq!(entry.start_date().unwrap().to_string(), "2020-01");
        assert_eq!(entry.end_date(), Some(&CanonicalMonth::Present));
        assert_eq!(entry.months(), 53);
    }

    #[test]
    fn test_header_with_two_dates() {
        let entry = parse_header("Globex - Data Analyst, March 2018 - 12/2019", today());
        assert_eq!(entry.company, "Globex");
        assert_eq!(entry.title, "Data Analyst");
        assert_eq!(entry.start_date().unwrap().to_string(), "2018-03");
        assert_eq!(entry.end_date().unwrap().to_string(), "2019-12");
        assert_eq!(entry.months(), 21);
    }

    #[test]
    fn test_header_without_separator_is_title_only() {
        let entry = parse_header("Software Engineer at Initech Jan 2019 – Dec 2020", today());
        assert_eq!(entry.company, "");
        assert_eq!(entry.title, "Software Engineer at Initech");
        assert_eq!(entry.months(), 23);
    }

    #[test]
    fn test_header_with_year_only_range() {
        let entry = parse_header("Umbrella - Platform Engineer 2019 - 2021", today());
        assert_eq!(entry.company, "Umbrella");
        assert_eq!(entry.title, "Platform Engineer");
        assert_eq!(entry.start_date(), None);
        assert_eq!(entry.months(), 0);
    }

    #[test]
    fn test_single_date_without_present_leaves_end_open() {
        let entry = parse_header("Hooli - SRE (May 2021)", today());
        assert_eq!(entry.start_date().unwrap().to_string(), "2021-05");
        assert_eq!(entry.end_date(), None);
        assert_eq!(entry.months(), 0);
    }

    #[test]
    fn test_entries_and_bullets() {
        let block = lines(
            "• orphan bullet before any job\n\
             Acme Corp - Backend Engineer (Jan 2020 - Present)\n\
             • Built APIs\n\
             - Led on-call rotation\n\
             Some stray paragraph text\n\
             Globex - Intern (Jun 2019 - Aug 2019)\n\
             * Wrote ETL jobs\n\
             •",
        );
        let entries = extract(&block, today());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bullets, vec!["Built APIs", "Led on-call rotation"]);
        assert_eq!(entries[1].company, "Globex");
        assert_eq!(entries[1].bullets, vec!["Wrote ETL jobs"]);
        assert_eq!(entries[1].months(), 2);
    }

    #[test]
    fn test_bullet_with_year_is_not_a_header() {
        let block = lines("Acme - Dev (Jan 2020 - Feb 2021)\n• Migrated 2000 services in 2020");
        let entries = extract(&block, today());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bullets.len(), 1);
    }

    #[test]
    fn test_empty_block() {
        assert!(extract(&[], today()).is_empty());
    }
}
