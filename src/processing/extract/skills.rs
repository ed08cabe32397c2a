//! Skill list from the skills section

use crate::config::ParsingConfig;
use crate::processing::document::SectionType;
use crate::processing::lines::{contains_any, text_len};
use regex::Regex;
use std::sync::LazyLock;

static SKILL_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"â€¢|[,;|•·\n]").expect("valid skill delimiter regex"));

/// "Programming Languages:" style category label at the start of a line.
static CATEGORY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Z][A-Za-z0-9+#&/.\-]*(?:\s+[A-Za-z0-9+#&/.\-]+){0,3}\s*:\s*")
        .expect("valid category label regex")
});

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*%").expect("valid percentage regex"));

/// Fragments that mark a sentence rather than a skill.
const SENTENCE_MARKERS: [&str; 4] = [" by ", " for ", " and enabling", " using "];

pub fn extract(lines: &[String], config: &ParsingConfig) -> Vec<String> {
    let block: Vec<String> = lines
        .iter()
        .take(config.skills_max_lines)
        .take_while(|line| !mentions_other_section(line, config.skills_stop_line_len))
        .map(|line| CATEGORY_LABEL.replace(line, "").into_owned())
        .collect();

    // Lines run together: a trailing skill merges with the next line's first one.
    let joined = block.join(" ");
    SKILL_DELIMITER
        .split(&joined)
        .map(|fragment| fragment.trim().to_string())
        .filter(|skill| is_skill_token(skill, config))
        .collect()
}

/// A short line naming a different section ends the skills block.
fn mentions_other_section(line: &str, max_len: usize) -> bool {
    let others: Vec<&str> = SectionType::ALL
        .iter()
        .filter(|section| **section != SectionType::Skills)
        .map(SectionType::keyword)
        .collect();
    text_len(line) < max_len && contains_any(line, &others)
}

fn is_skill_token(skill: &str, config: &ParsingConfig) -> bool {
    let len = text_len(skill);
    if len < config.skill_min_len || len > config.skill_max_len {
        return false;
    }
    if PERCENTAGE.is_match(skill) {
        return false;
    }
    !contains_any(skill, &SENTENCE_MARKERS)
}
