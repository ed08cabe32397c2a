//! Project entries from the projects section

use crate::processing::extract::EntryAccumulator;
use crate::processing::lines::{is_bullet, is_project_title, strip_bullet};
use crate::processing::resume::ProjectEntry;

/// Any non-bullet line longer than `title_min_len` opens a new project.
pub fn extract(lines: &[String], title_min_len: usize) -> Vec<ProjectEntry> {
    lines
        .iter()
        .fold(EntryAccumulator::default(), |acc, line| {
            if is_project_title(line, title_min_len) {
                acc.start(ProjectEntry {
                    title: line.clone(),
                    bullets: Vec::new(),
                })
            } else if is_bullet(line) && !strip_bullet(line).is_empty() {
                acc.update(|project: &mut ProjectEntry| project.bullets.push(strip_bullet(line).to_string()))
            } else {
                acc
            }
        })
        .finish()
}
