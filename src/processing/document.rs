//! Resume document lines and section segmentation

use crate::processing::lines::text_len;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#+\s*)?(?:(?:work|professional|employment|technical|core|key|relevant|academic|personal|selected)\s+)?(experience|education|projects?|skills?)\s*:?$",
    )
    .expect("valid section header regex")
});

/// Extracted resume text split into trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    raw: String,
    lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionType {
    Experience,
    Education,
    Projects,
    Skills,
}

/// Where a section was found: its header line and the body lines after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub header: usize,
    pub body: Range<usize>,
}

/// Detected sections of a document. Absent sections are simply missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    spans: BTreeMap<SectionType, SectionSpan>,
}

impl ResumeDocument {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw: text.to_string(),
            lines,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Body lines of a section, or an empty slice when the section is absent.
    pub fn section_lines(&self, sections: &SectionMap, section: SectionType) -> &[String] {
        sections
            .get(section)
            .map(|span| &self.lines[span.body.clone()])
            .unwrap_or(&[])
    }

    /// A new document made of the given line range.
    pub fn sub_document(&self, range: Range<usize>) -> Self {
        let lines = self.lines[range].to_vec();
        Self {
            raw: lines.join("\n"),
            lines,
        }
    }
}

impl SectionType {
    pub const ALL: [SectionType; 4] = [
        SectionType::Experience,
        SectionType::Education,
        SectionType::Projects,
        SectionType::Skills,
    ];

    /// Classify a line as a section header. Lines at or above `max_len` never qualify.
    pub fn from_header(line: &str, max_len: usize) -> Option<Self> {
        let trimmed = line.trim();
        if text_len(trimmed) >= max_len {
            return None;
        }

        let lower = trimmed.to_lowercase();
        let caps = SECTION_HEADER.captures(&lower)?;
        match &caps[1] {
            "experience" => Some(SectionType::Experience),
            "education" => Some(SectionType::Education),
            "project" | "projects" => Some(SectionType::Projects),
            "skill" | "skills" => Some(SectionType::Skills),
            _ => None,
        }
    }

    /// The keyword used to spot a mention of this section inside a short line.
    pub fn keyword(&self) -> &'static str {
        match self {
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Projects => "project",
            SectionType::Skills => "skill",
        }
    }
}

impl SectionMap {
    pub fn get(&self, section: SectionType) -> Option<&SectionSpan> {
        self.spans.get(&section)
    }

    pub fn contains(&self, section: SectionType) -> bool {
        self.spans.contains_key(&section)
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionType, &SectionSpan)> {
        self.spans.iter().map(|(kind, span)| (*kind, span))
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Split document lines into labeled sections.
///
/// The first header of each kind starts its section; a section ends at the
/// nearest later start of another section, or at the end of the document.
pub fn segment(lines: &[String], header_max_len: usize) -> SectionMap {
    let mut starts: BTreeMap<SectionType, usize> = BTreeMap::new();
    for (idx, line) in lines.iter().enumerate() {
        if let Some(kind) = SectionType::from_header(line, header_max_len) {
            starts.entry(kind).or_insert(idx);
        }
    }

    let spans = starts
        .iter()
        .map(|(kind, &header)| {
            let end = starts
                .values()
                .copied()
                .filter(|&other| other > header)
                .min()
                .unwrap_or(lines.len());
            debug!("Detected {} section: header line {}, body {}..{}", kind, header, header + 1, end);
            (*kind, SectionSpan { header, body: header + 1..end })
        })
        .collect();

    SectionMap { spans }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionType::Experience => write!(f, "Experience"),
            SectionType::Education => write!(f, "Education"),
            SectionType::Projects => write!(f, "Projects"),
            SectionType::Skills => write!(f, "Skills"),
        }
    }
}
