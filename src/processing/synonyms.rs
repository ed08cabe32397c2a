//! Domain synonym groups used for synonym-aware keyword overlap

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use log::warn;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

/// Canonical term and its aliases.
const DOMAIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("python", &["py", "python3", "python programming"]),
    ("java", &["java8", "j2ee"]),
    ("sql", &["mysql", "postgres", "structured query language"]),
    ("pytorch", &["torch", "deep learning framework"]),
    ("tensorflow", &["tf", "keras"]),
    ("react", &["reactjs", "react.js"]),
    ("fastapi", &["api development", "rest api"]),
    ("docker", &["container", "containerization"]),
    ("kubernetes", &["k8s", "container orchestration"]),
    ("aws", &["amazon web services", "ec2", "s3", "lambda"]),
    ("gcp", &["google cloud", "bigquery", "vertex ai"]),
    ("azure", &["microsoft azure", "azure ml"]),
    ("airflow", &["workflow orchestration", "etl pipeline"]),
    ("spark", &["pyspark", "big data processing"]),
    ("kafka", &["streaming", "pubsub", "real-time pipeline"]),
    ("machine learning", &["ml", "predictive modeling", "data modeling"]),
    ("deep learning", &["neural networks", "representation learning"]),
    ("nlp", &["natural language processing", "text mining"]),
    ("computer vision", &["image recognition", "object detection"]),
    ("data visualization", &["dashboard", "plotting", "charting"]),
    ("data analysis", &["exploratory data analysis", "eda"]),
    ("mlops", &["model deployment", "ci cd for ml", "ml lifecycle"]),
    ("communication", &["presentation", "public speaking", "writing"]),
    ("leadership", &["team management", "mentoring"]),
    ("cross functional", &["multidisciplinary", "interdisciplinary"]),
    ("gdpr", &["data privacy law"]),
    ("hipaa", &["health data compliance"]),
];

pub static SYNONYMS: LazyLock<SynonymTable> =
    LazyLock::new(|| SynonymTable::new(DOMAIN_SYNONYMS));

/// Groups of equivalent terms, each group containing its canonical term.
pub struct SynonymTable {
    groups: Vec<BTreeSet<String>>,
    index: HashMap<String, Vec<usize>>,
    terms: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl SynonymTable {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let groups: Vec<BTreeSet<String>> = entries
            .iter()
            .map(|(canonical, aliases)| {
                std::iter::once(*canonical)
                    .chain(aliases.iter().copied())
                    .map(|term| term.trim().to_lowercase())
                    .collect()
            })
            .collect();

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (id, group) in groups.iter().enumerate() {
            for term in group {
                index.entry(term.clone()).or_default().push(id);
            }
        }

        let mut terms: Vec<String> = index.keys().cloned().collect();
        terms.sort();

        let matcher = match AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&terms)
        {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                warn!("Synonym phrase matcher unavailable: {}", e);
                None
            }
        };

        Self {
            groups,
            index,
            terms,
            matcher,
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Every term sharing a group with `term`, including `term` itself when known.
    pub fn equivalents(&self, term: &str) -> BTreeSet<&str> {
        let key = term.trim().to_lowercase();
        self.index
            .get(&key)
            .into_iter()
            .flatten()
            .flat_map(|&id| self.groups[id].iter().map(String::as_str))
            .collect()
    }

    /// True when the terms are equal or share a synonym group.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a == b {
            return true;
        }
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(left), Some(right)) => left.iter().any(|id| right.contains(id)),
            _ => false,
        }
    }

    /// Known terms (single words and phrases) occurring in `text` on word boundaries.
    pub fn find_terms(&self, text: &str) -> HashSet<String> {
        let Some(matcher) = &self.matcher else {
            return HashSet::new();
        };

        matcher
            .find_iter(text)
            .filter(|m| on_word_boundary(text, m.start(), m.end()))
            .map(|m| self.terms[m.pattern().as_usize()].clone())
            .collect()
    }
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
