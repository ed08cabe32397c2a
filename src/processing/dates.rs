//! Month/year normalization and elapsed-month arithmetic

use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Month designator (name or 1-2 digits) followed by a four digit year.
pub(crate) static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?P<month>[a-z]{3,9}|\d{1,2})[\s.,/'\-]*(?P<year>\d{4})\b")
        .expect("valid date regex")
});

static ONGOING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:present|current|now)\b").expect("valid ongoing regex"));

static CANONICAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid canonical month regex"));

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is within 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The current calendar month in local time.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }
}

/// Canonical form of a resume date: a concrete month or the ongoing sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalMonth {
    Month(YearMonth),
    Present,
}

impl CanonicalMonth {
    /// Resolve to a concrete month, substituting `today` for the ongoing sentinel.
    pub fn resolve(&self, today: YearMonth) -> YearMonth {
        match self {
            CanonicalMonth::Month(ym) => *ym,
            CanonicalMonth::Present => today,
        }
    }
}

impl fmt::Display for CanonicalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalMonth::Month(ym) => write!(f, "{:04}-{:02}", ym.year, ym.month),
            CanonicalMonth::Present => write!(f, "Present"),
        }
    }
}

impl FromStr for CanonicalMonth {
    type Err = String;

    /// Accepts the canonical `YYYY-MM` / `Present` forms, then anything `normalize` understands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(caps) = CANONICAL_PATTERN.captures(trimmed) {
            let year = caps[1].parse::<i32>().map_err(|e| e.to_string())?;
            let month = caps[2].parse::<u32>().map_err(|e| e.to_string())?;
            return YearMonth::new(year, month)
                .map(CanonicalMonth::Month)
                .ok_or_else(|| format!("month out of range in '{}'", trimmed));
        }
        normalize(trimmed).ok_or_else(|| format!("unrecognized date '{}'", trimmed))
    }
}

impl Serialize for CanonicalMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional dates that turns unrecognized text into `None`.
pub(crate) mod lenient {
    use super::CanonicalMonth;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<CanonicalMonth>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|text| text.parse().ok()))
    }
}

/// Normalize a free-text month/year token such as "Aug 2024", "8/2024" or "Present".
///
/// Unrecognized input is a soft miss and yields `None`.
pub fn normalize(token: &str) -> Option<CanonicalMonth> {
    let token = token.trim();
    if ONGOING_PATTERN.is_match(token) {
        return Some(CanonicalMonth::Present);
    }

    let caps = DATE_PATTERN.captures(token)?;
    let year = caps["year"].parse::<i32>().ok()?;
    let month = month_number(&caps["month"])?;
    YearMonth::new(year, month).map(CanonicalMonth::Month)
}

fn month_number(raw: &str) -> Option<u32> {
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse::<u32>().ok().filter(|m| (1..=12).contains(m));
    }

    let prefix: String = raw.to_lowercase().chars().take(3).collect();
    MONTH_NAMES
        .iter()
        .position(|name| *name == prefix)
        .map(|idx| idx as u32 + 1)
}

/// Elapsed months between two dates, resolving "Present" to the current month.
pub fn months_between(start: Option<&CanonicalMonth>, end: Option<&CanonicalMonth>) -> u32 {
    months_between_at(start, end, YearMonth::current())
}

/// Elapsed months between two dates, resolving "Present" to `today`.
///
/// Missing dates yield 0 and reversed ranges clamp to 0.
pub fn months_between_at(
    start: Option<&CanonicalMonth>,
    end: Option<&CanonicalMonth>,
    today: YearMonth,
) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };

    let start = start.resolve(today);
    let end = end.resolve(today);
    (end.ordinal() - start.ordinal()).max(0) as u32
}
