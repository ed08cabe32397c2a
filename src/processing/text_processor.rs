//! Text processing and technical term extraction

use crate::processing::resume::SkillSet;
use crate::processing::stopwords::is_stop_word;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Letters, digits and the symbols that occur inside tech names (c++, c#, node.js).
static TERM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}+#.]+").expect("valid term token regex"));

/// Terms kept even though they are two characters or shorter.
const SHORT_TERMS: [&str; 5] = ["c", "r", "go", "c++", "c#"];

pub struct TextProcessor {
    extra_stop_words: HashSet<String>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            extra_stop_words: HashSet::new(),
        }
    }

    /// Extend the built-in stopword list, e.g. with company names from a posting.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Lower-case tokens with trailing periods removed.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = normalize_unicode(text).to_lowercase();

        TERM_TOKEN
            .find_iter(&normalized)
            .map(|m| m.as_str().trim_end_matches('.'))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The set of tokens that look like technical terms.
    pub fn extract_technical_terms(&self, text: &str) -> SkillSet {
        self.tokenize(text)
            .into_iter()
            .filter(|token| self.is_technical_term(token))
            .collect()
    }

    pub fn is_technical_term(&self, token: &str) -> bool {
        if is_stop_word(token) || self.extra_stop_words.contains(token) {
            return false;
        }
        if is_numeric(token) || !token.chars().any(char::is_alphanumeric) {
            return false;
        }
        token.chars().count() > 2 || SHORT_TERMS.contains(&token)
    }
}

/// Digits with optional separators, e.g. "2020", "3.5", "10+".
fn is_numeric(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | ','))
}

/// Map typographic quotes and dashes to their ASCII forms.
fn normalize_unicode(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str) -> Vec<String> {
        TextProcessor::new().extract_technical_terms(text).to_vec()
    }

    #[test]
    fn test_extract_technical_terms() {
        assert_eq!(
            terms("Experienced Python Engineer with AWS and React skills"),
            vec!["aws", "python", "react"]
        );
    }

    #[test]
    fn test_short_terms_survive() {
        let result = terms("We use C, R, Go, C++ and C# plus JS and an ML stack");
        for term in ["c", "r", "go", "c++", "c#"] {
            assert!(result.contains(&term.to_string()), "missing {}", term);
        }
        assert!(!result.contains(&"js".to_string()));
        assert!(!result.contains(&"ml".to_string()));
    }

    #[test]
    fn test_numbers_and_trailing_periods() {
        let result = terms("Shipped 2020 release 3.5 to 10+ regions using Node.js. Also Kubernetes.");
        assert!(result.contains(&"node.js".to_string()));
        assert!(result.contains(&"kubernetes".to_string()));
        assert!(!result.iter().any(|t| t.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '+')));
    }

    #[test]
    fn test_extra_stop_words() {
        let processor = TextProcessor::new().with_stop_words(["Acme"]);
        let result = processor.extract_technical_terms("Acme needs Terraform");
        assert_eq!(result.to_vec(), vec!["terraform"]);
    }

    #[test]
    fn test_tokenize_normalizes_dashes() {
        let processor = TextProcessor::new();
        assert_eq!(processor.tokenize("Rust\u{2014}Tokio"), vec!["rust", "tokio"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(terms("").is_empty());
        assert!(terms("the and of with").is_empty());
    }
}
