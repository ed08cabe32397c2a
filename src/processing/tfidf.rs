//! TF-IDF vectors and cosine similarity between two documents

use crate::error::{Result, ResumeAtsError};
use ndarray::Array1;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Words of two or more word characters.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid word token regex"));

/// Vectorizer fitted on a small corpus of documents.
///
/// Term weights are raw counts times a smoothed inverse document frequency,
/// `ln((1 + n) / (1 + df)) + 1`, and each vector is L2-normalized so the
/// cosine similarity of two documents is their dot product.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
}

impl TfIdfVectorizer {
    pub fn fit(documents: &[&str]) -> Result<Self> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

        let mut vocabulary = BTreeMap::new();
        for token in tokenized.iter().flatten() {
            let next = vocabulary.len();
            vocabulary.entry(token.clone()).or_insert(next);
        }

        if vocabulary.is_empty() {
            return Err(ResumeAtsError::Scoring("empty vocabulary".to_string()));
        }

        let mut document_frequency = Array1::<f64>::zeros(vocabulary.len());
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                document_frequency[vocabulary[token]] += 1.0;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency.mapv(|df| ((1.0 + n) / (1.0 + df)).ln() + 1.0);

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// L2-normalized TF-IDF vector; tokens outside the vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Array1<f64> {
        let mut counts = Array1::<f64>::zeros(self.vocabulary.len());
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }

        let weighted = counts * &self.idf;
        let norm = weighted.dot(&weighted).sqrt();
        if norm == 0.0 {
            weighted
        } else {
            weighted / norm
        }
    }
}

/// Cosine similarity of the TF-IDF vectors of two texts, in [0, 1].
///
/// Fails with a scoring error when neither text has a token to build a
/// vocabulary from.
pub fn cosine_similarity(a: &str, b: &str) -> Result<f64> {
    let vectorizer = TfIdfVectorizer::fit(&[a, b])?;
    let similarity = vectorizer.transform(a).dot(&vectorizer.transform(b));
    Ok(similarity.clamp(0.0, 1.0))
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let text = "Rust services with Tokio and Postgres";
        let similarity = cosine_similarity(text, text).unwrap();
        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts() {
        assert_eq!(cosine_similarity("rust tokio", "python django").unwrap(), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let similarity = cosine_similarity("python aws react", "python aws kubernetes").unwrap();
        assert!(similarity > 0.0 && similarity < 1.0);
    }

    #[test]
    fn test_shared_terms_get_lower_idf() {
        let vectorizer = TfIdfVectorizer::fit(&["rust go", "rust java"]).unwrap();
        assert_eq!(vectorizer.vocabulary_len(), 3);
        let shared = vectorizer.idf[vectorizer.vocabulary["rust"]];
        let unique = vectorizer.idf[vectorizer.vocabulary["go"]];
        assert!((shared - 1.0).abs() < 1e-9);
        assert!(unique > shared);
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        assert!(matches!(cosine_similarity("", "a b c"), Err(ResumeAtsError::Scoring(_))));
        assert!(cosine_similarity("", "").is_err());
    }

    #[test]
    fn test_one_empty_side_scores_zero() {
        assert_eq!(cosine_similarity("", "kubernetes terraform").unwrap(), 0.0);
    }
}
