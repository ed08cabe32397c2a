//! Resume parsing and job matching

pub mod ats_matcher;
pub mod dates;
pub mod document;
pub mod extract;
pub mod lines;
pub mod resume;
pub mod stopwords;
pub mod synonyms;
pub mod text_processor;
pub mod tfidf;
