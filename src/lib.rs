//! Resume parsing and job-description matching library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeAtsError};
pub use processing::ats_matcher::{ATSMatcher, MatchResult};
pub use processing::resume::{ParsedResume, ResumeParser};
