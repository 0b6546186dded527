//! Extraction and scoring pipeline

pub mod text_processor;
pub mod tfidf;
pub mod ner;
pub mod dates;
pub mod skills;
pub mod education;
pub mod experience;
pub mod extractor;
pub mod matcher;
pub mod analyzer;
pub mod session;

pub use analyzer::{BatchRanking, JobDescription, ResumeInput, ScoreReport, ScreeningEngine};
pub use extractor::{ExtractedInfo, InfoExtractor, JobInfoExtractor, ResumeInfoExtractor};
pub use session::ScreeningSession;
