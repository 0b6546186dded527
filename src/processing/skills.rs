//! Skill extraction against the fixed skill catalog

use crate::error::Result;
use crate::processing::tfidf::TfidfVectorizer;
use log::debug;
use std::collections::BTreeSet;

/// The controlled vocabulary every extracted skill must belong to.
pub const SKILL_CATALOG: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#",
    // Web frameworks and libraries
    "react", "angular", "vue.js", "node.js", "express", "django", "flask", "spring boot",
    // Cloud and devops
    "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd", "devops",
    // Databases and data systems
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "hadoop", "spark",
    "big data", "sql",
    // AI and data science
    "machine learning", "deep learning", "nlp", "pytorch", "tensorflow", "scikit-learn",
    "data science",
    // Tools
    "git", "linux", "bash", "jenkins", "jira", "agile",
];

pub fn is_catalog_skill(term: &str) -> bool {
    let term = term.to_lowercase();
    SKILL_CATALOG.iter().any(|skill| *skill == term)
}

/// Picks the top weighted unigrams and bigrams and keeps those in the catalog.
pub struct SkillExtractor {
    max_terms: usize,
    ngram_range: (usize, usize),
}

impl SkillExtractor {
    pub fn new(max_terms: usize) -> Self {
        Self {
            max_terms,
            ngram_range: (1, 2),
        }
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    /// Fails when the text yields no terms at all; callers must reject blank text first.
    pub fn extract(&self, text: &str) -> Result<BTreeSet<String>> {
        let (min_n, max_n) = self.ngram_range;
        let model = TfidfVectorizer::new()
            .with_max_features(self.max_terms)
            .with_ngram_range(min_n, max_n)
            .fit_transform(&[text])?;

        debug!("Top weighted terms: {:?}", model.feature_names);

        Ok(model
            .feature_names
            .into_iter()
            .filter(|term| is_catalog_skill(term))
            .map(|term| term.to_lowercase())
            .collect())
    }
}
