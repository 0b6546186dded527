//! Term-frequency / inverse-document-frequency weighting over a small corpus

use crate::error::{Result, ResumeRankerError};
use crate::processing::text_processor::TextProcessor;
use std::collections::{BTreeMap, HashMap};

pub struct TfidfVectorizer {
    processor: TextProcessor,
    max_features: Option<usize>,
    ngram_range: (usize, usize),
}

/// Fitted vocabulary with one weight row per document.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Selected terms, alphabetical
    pub feature_names: Vec<String>,
    /// `weights[doc][feature]`, L2-normalised per document
    pub weights: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
            max_features: None,
            ngram_range: (1, 1),
        }
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    pub fn fit_transform(&self, documents: &[&str]) -> Result<TfidfModel> {
        let (min_n, max_n) = self.ngram_range;

        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for gram in self.processor.ngrams(doc, min_n, max_n) {
                    *counts.entry(gram).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Corpus-wide frequency and document frequency per term
        let mut corpus_stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for counts in &term_counts {
            for (term, count) in counts {
                let entry = corpus_stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if corpus_stats.is_empty() {
            return Err(ResumeRankerError::Extraction(
                "empty vocabulary; the text contains only stop words or no words".to_string(),
            ));
        }

        // BTreeMap iteration is alphabetical, so the stable sort breaks ties alphabetically
        let mut ranked: Vec<(&str, (usize, usize))> = corpus_stats.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
        if let Some(limit) = self.max_features {
            ranked.truncate(limit);
        }
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(_, (_, df))| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let weights = term_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<f64> = ranked
                    .iter()
                    .zip(&idf)
                    .map(|((term, _), idf)| *counts.get(*term).unwrap_or(&0) as f64 * idf)
                    .collect();
                let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.iter_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        Ok(TfidfModel {
            feature_names: ranked.into_iter().map(|(term, _)| term.to_string()).collect(),
            weights,
        })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_document_keeps_most_frequent_terms() {
        let vectorizer = TfidfVectorizer::new().with_max_features(2);
        let model = vectorizer
            .fit_transform(&["python python python docker docker kubernetes"])
            .unwrap();

        assert_eq!(model.feature_names, vec!["docker", "python"]);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let vectorizer = TfidfVectorizer::new().with_max_features(2);
        let model = vectorizer.fit_transform(&["zeta alpha gamma beta"]).unwrap();

        assert_eq!(model.feature_names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_bigrams_included() {
        let vectorizer = TfidfVectorizer::new().with_ngram_range(1, 2);
        let model = vectorizer.fit_transform(&["deep learning engineer"]).unwrap();

        assert!(model.feature_names.contains(&"deep learning".to_string()));
        assert!(model.feature_names.contains(&"learning engineer".to_string()));
        assert_eq!(model.feature_names.len(), 5);
    }

    #[test]
    fn test_weights_are_normalised() {
        let vectorizer = TfidfVectorizer::new();
        let model = vectorizer.fit_transform(&["rust rust go", "go java"]).unwrap();

        for row in &model.weights {
            let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_vocabulary_fails() {
        let vectorizer = TfidfVectorizer::new();

        assert!(matches!(
            vectorizer.fit_transform(&[""]),
            Err(ResumeRankerError::Extraction(_))
        ));
        assert!(vectorizer.fit_transform(&["the and of a"]).is_err());
    }
}
