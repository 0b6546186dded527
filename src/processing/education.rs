//! Education credential extraction

use crate::processing::ner::{EntityLabel, EntityRecognizer};
use aho_corasick::AhoCorasick;
use log::debug;
use std::collections::BTreeSet;

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.sc", "m.sc", "mba", "degree", "diploma",
];

/// How credential keywords are scanned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Substring search over the whole lowercased text
    WholeText,
    /// Substring search one line at a time
    PerLine,
}

pub struct EducationExtractor {
    keyword_matcher: AhoCorasick,
    scan_mode: ScanMode,
}

impl EducationExtractor {
    pub fn new(scan_mode: ScanMode) -> Self {
        let keyword_matcher = AhoCorasick::new(EDUCATION_KEYWORDS)
            .expect("Failed to build education keyword matcher");

        Self { keyword_matcher, scan_mode }
    }

    /// Credential keywords found in the text, capitalised (`"bachelor"` becomes `"Bachelor"`)
    pub fn extract_credentials(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let mut found = BTreeSet::new();

        match self.scan_mode {
            ScanMode::WholeText => self.scan(&lowered, &mut found),
            ScanMode::PerLine => {
                for line in lowered.split('\n') {
                    self.scan(line, &mut found);
                }
            }
        }

        found.into_iter().map(|index| capitalize(EDUCATION_KEYWORDS[index])).collect()
    }

    /// Credentials plus any organisation entity naming a university
    pub fn extract_with_institutions(
        &self,
        text: &str,
        recognizer: &dyn EntityRecognizer,
    ) -> BTreeSet<String> {
        let mut education: BTreeSet<String> = recognizer
            .entities_with_label(text, EntityLabel::Org)
            .into_iter()
            .filter(|entity| entity.text.to_lowercase().contains("university"))
            .map(|entity| entity.text)
            .collect();

        education.extend(self.extract_credentials(text));
        debug!("Extracted education: {:?}", education);
        education
    }

    fn scan(&self, haystack: &str, found: &mut BTreeSet<usize>) {
        for mat in self.keyword_matcher.find_overlapping_iter(haystack) {
            found.insert(mat.pattern().as_usize());
        }
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
