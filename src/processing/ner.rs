//! Named-entity recognition for dates and organisations

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Date,
    Org,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
}

/// Anything that can tag spans of text with entity labels.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;

    fn entities_with_label(&self, text: &str, label: EntityLabel) -> Vec<Entity> {
        self.recognize(text)
            .into_iter()
            .filter(|entity| entity.label == label)
            .collect()
    }
}

/// Regex gazetteer: calendar expressions and institution names.
pub struct RuleBasedRecognizer {
    date_regex: Regex,
    org_regex: Regex,
}

impl Default for RuleBasedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";
        const YEAR: &str = r"(?:19|20)\d{2}";

        // Alternatives are tried in order at each position, most specific first
        let date_pattern = format!(
            r"(?i)\b(?:{m}\.?(?:\s+\d{{1,2}}(?:st|nd|rd|th)?,?)?\s+{y}|{y}[/-](?:0?[1-9]|1[0-2])|(?:0?[1-9]|1[0-2])[/-]{y}|{y}|present)\b",
            m = MONTH,
            y = YEAR,
        );
        let date_regex = Regex::new(&date_pattern).expect("Invalid date regex");

        let org_regex = Regex::new(
            r"\b(?:[A-Z][A-Za-z&.'-]*[ \t]+){0,4}(?:University|College|Institute|Academy|School)\b(?:[ \t]+of[ \t]+(?:the[ \t]+)?[A-Z][A-Za-z&.'-]*(?:[ \t]+[A-Z][A-Za-z&.'-]*){0,3})?",
        )
        .expect("Invalid organisation regex");

        Self { date_regex, org_regex }
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let dates = self.date_regex.find_iter(text).map(|m| Entity {
            text: m.as_str().to_string(),
            label: EntityLabel::Date,
            start: m.start(),
        });
        let orgs = self.org_regex.find_iter(text).map(|m| Entity {
            text: m.as_str().trim().to_string(),
            label: EntityLabel::Org,
            start: m.start(),
        });

        let mut entities: Vec<Entity> = dates.chain(orgs).collect();
        entities.sort_by_key(|entity| entity.start);
        entities
    }
}
