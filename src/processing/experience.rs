//! Years-of-experience estimation

use crate::processing::dates::TimelineEstimator;
use crate::processing::ner::{EntityLabel, EntityRecognizer};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;

/// Title keywords and the seniority they imply. Order matters: the first
/// entry found anywhere in the text wins.
pub const TITLE_SENIORITY: &[(&str, u32)] = &[
    ("intern", 0),
    ("junior", 1),
    ("entry-level", 1),
    ("associate", 2),
    ("mid-level", 3),
    ("software engineer", 3),
    ("data scientist", 3),
    ("senior", 5),
    ("lead", 7),
    ("principal", 8),
    ("director", 10),
];

/// Reads explicit "N years of experience" style statements.
pub struct ExplicitMentionSignal {
    pattern: Regex,
}

impl ExplicitMentionSignal {
    /// Requires the word "experience" after the year count.
    pub fn strict() -> Self {
        Self {
            pattern: Regex::new(r"(?i)([0-9]{1,2})\s*(\+?\s*years?|yrs?)\s*(of)?\s*experience")
                .expect("Invalid experience regex"),
        }
    }

    /// Any year count, with or without a following "experience".
    pub fn loose() -> Self {
        Self {
            pattern: Regex::new(r"(?i)([0-9]{1,2})\s*(\+?\s*years?|yrs?)")
                .expect("Invalid experience regex"),
        }
    }

    /// The numeral of the first match, or 0
    pub fn years(&self, text: &str) -> u32 {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}

/// Maps seniority words in a posting to an implied year count.
pub struct TitleSenioritySignal {
    matcher: AhoCorasick,
}

impl Default for TitleSenioritySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleSenioritySignal {
    pub fn new() -> Self {
        let titles: Vec<&str> = TITLE_SENIORITY.iter().map(|(title, _)| *title).collect();
        let matcher = AhoCorasick::new(titles).expect("Failed to build title matcher");
        Self { matcher }
    }

    /// Years for the earliest table entry present in the text, if any
    pub fn years(&self, text: &str) -> Option<u32> {
        let lowered = text.to_lowercase();
        self.matcher
            .find_overlapping_iter(&lowered)
            .map(|mat| mat.pattern().as_usize())
            .min()
            .map(|index| TITLE_SENIORITY[index].1)
    }
}

/// Resume experience: date ranges reconstructed from date entities, or an
/// explicit statement, whichever is larger.
pub struct ResumeExperience {
    stated: ExplicitMentionSignal,
}

impl Default for ResumeExperience {
    fn default() -> Self {
        Self {
            stated: ExplicitMentionSignal::strict(),
        }
    }
}

impl ResumeExperience {
    pub fn years(
        &self,
        text: &str,
        recognizer: &dyn EntityRecognizer,
        timeline: &dyn TimelineEstimator,
    ) -> u32 {
        let date_mentions: Vec<String> = recognizer
            .entities_with_label(text, EntityLabel::Date)
            .into_iter()
            .map(|entity| entity.text)
            .collect();

        let timeline_years = timeline.estimate_years(&date_mentions);
        let stated_years = self.stated.years(text);
        debug!(
            "Resume experience signals: timeline={} stated={} ({} date mentions)",
            timeline_years,
            stated_years,
            date_mentions.len()
        );

        timeline_years.max(stated_years)
    }
}

/// Job experience: an explicit year count, or the seniority implied by the title.
pub struct JobExperience {
    stated: ExplicitMentionSignal,
    titles: TitleSenioritySignal,
}

impl Default for JobExperience {
    fn default() -> Self {
        Self {
            stated: ExplicitMentionSignal::loose(),
            titles: TitleSenioritySignal::new(),
        }
    }
}

impl JobExperience {
    pub fn years(&self, text: &str) -> u32 {
        let stated_years = self.stated.years(text);
        let title_years = self.titles.years(text);
        debug!(
            "Job experience signals: stated={} title={:?}",
            stated_years, title_years
        );

        stated_years.max(title_years.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::dates::SequentialPairEstimator;
    use crate::processing::ner::RuleBasedRecognizer;

    fn resume_years(text: &str) -> u32 {
        ResumeExperience::default().years(text, &RuleBasedRecognizer::new(), &SequentialPairEstimator)
    }

    #[test]
    fn test_strict_mention_needs_experience() {
        let signal = ExplicitMentionSignal::strict();
        assert_eq!(signal.years("3 years of experience in Python"), 3);
        assert_eq!(signal.years("7 yrs experience"), 7);
        // the "+" form is only recognised in front of "years"
        assert_eq!(signal.years("7+ yrs experience"), 0);
        assert_eq!(signal.years("Led a team for 4 years"), 0);
    }

    #[test]
    fn test_loose_mention_first_match_wins() {
        let signal = ExplicitMentionSignal::loose();
        assert_eq!(signal.years("Company founded 12 years ago, needs 5+ years"), 12);
        assert_eq!(signal.years("No numbers here"), 0);
    }

    #[test]
    fn test_title_table_order() {
        let signal = TitleSenioritySignal::new();
        assert_eq!(signal.years("Lead engineer, senior level"), Some(5));
        assert_eq!(signal.years("Director of Engineering"), Some(10));
        assert_eq!(signal.years("Backend developer"), None);
        // "internal" contains "intern", which sits first in the table
        assert_eq!(signal.years("Senior developer for internal tools"), Some(0));
    }

    #[test]
    fn test_stated_years_without_dates() {
        assert_eq!(resume_years("Engineer with 3 years of experience in Python"), 3);
    }

    #[test]
    fn test_timeline_beats_smaller_statement() {
        let text = "Acme Corp, Software Engineer, Jan 2015 - Dec 2020\n2 years of experience with Rust";
        assert_eq!(resume_years(text), 6);
    }

    #[test]
    fn test_statement_beats_smaller_timeline() {
        let text = "Beta Ltd, 2019 - 2020\n10+ years experience overall";
        assert_eq!(resume_years(text), 10);
    }

    #[test]
    fn test_only_ascii_numerals_are_read() {
        let signal = ExplicitMentionSignal::strict();
        assert_eq!(signal.years("\u{663} years of experience, 4 years of experience"), 4);
        assert_eq!(ExplicitMentionSignal::loose().years("\u{665} years, then 2 years"), 2);
    }

    #[test]
    fn test_job_experience_combines_signals() {
        let job = JobExperience::default();
        let text = "Looking for a senior python developer, aws, 5+ years experience, bachelor degree required.";
        assert_eq!(job.years(text), 5);
        assert_eq!(job.years("Principal engineer, 3 years minimum"), 8);
        assert_eq!(job.years("Junior role, 4 yrs preferred"), 4);
        assert_eq!(job.years("Backend developer"), 0);
    }
}
