//! Structured records extracted from resume and job description text

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeRankerError};
use crate::processing::dates::{SequentialPairEstimator, TimelineEstimator};
use crate::processing::education::{EducationExtractor, ScanMode};
use crate::processing::experience::{JobExperience, ResumeExperience};
use crate::processing::ner::{EntityRecognizer, RuleBasedRecognizer};
use crate::processing::skills::{is_catalog_skill, SkillExtractor};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// Skills, education and experience read from one block of text.
///
/// Skills are always members of the skill catalog; construction enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtractedInfo {
    skills: BTreeSet<String>,
    education: BTreeSet<String>,
    experience_years: u32,
    job_titles: Vec<String>,
}

impl ExtractedInfo {
    /// Build a record directly. Skills outside the catalog are dropped.
    pub fn new<S, E>(skills: S, education: E, experience_years: u32) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|skill| skill.as_ref().to_lowercase())
                .filter(|skill| is_catalog_skill(skill))
                .collect(),
            education: education.into_iter().map(Into::into).collect(),
            experience_years,
            job_titles: Vec::new(),
        }
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn education(&self) -> &BTreeSet<String> {
        &self.education
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Always empty; no title extraction exists yet
    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }
}

/// Common interface of the resume and job description extractors.
pub trait InfoExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedInfo>;
}

fn reject_blank(text: &str, what: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ResumeRankerError::EmptyInput(format!("{} text is empty", what)));
    }
    Ok(())
}

pub struct ResumeInfoExtractor {
    skills: SkillExtractor,
    education: EducationExtractor,
    experience: ResumeExperience,
    recognizer: Box<dyn EntityRecognizer>,
    timeline: Box<dyn TimelineEstimator>,
}

impl ResumeInfoExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            skills: SkillExtractor::new(config.resume_max_terms)
                .with_ngram_range(config.ngram_min, config.ngram_max),
            education: EducationExtractor::new(ScanMode::WholeText),
            experience: ResumeExperience::default(),
            recognizer: Box::new(RuleBasedRecognizer::new()),
            timeline: Box::new(SequentialPairEstimator),
        }
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_timeline(mut self, timeline: Box<dyn TimelineEstimator>) -> Self {
        self.timeline = timeline;
        self
    }
}

impl Default for ResumeInfoExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl InfoExtractor for ResumeInfoExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedInfo> {
        reject_blank(text, "Resume")?;

        let skills = self.skills.extract(text)?;
        debug!("Extracted resume skills: {:?}", skills);

        let education = self
            .education
            .extract_with_institutions(text, self.recognizer.as_ref());

        let experience_years =
            self.experience.years(text, self.recognizer.as_ref(), self.timeline.as_ref());
        debug!("Extracted resume experience: {} years", experience_years);

        Ok(ExtractedInfo {
            skills,
            education,
            experience_years,
            job_titles: Vec::new(),
        })
    }
}

pub struct JobInfoExtractor {
    skills: SkillExtractor,
    education: EducationExtractor,
    experience: JobExperience,
}

impl JobInfoExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            skills: SkillExtractor::new(config.job_max_terms)
                .with_ngram_range(config.ngram_min, config.ngram_max),
            education: EducationExtractor::new(ScanMode::PerLine),
            experience: JobExperience::default(),
        }
    }
}

impl Default for JobInfoExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl InfoExtractor for JobInfoExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedInfo> {
        reject_blank(text, "Job description")?;

        let skills = self.skills.extract(text)?;
        let experience_years = self.experience.years(text);
        let education = self.education.extract_credentials(text);

        debug!(
            "Extracted job requirements: skills={:?} experience={} education={:?}",
            skills, experience_years, education
        );

        Ok(ExtractedInfo {
            skills,
            education,
            experience_years,
            job_titles: Vec::new(),
        })
    }
}
