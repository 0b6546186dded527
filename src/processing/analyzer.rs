//! Screening engine: runs extraction and matching for one or many resumes

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeRankerError};
use crate::processing::extractor::{
    ExtractedInfo, InfoExtractor, JobInfoExtractor, ResumeInfoExtractor,
};
use crate::processing::matcher::{match_resume, MatchBreakdown};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Validated job description text, passed explicitly into every scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription {
    text: String,
}

impl JobDescription {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ResumeRankerError::EmptyInput(
                "Job description text is empty".to_string(),
            ));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of scoring one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: f64,
    pub skills: Vec<String>,
    pub experience: u32,
    pub education: Vec<String>,
    /// Always empty; no title extraction exists yet
    pub job_titles: Vec<String>,
    pub breakdown: MatchBreakdown,
}

/// A named resume to be ranked.
#[derive(Debug, Clone)]
pub struct ResumeInput {
    pub name: String,
    pub text: String,
}

impl ResumeInput {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub name: String,
    pub report: ScoreReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedResume {
    pub name: String,
    pub error: String,
}

/// Scored resumes, best first, plus those that could not be scored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchRanking {
    pub ranked: Vec<RankedResume>,
    pub failed: Vec<FailedResume>,
}

pub struct ScreeningEngine {
    resume_extractor: ResumeInfoExtractor,
    job_extractor: JobInfoExtractor,
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl ScreeningEngine {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            resume_extractor: ResumeInfoExtractor::new(config),
            job_extractor: JobInfoExtractor::new(config),
        }
    }

    pub fn extract_resume(&self, text: &str) -> Result<ExtractedInfo> {
        self.resume_extractor.extract(text)
    }

    pub fn extract_job(&self, job: &JobDescription) -> Result<ExtractedInfo> {
        self.job_extractor.extract(job.text())
    }

    /// Run the full pipeline for one resume against one job description.
    pub fn score(&self, resume_text: &str, job: &JobDescription) -> Result<ScoreReport> {
        let job_info = self.extract_job(job)?;
        self.score_against(resume_text, &job_info)
    }

    fn score_against(&self, resume_text: &str, job_info: &ExtractedInfo) -> Result<ScoreReport> {
        let resume_info = self.extract_resume(resume_text)?;
        let result = match_resume(&resume_info, job_info);

        Ok(ScoreReport {
            score: result.score,
            skills: resume_info.skills().iter().cloned().collect(),
            experience: resume_info.experience_years(),
            education: resume_info.education().iter().cloned().collect(),
            job_titles: resume_info.job_titles().to_vec(),
            breakdown: result.breakdown,
        })
    }

    /// Score every resume independently; a failing resume is reported, never fatal.
    ///
    /// Fails only when the job description itself cannot be extracted.
    pub fn rank(&self, resumes: &[ResumeInput], job: &JobDescription) -> Result<BatchRanking> {
        let job_info = self.extract_job(job)?;
        let mut scored = Vec::with_capacity(resumes.len());
        let mut failed = Vec::new();

        for resume in resumes {
            match self.score_against(&resume.text, &job_info) {
                Ok(report) => scored.push(RankedResume {
                    name: resume.name.clone(),
                    report,
                }),
                Err(e) => {
                    warn!("Could not score {}: {}", resume.name, e);
                    failed.push(FailedResume {
                        name: resume.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!("Ranked {} resumes ({} failed)", scored.len(), failed.len());
        Ok(BatchRanking {
            ranked: order_by_score(scored),
            failed,
        })
    }
}

/// Descending by score; equal scores keep their input order.
pub fn order_by_score(mut ranked: Vec<RankedResume>) -> Vec<RankedResume> {
    ranked.sort_by(|a, b| b.report.score.total_cmp(&a.report.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Senior Python Developer\n\
                       We need python, django, docker and aws skills.\n\
                       5+ years experience, bachelor degree required.";

    fn report_with_score(score: f64) -> ScoreReport {
        ScoreReport {
            score,
            skills: Vec::new(),
            experience: 0,
            education: Vec::new(),
            job_titles: Vec::new(),
            breakdown: MatchBreakdown {
                skill_score: score / 100.0,
                experience_score: None,
                education_score: None,
                matched_skills: Vec::new(),
                missing_skills: Vec::new(),
            },
        }
    }

    fn ranked(name: &str, score: f64) -> RankedResume {
        RankedResume {
            name: name.to_string(),
            report: report_with_score(score),
        }
    }

    #[test]
    fn test_job_description_rejects_blank() {
        assert!(matches!(
            JobDescription::new("   \n"),
            Err(ResumeRankerError::EmptyInput(_))
        ));
        assert!(JobDescription::new("Rust engineer").is_ok());
    }

    #[test]
    fn test_order_by_score_descending() {
        let ordered = order_by_score(vec![ranked("a", 40.0), ranked("b", 90.0), ranked("c", 65.0)]);
        let scores: Vec<f64> = ordered.iter().map(|r| r.report.score).collect();

        assert_eq!(scores, vec![90.0, 65.0, 40.0]);
    }

    #[test]
    fn test_order_by_score_is_stable() {
        let ordered = order_by_score(vec![
            ranked("first", 50.0),
            ranked("top", 80.0),
            ranked("second", 50.0),
            ranked("third", 50.0),
        ]);
        let names: Vec<&str> = ordered.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_score_returns_resume_record() {
        let engine = ScreeningEngine::default();
        let job = JobDescription::new(JOB).unwrap();
        let report = engine
            .score(
                "Python and Django developer, Docker, AWS. 6 years of experience. Bachelor degree in Science.",
                &job,
            )
            .unwrap();

        assert!(report.skills.contains(&"django".to_string()));
        assert_eq!(report.experience, 6);
        assert!(report.education.contains(&"Bachelor".to_string()));
        assert_eq!(report.score, 100.0);
        assert!(report.job_titles.is_empty());
    }

    #[test]
    fn test_empty_resume_is_rejected() {
        let engine = ScreeningEngine::default();
        let job = JobDescription::new(JOB).unwrap();

        assert!(matches!(
            engine.score("  ", &job),
            Err(ResumeRankerError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_rank_isolates_failures() {
        let engine = ScreeningEngine::default();
        let job = JobDescription::new(JOB).unwrap();
        let resumes = vec![
            ResumeInput::new("weak.txt", "Graphic designer, Photoshop and Illustrator"),
            ResumeInput::new("blank.txt", ""),
            ResumeInput::new("strong.txt", "Python, Django, Docker and AWS engineer. 8 years of experience. Bachelor degree."),
            ResumeInput::new("stopwords.txt", "the of and"),
        ];

        let ranking = engine.rank(&resumes, &job).unwrap();

        let names: Vec<&str> = ranking.ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["strong.txt", "weak.txt"]);
        assert!(ranking.ranked[0].report.score > ranking.ranked[1].report.score);

        let failed: Vec<&str> = ranking.failed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed, vec!["blank.txt", "stopwords.txt"]);
    }

    #[test]
    fn test_rank_with_unusable_job_fails_up_front() {
        // a job of only stop words passes the blank check but has no vocabulary
        let engine = ScreeningEngine::default();
        let job = JobDescription::new("the and of").unwrap();

        assert!(engine.rank(&[ResumeInput::new("a", "python")], &job).is_err());
    }
}
