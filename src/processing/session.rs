//! A screening session holding the current job description

use crate::error::{Result, ResumeRankerError};
use crate::processing::analyzer::{BatchRanking, JobDescription, ResumeInput, ScoreReport, ScreeningEngine};
use log::info;

/// One operator's screening state: the engine plus the most recently set job description.
pub struct ScreeningSession {
    engine: ScreeningEngine,
    job: Option<JobDescription>,
}

impl ScreeningSession {
    pub fn new(engine: ScreeningEngine) -> Self {
        Self { engine, job: None }
    }

    /// Replace the stored job description; blank text is rejected and leaves the old one in place.
    pub fn set_job_description(&mut self, text: impl Into<String>) -> Result<&JobDescription> {
        let job = JobDescription::new(text)?;
        info!("Job description updated ({} characters)", job.text().len());
        Ok(&*self.job.insert(job))
    }

    pub fn job_description(&self) -> Option<&JobDescription> {
        self.job.as_ref()
    }

    pub fn score_resume(&self, resume_text: &str) -> Result<ScoreReport> {
        let job = self.job.as_ref().ok_or(ResumeRankerError::JobDescriptionNotSet)?;
        self.engine.score(resume_text, job)
    }

    pub fn rank_resumes(&self, resumes: &[ResumeInput]) -> Result<BatchRanking> {
        let job = self.job.as_ref().ok_or(ResumeRankerError::JobDescriptionNotSet)?;
        self.engine.rank(resumes, job)
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new(ScreeningEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_requires_job_description() {
        let session = ScreeningSession::default();

        assert!(matches!(
            session.score_resume("Python developer"),
            Err(ResumeRankerError::JobDescriptionNotSet)
        ));
        assert!(matches!(
            session.rank_resumes(&[]),
            Err(ResumeRankerError::JobDescriptionNotSet)
        ));
    }

    #[test]
    fn test_blank_job_description_keeps_previous() {
        let mut session = ScreeningSession::default();
        session.set_job_description("Java developer").unwrap();

        assert!(session.set_job_description("  \t\n").is_err());
        assert_eq!(session.job_description().map(|j| j.text()), Some("Java developer"));
    }

    #[test]
    fn test_new_job_description_overwrites() {
        let mut session = ScreeningSession::default();
        session.set_job_description("Java developer").unwrap();
        session.set_job_description("Python developer").unwrap();

        let report = session.score_resume("Python scripting and automation").unwrap();
        assert_eq!(report.score, 100.0);

        let report = session.score_resume("Java services").unwrap();
        assert_eq!(report.score, 0.0);
    }
}
