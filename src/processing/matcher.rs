//! Resume-to-job matching and the blended match score

use crate::processing::extractor::ExtractedInfo;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Umbrella skills and the skills that imply them.
pub const SKILL_FAMILIES: &[(&str, &[&str])] = &[
    ("python", &["django", "flask", "fastapi"]),
    ("javascript", &["react", "angular", "node.js"]),
    ("machine learning", &["nlp", "deep learning", "tensorflow", "pytorch"]),
    ("cloud", &["aws", "azure", "gcp"]),
    ("database", &["mysql", "postgresql", "mongodb", "sql"]),
];

/// Credential synonyms; anything not listed maps to its lowercase self.
pub const EDUCATION_SYNONYMS: &[(&str, &str)] = &[("b.sc", "bachelor"), ("m.sc", "master")];

/// Component scores in [0, 1]; an axis is `None` when the job sets no requirement on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_score: f64,
    pub experience_score: Option<f64>,
    pub education_score: Option<f64>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage in [0, 100], rounded to two decimals
    pub score: f64,
    pub breakdown: MatchBreakdown,
}

/// Add each family's umbrella term to a set containing any of its members.
pub fn expand_skill_families(skills: &BTreeSet<String>) -> BTreeSet<String> {
    let mut expanded = skills.clone();
    for (umbrella, members) in SKILL_FAMILIES {
        if members.iter().any(|member| skills.contains(*member)) {
            expanded.insert(umbrella.to_string());
        }
    }
    expanded
}

pub fn normalize_education(education: &BTreeSet<String>) -> BTreeSet<String> {
    education
        .iter()
        .map(|credential| {
            let lowered = credential.to_lowercase();
            EDUCATION_SYNONYMS
                .iter()
                .find(|(synonym, _)| *synonym == lowered)
                .map(|(_, canonical)| canonical.to_string())
                .unwrap_or(lowered)
        })
        .collect()
}

/// Share of the job's set covered by the resume's set; 0 when the job set is empty.
fn coverage(resume: &BTreeSet<String>, job: &BTreeSet<String>) -> f64 {
    if job.is_empty() {
        return 0.0;
    }
    resume.intersection(job).count() as f64 / job.len() as f64
}

/// Two decimals, exact halves to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn match_resume(resume: &ExtractedInfo, job: &ExtractedInfo) -> MatchResult {
    let resume_skills = expand_skill_families(resume.skills());
    let job_skills = expand_skill_families(job.skills());
    let skill_score = coverage(&resume_skills, &job_skills);

    let job_education = normalize_education(job.education());
    let education_score = (!job_education.is_empty())
        .then(|| coverage(&normalize_education(resume.education()), &job_education));

    let job_years = job.experience_years();
    let experience_score = (job_years > 0)
        .then(|| (resume.experience_years() as f64 / job_years as f64).min(1.0));

    debug!(
        "Component scores: skills={:.3} experience={:?} education={:?}",
        skill_score, experience_score, education_score
    );

    let components: Vec<f64> = std::iter::once(skill_score)
        .chain(experience_score)
        .chain(education_score)
        .collect();

    let score = if components.is_empty() {
        0.0
    } else {
        round2(components.iter().sum::<f64>() * 100.0 / components.len() as f64)
    };
    info!("Resume match score: {:.2}%", score);

    MatchResult {
        score,
        breakdown: MatchBreakdown {
            skill_score,
            experience_score,
            education_score,
            matched_skills: job_skills.intersection(&resume_skills).cloned().collect(),
            missing_skills: job_skills.difference(&resume_skills).cloned().collect(),
        },
    }
}
