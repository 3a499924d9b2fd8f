use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score one posting against a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    pub profile: CandidateProfile,
    pub posting: JobPosting,
}

/// Request to rank a collection of postings for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub profile: CandidateProfile,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub postings: Vec<JobPosting>,
    /// Overrides the configured minimum score when present
    #[serde(default)]
    pub threshold: Option<u8>,
}

/// Request for the skills a candidate is missing for a posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillGapRequest {
    pub profile: CandidateProfile,
    pub posting: JobPosting,
}
