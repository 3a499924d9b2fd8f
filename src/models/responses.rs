use serde::{Deserialize, Serialize};
use crate::models::domain::RankedMatch;

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalPostings")]
    pub total_postings: usize,
    pub threshold: u8,
}

/// Response for the skill-gap endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapResponse {
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
