// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, EducationEntry, EducationRequirement, JobPosting, JobPreferences,
    MatchWeights, RankedMatch, Skill, YearsRange,
};
pub use requests::{RankRequest, ScoreRequest, SkillGapRequest};
pub use responses::{
    ErrorResponse, HealthResponse, RankResponse, ScoreResponse, SkillGapResponse,
};
