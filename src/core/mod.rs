// Core algorithm exports
pub mod engine;
pub mod factors;
pub mod ordinal;
pub mod text;

pub use engine::{MatchEngine, DEFAULT_MATCH_THRESHOLD};
pub use factors::{
    education_contribution, experience_contribution, industry_contribution,
    job_title_contribution, job_type_contribution, skills_contribution,
    work_arrangement_contribution,
};
pub use ordinal::{DegreeLevel, ExperienceLevel};
