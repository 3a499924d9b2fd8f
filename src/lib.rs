//! HireLink Algo - Candidate-to-job match scoring service
//!
//! This library implements the match scoring engine used by the HireLink job
//! board: seven weighted factor scorers combined into a 0-100 compatibility
//! percentage, plus ranking and skill-gap operations over posting sets.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{MatchEngine, DEFAULT_MATCH_THRESHOLD};
pub use crate::models::{CandidateProfile, JobPosting, MatchWeights, RankedMatch, Skill};
