use crate::core::factors::{
    education_contribution, experience_contribution, industry_contribution,
    job_title_contribution, job_type_contribution, skills_contribution,
    work_arrangement_contribution,
};
use crate::core::text::normalize;
use crate::models::{CandidateProfile, JobPosting, MatchWeights, RankedMatch};

/// Minimum score a posting must reach to appear in ranked results
pub const DEFAULT_MATCH_THRESHOLD: u8 = 40;

/// Match scoring engine
///
/// Combines the seven factor contributions into a 0-100 percentage and ranks
/// posting collections against a candidate. Purely computational: no I/O, no
/// shared state, every result derived freshly from its two inputs.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: MatchWeights,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Score one posting against a candidate
    ///
    /// Sums the seven weighted contributions in factor order and rounds to
    /// the nearest integer. The weights always sum to 100, so the result
    /// needs no further normalization; a factor with no data simply
    /// contributes zero.
    pub fn compute_score(&self, profile: &CandidateProfile, posting: &JobPosting) -> u8 {
        let weights = &self.weights;

        let total = skills_contribution(profile, posting, weights.skills)
            + education_contribution(profile, posting, weights.education)
            + industry_contribution(profile, posting, weights.industry)
            + job_title_contribution(profile, posting, weights.job_title)
            + experience_contribution(profile, posting, weights.experience)
            + work_arrangement_contribution(profile, posting, weights.work_arrangement)
            + job_type_contribution(profile, posting, weights.job_type);

        total.clamp(0.0, 100.0).round() as u8
    }

    /// Rank a collection of postings for a candidate
    ///
    /// Scores every posting, keeps those at or above `threshold`, and returns
    /// them sorted by descending score. The sort is stable: postings with
    /// equal scores keep their input order. Empty input yields empty output.
    pub fn rank_matches(
        &self,
        profile: &CandidateProfile,
        postings: Vec<JobPosting>,
        threshold: u8,
    ) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = postings
            .into_iter()
            .filter_map(|posting| {
                let score = self.compute_score(profile, &posting);
                if score >= threshold {
                    Some(RankedMatch { posting, score })
                } else {
                    None
                }
            })
            .collect();

        // Vec::sort_by is stable, which is what keeps ties in input order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Required skill names the candidate does not have
    ///
    /// Used by the career-guidance feature. Unlike the skills factor, this
    /// compares lower-cased names by exact equality, not substring
    /// containment. Names are deduplicated, preserving posting order.
    pub fn skill_gap(&self, profile: &CandidateProfile, posting: &JobPosting) -> Vec<String> {
        let candidate_skills: Vec<String> = profile
            .skills
            .iter()
            .map(|skill| normalize(&skill.name))
            .collect();

        let mut missing: Vec<String> = Vec::new();
        for required in &posting.required_skills {
            let name = normalize(&required.name);
            if name.is_empty() {
                continue;
            }
            if !candidate_skills.contains(&name) && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
