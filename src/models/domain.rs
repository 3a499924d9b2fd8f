use serde::{Deserialize, Serialize};

/// A single skill on a candidate profile or a posting's requirement list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<String>,
}

impl Skill {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            proficiency: None,
        }
    }
}

/// One education entry on a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Option<String>,
}

/// Candidate job-search preferences
///
/// Every list may be absent in stored profiles; absence means "no preference"
/// and never an error, so all fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(rename = "desiredJobTitles", default)]
    pub desired_job_titles: Vec<String>,
    #[serde(rename = "desiredIndustries", default)]
    pub desired_industries: Vec<String>,
    #[serde(rename = "jobTypes", default)]
    pub job_types: Vec<String>,
    #[serde(rename = "workArrangement", default)]
    pub work_arrangement: Vec<String>,
}

/// Candidate profile as materialized by the hosting application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: u32,
    #[serde(rename = "professionalTitle", default)]
    pub professional_title: Option<String>,
    #[serde(rename = "jobPreferences", default)]
    pub job_preferences: JobPreferences,
}

/// Education requirement block on a posting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRequirement {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Vec<String>,
}

/// Required years of experience, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearsRange {
    pub min: u32,
    #[serde(default)]
    pub max: Option<u32>,
}

/// Job posting as materialized by the hosting application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "jobTitle", default)]
    pub job_title: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<Skill>,
    #[serde(rename = "educationRequired", default)]
    pub education_required: EducationRequirement,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[serde(rename = "yearsOfExperienceRequired", default)]
    pub years_of_experience_required: Option<YearsRange>,
    #[serde(rename = "workArrangement", default)]
    pub work_arrangement: Option<String>,
    #[serde(rename = "jobType", default)]
    pub job_type: Option<String>,
}

/// One posting that cleared the ranking threshold, with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub posting: JobPosting,
    #[serde(rename = "matchScore")]
    pub score: u8,
}

/// Factor weights
///
/// These are fixed by product decision and always sum to 100: a factor with
/// no data to evaluate contributes zero rather than being dropped from the
/// denominator, so incomplete profiles score lower.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub skills: f64,
    pub education: f64,
    pub industry: f64,
    pub job_title: f64,
    pub experience: f64,
    pub work_arrangement: f64,
    pub job_type: f64,
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.skills
            + self.education
            + self.industry
            + self.job_title
            + self.experience
            + self.work_arrangement
            + self.job_type
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 25.0,
            education: 20.0,
            industry: 15.0,
            job_title: 15.0,
            experience: 10.0,
            work_arrangement: 10.0,
            job_type: 5.0,
        }
    }
}
