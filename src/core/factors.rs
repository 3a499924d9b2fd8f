use crate::core::ordinal::{degree_not_required, DegreeLevel, ExperienceLevel};
use crate::core::text::{eq_ignore_case, fuzzy_match, normalize, shares_word};
use crate::models::{CandidateProfile, JobPosting};

/// The seven factor scorers
///
/// Each scorer compares one dimension of the candidate against the posting
/// and returns its weighted contribution, so the engine only sums seven
/// numbers. Scorers never fail: absent or empty fields yield a zero (or the
/// documented default) contribution for that factor.

/// Skills factor: fraction of required skills the candidate covers
///
/// A required skill is covered when some candidate skill equals it, contains
/// it, or is contained by it.
pub fn skills_contribution(profile: &CandidateProfile, posting: &JobPosting, weight: f64) -> f64 {
    if posting.required_skills.is_empty() || profile.skills.is_empty() {
        return 0.0;
    }

    let matched = posting
        .required_skills
        .iter()
        .filter(|required| {
            profile
                .skills
                .iter()
                .any(|skill| fuzzy_match(&skill.name, &required.name))
        })
        .count();

    weight * matched as f64 / posting.required_skills.len() as f64
}

/// Education factor: degree-level sub-score plus field-of-study sub-score
///
/// Only evaluated when the candidate has at least one education entry. A
/// posting whose degree requirement is "Not Required" (or absent or
/// unrecognized) grants the full degree sub-score; a posting listing no
/// required fields grants the full field sub-score.
pub fn education_contribution(profile: &CandidateProfile, posting: &JobPosting, weight: f64) -> f64 {
    if profile.education.is_empty() {
        return 0.0;
    }

    let candidate_highest = profile
        .education
        .iter()
        .filter_map(|entry| entry.degree.as_deref().and_then(DegreeLevel::parse))
        .max();

    let required = posting
        .education_required
        .degree
        .as_deref()
        .filter(|raw| !degree_not_required(raw))
        .and_then(DegreeLevel::parse);

    let degree_score: f64 = match required {
        None => 0.5,
        Some(required) => match candidate_highest {
            Some(highest) if highest.rank() >= required.rank() => 0.5,
            Some(_) => 0.2,
            None => 0.0,
        },
    };

    let required_fields = &posting.education_required.field_of_study;
    let field_score: f64 = if required_fields.is_empty() {
        0.5
    } else {
        let any_match = required_fields.iter().any(|required| {
            profile.education.iter().any(|entry| {
                entry
                    .field_of_study
                    .as_deref()
                    .map(|field| fuzzy_match(field, required))
                    .unwrap_or(false)
            })
        });
        if any_match {
            0.5
        } else {
            0.0
        }
    };

    weight * (degree_score + field_score).min(1.0)
}

/// Industry factor: binary match between desired industries and the posting
pub fn industry_contribution(profile: &CandidateProfile, posting: &JobPosting, weight: f64) -> f64 {
    let industry = match posting.industry.as_deref() {
        Some(value) if !normalize(value).is_empty() => value,
        _ => return 0.0,
    };

    let matched = profile
        .job_preferences
        .desired_industries
        .iter()
        .any(|desired| fuzzy_match(desired, industry));

    if matched {
        weight
    } else {
        0.0
    }
}

/// Job-title factor: desired titles get full credit, a matching professional
/// title gets 70% credit as a fallback
pub fn job_title_contribution(profile: &CandidateProfile, posting: &JobPosting, weight: f64) -> f64 {
    let title = &posting.job_title;

    let desired_match = profile
        .job_preferences
        .desired_job_titles
        .iter()
        .any(|desired| fuzzy_match(desired, title) || shares_word(desired, title));

    if desired_match {
        return weight;
    }

    let professional_match = profile
        .professional_title
        .as_deref()
        .map(|professional| fuzzy_match(professional, title))
        .unwrap_or(false);

    if professional_match {
        weight * 0.7
    } else {
        0.0
    }
}

/// Experience factor: level proximity (up to 0.6) plus years-in-range (up to 0.4)
pub fn experience_contribution(
    profile: &CandidateProfile,
    posting: &JobPosting,
    weight: f64,
) -> f64 {
    let candidate_level = profile
        .experience_level
        .as_deref()
        .and_then(ExperienceLevel::parse);
    let required_level = posting
        .experience_level
        .as_deref()
        .and_then(ExperienceLevel::parse);

    let level_score = match (candidate_level, required_level) {
        (Some(candidate), Some(required)) => match candidate.distance(required) {
            0 => 0.6,
            1 => 0.4,
            2 => 0.2,
            _ => 0.0,
        },
        _ => 0.0,
    };

    let years_score = match posting.years_of_experience_required {
        Some(range) => {
            let years = profile.years_of_experience;
            let min = range.min;
            let max = range.max.unwrap_or(999);
            if years >= min && years <= max {
                0.4
            } else if (years < min && min - years <= 1) || (years > max && years - max <= 1) {
                0.2
            } else {
                0.0
            }
        }
        None => 0.0,
    };

    weight * (level_score + years_score)
}

/// Work-arrangement factor: full credit on a preference hit, half credit when
/// a hybrid posting meets a remote or on-site preference
pub fn work_arrangement_contribution(
    profile: &CandidateProfile,
    posting: &JobPosting,
    weight: f64,
) -> f64 {
    let arrangement = match posting.work_arrangement.as_deref() {
        Some(value) if !normalize(value).is_empty() => value,
        _ => return 0.0,
    };

    let preferences = &profile.job_preferences.work_arrangement;
    if preferences
        .iter()
        .any(|preferred| eq_ignore_case(preferred, arrangement))
    {
        return weight;
    }

    let hybrid = normalize(arrangement) == "hybrid";
    let prefers_fixed = preferences.iter().any(|preferred| {
        let norm = normalize(preferred);
        norm == "remote" || norm == "on-site"
    });

    if hybrid && prefers_fixed {
        weight * 0.5
    } else {
        0.0
    }
}

/// Job-type factor: binary match against the candidate's desired job types
pub fn job_type_contribution(profile: &CandidateProfile, posting: &JobPosting, weight: f64) -> f64 {
    let job_type = match posting.job_type.as_deref() {
        Some(value) if !normalize(value).is_empty() => value,
        _ => return 0.0,
    };

    let matched = profile
        .job_preferences
        .job_types
        .iter()
        .any(|desired| eq_ignore_case(desired, job_type));

    if matched {
        weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, EducationRequirement, JobPreferences, Skill, YearsRange};

    fn profile_with_skills(names: &[&str]) -> CandidateProfile {
        CandidateProfile {
            skills: names.iter().map(|name| Skill::named(name)).collect(),
            ..Default::default()
        }
    }

    fn posting_with_skills(names: &[&str]) -> JobPosting {
        JobPosting {
            required_skills: names.iter().map(|name| Skill::named(name)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_skills_partial_coverage() {
        let profile = profile_with_skills(&["JavaScript", "React"]);
        let posting = posting_with_skills(&["JavaScript", "React", "Node.js"]);

        let contribution = skills_contribution(&profile, &posting, 25.0);
        assert!((contribution - 25.0 * 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_skills_substring_counts_as_match() {
        let profile = profile_with_skills(&["React Native"]);
        let posting = posting_with_skills(&["react"]);

        assert_eq!(skills_contribution(&profile, &posting, 25.0), 25.0);
    }

    #[test]
    fn test_skills_zero_when_either_side_empty() {
        let posting = posting_with_skills(&["Rust"]);
        assert_eq!(
            skills_contribution(&CandidateProfile::default(), &posting, 25.0),
            0.0
        );

        let profile = profile_with_skills(&["Rust"]);
        assert_eq!(
            skills_contribution(&profile, &JobPosting::default(), 25.0),
            0.0
        );
    }

    fn educated_profile(degree: &str, field: &str) -> CandidateProfile {
        CandidateProfile {
            education: vec![EducationEntry {
                degree: Some(degree.to_string()),
                field_of_study: Some(field.to_string()),
            }],
            ..Default::default()
        }
    }

    fn posting_requiring(degree: Option<&str>, fields: &[&str]) -> JobPosting {
        JobPosting {
            education_required: EducationRequirement {
                degree: degree.map(str::to_string),
                field_of_study: fields.iter().map(|f| f.to_string()).collect(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_education_zero_without_entries() {
        let posting = posting_requiring(Some("Not Required"), &[]);
        assert_eq!(
            education_contribution(&CandidateProfile::default(), &posting, 20.0),
            0.0
        );
    }

    #[test]
    fn test_education_not_required_with_field_match() {
        let profile = educated_profile("Bachelor's", "Computer Science");
        let posting = posting_requiring(Some("Not Required"), &["Computer Science"]);

        assert_eq!(education_contribution(&profile, &posting, 20.0), 20.0);
    }

    #[test]
    fn test_education_lower_degree_gets_partial_credit() {
        let profile = educated_profile("Associate", "Business");
        let posting = posting_requiring(Some("Master's"), &[]);

        // 0.2 for a recognized but insufficient degree, 0.5 field default
        assert!((education_contribution(&profile, &posting, 20.0) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_education_unrecognized_candidate_degree() {
        let profile = educated_profile("Bootcamp Certificate", "Web Development");
        let posting = posting_requiring(Some("Bachelor's"), &[]);

        // 0.0 degree sub-score, 0.5 field default
        assert!((education_contribution(&profile, &posting, 20.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_education_sub_scores_sum_and_cap_at_weight() {
        let profile = educated_profile("PhD", "Computer Science");
        let posting = posting_requiring(Some("Bachelor's"), &["Computer Science"]);

        let contribution = education_contribution(&profile, &posting, 20.0);
        assert_eq!(contribution, 20.0);
        assert!(contribution <= 20.0);
    }

    #[test]
    fn test_education_field_mismatch_scores_degree_only() {
        let profile = educated_profile("Master's", "History");
        let posting = posting_requiring(Some("Bachelor's"), &["Computer Science"]);

        assert!((education_contribution(&profile, &posting, 20.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_industry_requires_both_sides() {
        let mut profile = CandidateProfile::default();
        profile.job_preferences.desired_industries = vec!["Fintech".to_string()];

        let mut posting = JobPosting::default();
        assert_eq!(industry_contribution(&profile, &posting, 15.0), 0.0);

        posting.industry = Some("Financial Technology / Fintech".to_string());
        assert_eq!(industry_contribution(&profile, &posting, 15.0), 15.0);

        profile.job_preferences.desired_industries.clear();
        assert_eq!(industry_contribution(&profile, &posting, 15.0), 0.0);
    }

    #[test]
    fn test_job_title_desired_match() {
        let profile = CandidateProfile {
            job_preferences: JobPreferences {
                desired_job_titles: vec!["Frontend Developer".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let posting = JobPosting {
            job_title: "Frontend Developer".to_string(),
            ..Default::default()
        };

        assert_eq!(job_title_contribution(&profile, &posting, 15.0), 15.0);
    }

    #[test]
    fn test_job_title_shared_word_match() {
        let profile = CandidateProfile {
            job_preferences: JobPreferences {
                desired_job_titles: vec!["Backend Developer".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let posting = JobPosting {
            job_title: "Senior Developer".to_string(),
            ..Default::default()
        };

        assert_eq!(job_title_contribution(&profile, &posting, 15.0), 15.0);
    }

    #[test]
    fn test_job_title_professional_fallback() {
        let profile = CandidateProfile {
            professional_title: Some("Data Engineer".to_string()),
            ..Default::default()
        };
        let posting = JobPosting {
            job_title: "Senior Data Engineer".to_string(),
            ..Default::default()
        };

        assert!((job_title_contribution(&profile, &posting, 15.0) - 10.5).abs() < 1e-9);
    }

    fn experienced_profile(level: &str, years: u32) -> CandidateProfile {
        CandidateProfile {
            experience_level: Some(level.to_string()),
            years_of_experience: years,
            ..Default::default()
        }
    }

    fn experience_posting(level: &str, min: u32, max: Option<u32>) -> JobPosting {
        JobPosting {
            experience_level: Some(level.to_string()),
            years_of_experience_required: Some(YearsRange { min, max }),
            ..Default::default()
        }
    }

    #[test]
    fn test_experience_exact_level_and_years_in_range() {
        let profile = experienced_profile("Mid Level", 3);
        let posting = experience_posting("Mid Level", 2, Some(5));

        assert!((experience_contribution(&profile, &posting, 10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_one_step_apart() {
        let profile = experienced_profile("Senior", 10);
        let posting = experience_posting("Mid Level", 2, Some(5));

        // 0.4 for the adjacent level, years 10 is far above max 5
        assert!((experience_contribution(&profile, &posting, 10.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_years_near_bound() {
        let profile = experienced_profile("Entry", 1);
        let posting = experience_posting("Entry", 2, Some(5));

        // exact level 0.6 + one year below min 0.2
        assert!((experience_contribution(&profile, &posting, 10.0) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_open_ended_max() {
        let profile = experienced_profile("Executive", 30);
        let posting = experience_posting("Executive", 10, None);

        assert!((experience_contribution(&profile, &posting, 10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_missing_range_scores_level_only() {
        let profile = experienced_profile("Mid Level", 3);
        let posting = JobPosting {
            experience_level: Some("Mid Level".to_string()),
            ..Default::default()
        };

        assert!((experience_contribution(&profile, &posting, 10.0) - 6.0).abs() < 1e-9);
    }

    fn arrangement_profile(preferred: &[&str]) -> CandidateProfile {
        CandidateProfile {
            job_preferences: JobPreferences {
                work_arrangement: preferred.iter().map(|p| p.to_string()).collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_work_arrangement_exact_preference() {
        let profile = arrangement_profile(&["Remote"]);
        let posting = JobPosting {
            work_arrangement: Some("remote".to_string()),
            ..Default::default()
        };

        assert_eq!(work_arrangement_contribution(&profile, &posting, 10.0), 10.0);
    }

    #[test]
    fn test_work_arrangement_hybrid_half_credit() {
        let posting = JobPosting {
            work_arrangement: Some("Hybrid".to_string()),
            ..Default::default()
        };

        let remote = arrangement_profile(&["Remote"]);
        assert_eq!(work_arrangement_contribution(&remote, &posting, 10.0), 5.0);

        let onsite = arrangement_profile(&["On-site"]);
        assert_eq!(work_arrangement_contribution(&onsite, &posting, 10.0), 5.0);

        let no_preference = arrangement_profile(&[]);
        assert_eq!(work_arrangement_contribution(&no_preference, &posting, 10.0), 0.0);
    }

    #[test]
    fn test_job_type_binary() {
        let profile = CandidateProfile {
            job_preferences: JobPreferences {
                job_types: vec!["Full-time".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let full_time = JobPosting {
            job_type: Some("Full-time".to_string()),
            ..Default::default()
        };
        assert_eq!(job_type_contribution(&profile, &full_time, 5.0), 5.0);

        let contract = JobPosting {
            job_type: Some("Contract".to_string()),
            ..Default::default()
        };
        assert_eq!(job_type_contribution(&profile, &contract, 5.0), 0.0);
    }
}
