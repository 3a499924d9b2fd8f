use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::MatchEngine;
use crate::models::{
    HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse, SkillGapRequest,
    SkillGapResponse,
};
use crate::routes::error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
    pub default_threshold: u8,
    pub max_postings: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match/score", web::post().to(score_posting))
        .route("/match/rank", web::post().to(rank_postings))
        .route("/match/skill-gap", web::post().to(skill_gap));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one posting against a candidate
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// {
///   "profile": { ... },
///   "posting": { ... }
/// }
/// ```
async fn score_posting(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|errors| ApiError::Validation(errors.to_string()))?;

    let score = state.engine.compute_score(&req.profile, &req.posting);

    tracing::debug!("Scored posting '{}': {}", req.posting.job_title, score);

    Ok(HttpResponse::Ok().json(ScoreResponse { score }))
}

/// Rank a collection of postings for a candidate
///
/// POST /api/v1/match/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { ... },
///   "postings": [ ... ],
///   "threshold": 40
/// }
/// ```
///
/// `threshold` is optional and falls back to the configured default.
async fn rank_postings(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|errors| ApiError::Validation(errors.to_string()))?;

    if req.postings.len() > state.max_postings {
        return Err(ApiError::TooManyPostings {
            count: req.postings.len(),
            limit: state.max_postings,
        });
    }

    let req = req.into_inner();
    let threshold = req.threshold.unwrap_or(state.default_threshold);
    let total_postings = req.postings.len();

    let matches = state
        .engine
        .rank_matches(&req.profile, req.postings, threshold);

    tracing::info!(
        "Ranked {} postings, {} above threshold {}",
        total_postings,
        matches.len(),
        threshold
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        matches,
        total_postings,
        threshold,
    }))
}

/// List the required skills a candidate is missing
///
/// POST /api/v1/match/skill-gap
async fn skill_gap(
    state: web::Data<AppState>,
    req: web::Json<SkillGapRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|errors| ApiError::Validation(errors.to_string()))?;

    let missing_skills = state.engine.skill_gap(&req.profile, &req.posting);

    Ok(HttpResponse::Ok().json(SkillGapResponse { missing_skills }))
}
