use crate::core::Matcher;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchProfile,
    ScorePairRequest, ScorePairResponse,
};
use crate::services::AppwriteClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub appwrite: Arc<AppwriteClient>,
    pub matcher: Matcher,
    pub candidate_pool_multiplier: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_pair));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find teammate matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    // Cap limit at 100 to prevent excessive queries
    let limit = req.limit.min(100) as usize;

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    // Fetch viewer profile
    let viewer_profile = match state.appwrite.get_profile(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch user profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Stats records are optional; a fetch failure degrades to scoring without them
    let viewer_hackathon = match state.appwrite.get_hackathon_stats(user_id).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!("Failed to fetch hackathon stats for {}: {}", user_id, e);
            None
        }
    };
    let viewer_github = match state.appwrite.get_github_stats(user_id).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!("Failed to fetch GitHub stats for {}: {}", user_id, e);
            None
        }
    };

    let viewer = MatchProfile {
        profile: viewer_profile,
        hackathon: viewer_hackathon,
        github: viewer_github,
    };

    // Over-fetch candidates so ranking has a pool to pick from
    let pool_size = limit * state.candidate_pool_multiplier;
    let candidate_profiles = match state
        .appwrite
        .query_candidates(user_id, &req.exclude_user_ids, pool_size)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query candidates for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to query candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Found {} candidates for {}", candidate_profiles.len(), user_id);

    // Batch-fetch candidate stats; failures degrade to empty maps
    let candidate_ids: Vec<String> = candidate_profiles.iter().map(|p| p.user_id.clone()).collect();

    let mut hackathon_stats = match state.appwrite.list_hackathon_stats(&candidate_ids).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!("Failed to batch-fetch hackathon stats: {}", e);
            Default::default()
        }
    };
    let mut github_stats = match state.appwrite.list_github_stats(&candidate_ids).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!("Failed to batch-fetch GitHub stats: {}", e);
            Default::default()
        }
    };

    let candidates: Vec<MatchProfile> = candidate_profiles
        .into_iter()
        .map(|profile| {
            let hackathon = hackathon_stats.remove(&profile.user_id);
            let github = github_stats.remove(&profile.user_id);
            MatchProfile {
                profile,
                hackathon,
                github,
            }
        })
        .collect();

    // Run the scoring algorithm
    let result = state.matcher.score_candidates(&viewer, candidates, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Score one explicit viewer/candidate pair
///
/// POST /api/v1/matches/score
///
/// Request body carries both profiles (with their stats records) inline, so
/// callers that already hold the data can score without backend round trips.
async fn score_pair(state: web::Data<AppState>, req: web::Json<ScorePairRequest>) -> impl Responder {
    let req = req.into_inner();
    let result = state.matcher.score_pair(&req.viewer, &req.candidate);

    HttpResponse::Ok().json(ScorePairResponse {
        viewer_id: req.viewer.profile.user_id,
        candidate_id: req.candidate.profile.user_id,
        result,
    })
}
