use super::{not_found, validation_failed, AppState};
use crate::core::SearchContext;
use crate::models::{
    BrowsingStartedResponse, NextCandidateRequest, NextCandidateResponse, ScoreRequest,
    ScoreResponse, StartBrowsingRequest,
};
use crate::services::SessionError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matches/score", web::post().to(score_candidate))
        .route("/browse/start", web::post().to(start_browsing))
        .route("/browse/next", web::post().to(next_candidate))
        .route("/browse/{user_id}", web::delete().to(end_browsing));
}

/// Score one candidate against the viewer
///
/// POST /api/v1/matches/score
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let score = state
        .matcher
        .score(&req.viewer, &req.candidate, req.viewer_location);

    tracing::debug!(
        "Score {} -> {}: {}",
        req.viewer.user_id,
        req.candidate.user_id,
        score
    );

    HttpResponse::Ok().json(ScoreResponse { score })
}

/// Rank candidates and open a browsing session
///
/// POST /api/v1/browse/start
///
/// Request body:
/// ```json
/// {
///   "viewer": { "userId": 1, "rideType": "snowboard", "skillLevel": "Средний" },
///   "viewerLocation": { "latitude": 55.75, "longitude": 37.61 },
///   "profiles": [],
///   "events": [],
///   "likedUserIds": [],
///   "blockedUserIds": [],
///   "filters": { "rideType": null, "skillLevel": null }
/// }
/// ```
async fn start_browsing(
    state: web::Data<AppState>,
    req: web::Json<StartBrowsingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let exclusions = req.exclusions();
    let context = SearchContext {
        viewer: &req.viewer,
        viewer_location: req.viewer_location,
        exclusions: &exclusions,
        filters: &req.filters,
    };

    let session = state.matcher.start_session(context, &req.profiles, &req.events);
    let total = session.total();
    let session_id = state.sessions.start(req.viewer.user_id, session).await;

    tracing::info!(
        "Browsing session {} for user {}: {} candidates",
        session_id,
        req.viewer.user_id,
        total
    );

    HttpResponse::Ok().json(BrowsingStartedResponse {
        session_id: session_id.to_string(),
        total,
    })
}

/// Next candidate in the user's session
///
/// POST /api/v1/browse/next
async fn next_candidate(
    state: web::Data<AppState>,
    req: web::Json<NextCandidateRequest>,
) -> impl Responder {
    match state.sessions.advance(req.user_id).await {
        Ok(step) => HttpResponse::Ok().json(NextCandidateResponse {
            candidate: step.candidate,
            remaining: step.remaining,
            exhausted: step.exhausted,
        }),
        Err(e @ SessionError::NotFound(_)) => not_found(e.to_string()),
    }
}

/// DELETE /api/v1/browse/{user_id}
async fn end_browsing(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let user_id = path.into_inner();

    if state.sessions.remove(user_id).await {
        tracing::debug!("Ended browsing session for user {}", user_id);
        HttpResponse::NoContent().finish()
    } else {
        not_found(SessionError::NotFound(user_id).to_string())
    }
}
