pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::assistant::resume::UPLOAD_BODY_LIMIT;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/ai", assistant_routes())
        .with_state(state)
}

fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/analyze-resume",
            post(handlers::handle_analyze_resume).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/career-path", post(handlers::handle_career_path))
        .route(
            "/suggest-connections",
            post(handlers::handle_suggest_connections),
        )
        .route("/job-matcher", post(handlers::handle_job_matcher))
        .route(
            "/voice-profile-builder",
            post(handlers::handle_voice_profile_builder),
        )
        .route(
            "/certification-recommender",
            post(handlers::handle_certification_recommender),
        )
        .route(
            "/job-role-simulator",
            post(handlers::handle_job_role_simulator),
        )
        .route("/voice-command", post(handlers::handle_voice_command))
        .route("/career-mentor", post(handlers::handle_career_mentor))
}
