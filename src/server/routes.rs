//! Route definitions for the career coach API.

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::{ai, error::panic_response, health, placeholders, users};
use crate::app::{AppState, ServerSettings};

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.server);
    let debug = state.server.debug;

    Router::new()
        .route("/ping", get(health::ping))
        .route("/", get(health::root))
        .nest("/health", health_routes())
        .nest("/api/v1/users", user_routes())
        .nest("/api/v1/assessments", assessment_routes())
        .nest("/api/v1/recommendations", recommendation_routes())
        .nest("/api/v1/ai", ai_routes())
        .layer(CatchPanicLayer::custom(panic_response(debug)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_check))
        .route("/live", get(health::liveness_probe))
        .route("/ready", get(health::readiness_probe))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register_user))
        .route(
            "/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/skill-assessment", post(placeholders::create_skill_assessment))
        .route("/user/:user_id", get(placeholders::user_assessments))
        .route("/career-evaluation", post(placeholders::career_evaluation))
}

fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/career-path/:user_id",
            get(placeholders::career_path_recommendations),
        )
        .route(
            "/learning-path/:user_id",
            get(placeholders::learning_path_recommendations),
        )
        .route("/job-matches/:user_id", get(placeholders::job_matches))
}

fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/test", post(ai::test_llm))
        .route("/analyze-career", post(ai::analyze_career))
        .route("/interview-prep", post(ai::interview_prep))
        .route("/learning-path", post(ai::learning_path))
        .route("/status", get(ai::llm_status))
}

/// CORS with credentials. `*` mirrors the caller's origin, since browsers
/// reject a literal wildcard alongside credentials.
fn cors_layer(settings: &ServerSettings) -> CorsLayer {
    let origins = settings.origins();

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
