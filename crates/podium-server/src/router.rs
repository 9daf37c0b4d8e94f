use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use podium_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all leaderboard endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::SUBMIT, post(handler::submit_handler))
        .route(endpoints::SCORES, get(handler::scores_handler))
        .route(endpoints::INDEX, get(handler::leaderboard_handler))
        .route(endpoints::LEADERBOARD, get(handler::leaderboard_handler))
        .fallback(handler::not_found_handler)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open CORS so browser game builds hosted anywhere can submit.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(86400))
}
