pub mod auth;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::jobs::handlers;
use crate::pages::{dashboard, landing};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(landing::home))
        .route("/health", get(health::health_handler))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/jobs/:job_id/edit", get(handlers::edit))
        .route("/dashboard/jobs/:job_id", post(handlers::update))
        .route("/dashboard/jobs/:job_id/delete", post(handlers::remove))
        .nest_service("/assets", assets)
        .layer(middleware::from_fn(auth::identify))
        .with_state(state)
}
