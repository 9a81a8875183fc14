use crate::adapters::http::handlers;
use crate::adapters::http::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub cors: bool,
    /// Directory served for any path the API does not handle.
    pub static_dir: Option<PathBuf>,
}

pub fn create_router(state: AppState, options: &RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/api", get(handlers::api_info))
        .route("/calculate", post(handlers::calculate))
        .route(
            "/convert",
            get(handlers::list_conversions).post(handlers::convert),
        )
        .route(
            "/memory",
            get(handlers::get_memory).post(handlers::update_memory),
        )
        .with_state(state);

    if let Some(dir) = &options.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    if options.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
