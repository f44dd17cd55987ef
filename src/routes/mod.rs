//! Router assembly.

mod common;
mod student;

pub use common::{common_routes, common_routes_with_ready};
pub use student::student_routes;

use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: operational routes at the root, the students resource under `/api`,
/// and the browser client from `config.static_dir` for every other path.
pub fn app(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", student_routes(state));
    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.body_limit)),
    )
}
