pub mod status;

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// One catch-all route: the root path for any method, with a fallback so
/// every other path gets the same fixed response. No path discrimination,
/// no state.
pub fn build_router() -> Router {
    Router::new()
        .route("/", any(status::status))
        .fallback(status::status)
        .layer(TraceLayer::new_for_http())
}
