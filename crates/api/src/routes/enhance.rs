//! Route definitions for prompt enhancement.

use axum::routing::post;
use axum::Router;

use crate::handlers::enhance;
use crate::state::AppState;

/// Enhancement routes mounted at `/` under `/api`.
///
/// ```text
/// POST /enhance    -> enhance
/// ```
pub fn enhance_router() -> Router<AppState> {
    Router::new().route("/enhance", post(enhance::enhance))
}
