pub mod enhance;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /api/enhance    enhance an idea (always 200)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(enhance::enhance_router())
}
