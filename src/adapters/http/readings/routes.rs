//! Axum router configuration for reading endpoints.

use axum::routing::post;
use axum::Router;

use super::super::AppState;
use super::handlers::{generate_reading, stream_reading};

/// Create the readings API router.
///
/// # Routes
///
/// - `POST /` - Generate a complete reading
/// - `POST /stream` - Generate a reading as server-sent events
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_reading))
        .route("/stream", post(stream_reading))
}
