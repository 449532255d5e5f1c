//! HTTP adapters - REST API implementations.
//!
//! Route groups:
//! - `/api/numerology` - profile calculation and saved reports
//! - `/api/cards` - card reference data
//! - `/api/readings` - reading generation (JSON and SSE streaming)
//! - `/health` - liveness probe

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;

use crate::domain::foundation::UserId;
use crate::ports::{AIProvider, CardCatalog, ReportRepository};

pub mod cards;
pub mod error;
pub mod numerology;
pub mod readings;

pub use error::{ApiError, ErrorResponse};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub card_catalog: Arc<dyn CardCatalog>,
    pub report_repository: Arc<dyn ReportRepository>,
}

/// Builds the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/numerology", numerology::routes())
        .nest("/api/cards", cards::routes())
        .nest("/api/readings", readings::routes())
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Authenticated user context extracted from the request.
///
/// Identity verification happens upstream; this service trusts the opaque
/// user id forwarded in the `X-User-Id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}
