//! Axum router configuration for card reference endpoints.

use axum::routing::get;
use axum::Router;

use super::super::AppState;
use super::handlers::{get_card, list_cards};

/// Create the cards API router.
///
/// # Routes
///
/// - `GET /` - Full reference deck
/// - `GET /:id` - One card by id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cards))
        .route("/:id", get(get_card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::cards::StaticCardCatalog;
    use crate::adapters::reports::InMemoryReportRepository;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            ai_provider: Arc::new(MockAIProvider::new()),
            card_catalog: Arc::new(StaticCardCatalog::new()),
            report_repository: Arc::new(InMemoryReportRepository::new()),
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = routes().with_state(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn list_cards_returns_the_full_deck() {
        let (status, json) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["cards"].as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn get_card_by_id() {
        let (status, json) = get_json("/3-chalices").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "3-chalices");
        assert_eq!(json["number"], 3);
    }

    #[tokio::test]
    async fn unknown_card_is_not_found() {
        let (status, json) = get_json("/42-nonsense").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error_code"], "CARD_NOT_FOUND");
    }
}
