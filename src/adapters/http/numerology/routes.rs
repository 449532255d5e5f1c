//! Axum router configuration for numerology endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::AppState;
use super::handlers::{calculate_profile, get_report, list_reports, save_report};

/// Create the numerology API router.
///
/// # Routes
///
/// - `POST /` - Calculate a profile (no persistence, no auth)
/// - `POST /reports` - Derive and save a report (requires auth)
/// - `GET /reports` - List caller's saved reports (requires auth)
/// - `GET /reports/:id` - Fetch one saved report (requires auth)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate_profile))
        .route("/reports", post(save_report).get(list_reports))
        .route("/reports/:id", get(get_report))
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

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn calculate_profile_returns_numbers_without_auth() {
        let app = routes().with_state(test_state());

        let response = app
            .oneshot(json_request(
                "POST",
                "/",
                r#"{"full_name":"John Smith","birth_date":"1990-03-15"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["life_path_number"], 1);
        assert_eq!(json["personality_number"], 11);
    }

    #[tokio::test]
    async fn list_reports_without_user_header_is_unauthorized() {
        let app = routes().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/reports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error_code"], "AUTHENTICATION_REQUIRED");
    }

    #[tokio::test]
    async fn save_report_without_user_header_is_unauthorized() {
        let app = routes().with_state(test_state());

        let request = json_request(
            "POST",
            "/reports",
            r#"{"full_name":"John Smith","birth_date":"1990-03-15"}"#,
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn save_then_list_reports_for_caller() {
        let state = test_state();

        let mut save_request = json_request(
            "POST",
            "/reports",
            r#"{"full_name":"John Smith","birth_date":"1990-03-15"}"#,
        );
        save_request
            .headers_mut()
            .insert("X-User-Id", "user-1".parse().unwrap());

        let response = routes()
            .with_state(state.clone())
            .oneshot(save_request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let mut list_request = Request::builder()
            .uri("/reports")
            .body(Body::empty())
            .unwrap();
        list_request
            .headers_mut()
            .insert("X-User-Id", "user-1".parse().unwrap());

        let response = routes()
            .with_state(state)
            .oneshot(list_request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["reports"].as_array().unwrap().len(), 1);
        assert_eq!(json["reports"][0]["full_name"], "John Smith");
    }

    #[tokio::test]
    async fn get_unknown_report_is_not_found() {
        let app = routes().with_state(test_state());

        let mut request = Request::builder()
            .uri(format!("/reports/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        request
            .headers_mut()
            .insert("X-User-Id", "user-1".parse().unwrap());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
