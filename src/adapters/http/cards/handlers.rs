//! HTTP handlers for card reference endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;
use std::str::FromStr;

use crate::application::handlers::{GetCardHandler, GetCardQuery, ListCardsHandler};
use crate::domain::cards::CardId;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::super::{ApiError, AppState};
use super::dto::{CardListResponse, CardResponse};

/// GET /api/cards - Full reference deck in canonical order.
pub async fn list_cards(State(state): State<AppState>) -> impl IntoResponse {
    let handler = ListCardsHandler::new(state.card_catalog.clone());
    let response = CardListResponse {
        cards: handler.handle().into_iter().map(CardResponse::from).collect(),
    };
    Json(response)
}

/// GET /api/cards/:id - One card by id, e.g. "3-chalices".
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let card_id = CardId::from_str(&id).map_err(|_| {
        DomainError::new(ErrorCode::CardNotFound, format!("Card '{}' not found", id))
    })?;

    let handler = GetCardHandler::new(state.card_catalog.clone());
    let card = handler.handle(GetCardQuery { card_id })?;

    Ok(Json(CardResponse::from(card)))
}
