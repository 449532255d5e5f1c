//! HTTP handlers for reading endpoints.

use std::convert::Infallible;
use std::str::FromStr;

use axum::extract::{Json, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use futures::stream::{Stream, StreamExt};

use crate::application::handlers::{GenerateReadingCommand, GenerateReadingHandler};
use crate::domain::cards::{CardId, SpreadType};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::numerology::NumerologyProfile;
use crate::domain::reading::DrawnCard;

use super::super::{ApiError, AppState, AuthenticatedUser};
use super::dto::{GenerateReadingRequest, ReadingResponse, ReadingStreamEvent};

/// POST /api/readings - Generate a complete reading.
pub async fn generate_reading(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GenerateReadingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = GenerateReadingHandler::new(state.ai_provider.clone(), state.card_catalog.clone());
    let cmd = to_command(user, request)?;

    let reading = handler.handle(cmd).await?;

    Ok(Json(ReadingResponse {
        reading_id: reading.reading_id.to_string(),
        content: reading.content,
        model: reading.model,
        usage: reading.usage,
        unresolved_cards: reading
            .unresolved_cards
            .iter()
            .map(|id| id.to_string())
            .collect(),
    }))
}

/// POST /api/readings/stream - Generate a reading as server-sent events.
pub async fn stream_reading(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GenerateReadingRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let handler = GenerateReadingHandler::new(state.ai_provider.clone(), state.card_catalog.clone());
    let cmd = to_command(user, request)?;

    let streamed = handler.handle_stream(cmd).await?;

    let started = ReadingStreamEvent::Started {
        reading_id: streamed.reading_id.to_string(),
        unresolved_cards: streamed
            .unresolved_cards
            .iter()
            .map(|id| id.to_string())
            .collect(),
    };

    let events = futures::stream::once(async move { started })
        .chain(streamed.chunks.map(|result| match result {
            Ok(chunk) => {
                if chunk.is_final() {
                    ReadingStreamEvent::Complete {
                        usage: chunk.usage.unwrap_or_default(),
                    }
                } else {
                    ReadingStreamEvent::Chunk { delta: chunk.delta }
                }
            }
            Err(err) => ReadingStreamEvent::Error {
                message: err.to_string(),
            },
        }))
        .map(|event| Ok(to_sse_event(&event)));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn to_sse_event(event: &ReadingStreamEvent) -> Event {
    match Event::default().json_data(event) {
        Ok(event) => event,
        Err(e) => Event::default().data(format!("{{\"type\":\"error\",\"message\":\"{}\"}}", e)),
    }
}

/// Converts the wire request into the application command, validating card
/// ids and deriving the optional numerology profile.
fn to_command(
    user: AuthenticatedUser,
    request: GenerateReadingRequest,
) -> Result<GenerateReadingCommand, ApiError> {
    let mut drawn = Vec::with_capacity(request.cards.len());
    for card in request.cards {
        let card_id = CardId::from_str(&card.card_id)?;
        drawn.push(DrawnCard {
            card_id,
            orientation: card.orientation,
        });
    }

    let spread = match request.spread {
        Some(spread) => spread,
        None => spread_for_draw(drawn.len())?,
    };

    let profile = match request.seeker {
        Some(seeker) => Some(NumerologyProfile::derive(
            &seeker.full_name,
            seeker.birth_date,
        )?),
        None => None,
    };

    Ok(GenerateReadingCommand {
        user_id: user.user_id,
        drawn,
        question: request.question,
        spread,
        profile,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    })
}

/// Default spread for a draw size.
fn spread_for_draw(cards: usize) -> Result<SpreadType, ApiError> {
    match cards {
        0 | 1 => Ok(SpreadType::SingleCard),
        2 | 3 => Ok(SpreadType::ThreeCard),
        4 | 5 => Ok(SpreadType::FiveCard),
        n => Err(DomainError::new(
            ErrorCode::OutOfRange,
            format!("Draw of {} cards exceeds the largest spread", n),
        )
        .into()),
    }
}
