//! HTTP DTOs for reading endpoints.
//!
//! The streaming endpoint delivers tagged SSE events; the event types mirror
//! the JSON response so clients can share parsing code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::cards::{Orientation, SpreadType};
use crate::ports::TokenUsage;

/// A single drawn card in a reading request.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawnCardRequest {
    /// Card id, e.g. "3-chalices".
    pub card_id: String,
    /// Face direction; defaults to upright.
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
}

fn default_orientation() -> Orientation {
    Orientation::Upright
}

/// Optional seeker details; when present, a numerology profile is derived
/// and woven into the reading.
#[derive(Debug, Clone, Deserialize)]
pub struct SeekerRequest {
    pub full_name: String,
    /// Birth date in ISO 8601 (YYYY-MM-DD).
    pub birth_date: NaiveDate,
}

/// Request to generate a reading.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReadingRequest {
    /// Position-ordered drawn cards.
    pub cards: Vec<DrawnCardRequest>,
    /// The seeker's question.
    pub question: String,
    /// Spread layout; defaults to the draw size's natural spread.
    #[serde(default)]
    pub spread: Option<SpreadType>,
    /// Optional seeker details for the numerology section.
    #[serde(default)]
    pub seeker: Option<SeekerRequest>,
    /// Generation limit override.
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Temperature override.
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Response carrying a completed reading.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingResponse {
    pub reading_id: String,
    /// The generated interpretation (markdown).
    pub content: String,
    pub model: String,
    pub usage: TokenUsage,
    /// Card ids that had no reference data.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_cards: Vec<String>,
}

/// Server-sent events for the streaming endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReadingStreamEvent {
    /// Reading accepted; always the first event.
    Started {
        reading_id: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        unresolved_cards: Vec<String>,
    },
    /// Incremental interpretation text.
    Chunk { delta: String },
    /// Final event with usage statistics.
    Complete { usage: TokenUsage },
    /// Generation failed mid-stream.
    Error { message: String },
}
