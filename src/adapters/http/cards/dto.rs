//! HTTP DTOs for card reference endpoints.

use serde::Serialize;

use crate::domain::cards::OracleCard;

/// A single card in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CardResponse {
    pub id: String,
    /// Display title, e.g. "Three of Chalices".
    pub title: String,
    pub number: u8,
    pub suit: String,
    pub base_element: String,
    pub synergistic_element: String,
    pub planet_internal_influence: String,
    pub astrology_external_domain: String,
    pub icon_symbol: String,
    pub sacred_geometry: String,
    pub key_meanings: Vec<String>,
    pub symbolism_breakdown: Vec<String>,
}

impl From<OracleCard> for CardResponse {
    fn from(card: OracleCard) -> Self {
        Self {
            id: card.id.to_string(),
            title: card.title(),
            number: card.number,
            suit: card.suit.name().to_string(),
            base_element: card.base_element.name().to_string(),
            synergistic_element: card.synergistic_element.name().to_string(),
            planet_internal_influence: card.planet_internal_influence,
            astrology_external_domain: card.astrology_external_domain,
            icon_symbol: card.icon_symbol,
            sacred_geometry: card.sacred_geometry,
            key_meanings: card.key_meanings,
            symbolism_breakdown: card.symbolism_breakdown,
        }
    }
}

/// Response listing the full deck.
#[derive(Debug, Clone, Serialize)]
pub struct CardListResponse {
    pub cards: Vec<CardResponse>,
}
