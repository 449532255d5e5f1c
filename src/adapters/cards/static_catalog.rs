//! Static card catalog backed by the built-in deck.
//!
//! The deck is fixed at compile time, so this adapter simply answers lookups
//! against the standard 50-card deck. It exists behind the CardCatalog port
//! so the application layer stays independent of where card data lives.

use crate::domain::cards::{card_by_id, CardId, OracleCard, STANDARD_DECK};
use crate::ports::CardCatalog;

/// Card catalog over the built-in standard deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCardCatalog;

impl StaticCardCatalog {
    /// Creates a new static catalog.
    pub fn new() -> Self {
        Self
    }
}

impl CardCatalog for StaticCardCatalog {
    fn card_by_id(&self, id: &CardId) -> Option<OracleCard> {
        card_by_id(id).cloned()
    }

    fn all_cards(&self) -> Vec<OracleCard> {
        STANDARD_DECK.clone()
    }
}
