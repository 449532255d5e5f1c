//! ListCardsHandler / GetCardHandler - Query handlers for the card catalog.

use std::sync::Arc;

use crate::domain::cards::{CardId, OracleCard};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CardCatalog;

/// Handler that returns the full reference deck in canonical order.
pub struct ListCardsHandler {
    catalog: Arc<dyn CardCatalog>,
}

impl ListCardsHandler {
    pub fn new(catalog: Arc<dyn CardCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> Vec<OracleCard> {
        self.catalog.all_cards()
    }
}

/// Query for a single card.
#[derive(Debug, Clone)]
pub struct GetCardQuery {
    pub card_id: CardId,
}

/// Handler that looks up one card by id.
pub struct GetCardHandler {
    catalog: Arc<dyn CardCatalog>,
}

impl GetCardHandler {
    pub fn new(catalog: Arc<dyn CardCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetCardQuery) -> Result<OracleCard, DomainError> {
        self.catalog.card_by_id(&query.card_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CardNotFound,
                format!("Card '{}' not found", query.card_id),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cards::StaticCardCatalog;
    use std::str::FromStr;

    #[test]
    fn list_returns_full_deck() {
        let handler = ListCardsHandler::new(Arc::new(StaticCardCatalog::new()));
        assert_eq!(handler.handle().len(), 50);
    }

    #[test]
    fn get_resolves_known_card() {
        let handler = GetCardHandler::new(Arc::new(StaticCardCatalog::new()));
        let card = handler
            .handle(GetCardQuery {
                card_id: CardId::from_str("0-cauldrons").unwrap(),
            })
            .unwrap();
        assert_eq!(card.number, 0);
    }
}
