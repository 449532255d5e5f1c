//! Card Catalog Port - Lookup interface for card reference data.

use crate::domain::cards::{CardId, OracleCard};

/// Read access to the card reference data.
///
/// The standard deck adapter is static and in-process; the port exists so the
/// reading handlers never depend on where the reference data lives.
pub trait CardCatalog: Send + Sync {
    /// Looks up a single card by id.
    fn card_by_id(&self, id: &CardId) -> Option<OracleCard>;

    /// Returns the full reference deck in canonical order.
    fn all_cards(&self) -> Vec<OracleCard>;
}
