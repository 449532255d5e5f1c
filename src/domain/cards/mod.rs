//! Oracle card reference data: card types, the standard deck, and spreads.

mod card;
mod deck;
mod spread;

pub use card::{number_word, CardId, Element, OracleCard, Orientation, Suit};
pub use deck::{card_by_id, STANDARD_DECK};
pub use spread::SpreadType;
