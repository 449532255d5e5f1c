//! The derived numerology profile value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::calculators::{
    destiny_number, life_path_number, personality_number, soul_urge_number,
};

/// A complete numerology profile derived from a full name and birth date.
///
/// Computed on demand; has no identity of its own. A snapshot may be persisted
/// as a saved report, keyed by user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path_number: u32,
    pub destiny_number: u32,
    pub soul_urge_number: u32,
    pub personality_number: u32,
    /// The un-reduced destiny sum, kept only when it carries narrative
    /// significance (11, 13, 14, 16, 19, 22 or 33).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound_number: Option<u32>,
}

impl NumerologyProfile {
    /// Derives a full profile from a name and birth date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the name has no mappable letters, or no
    /// vowels / no consonants (those selections have no defined number).
    pub fn derive(full_name: &str, birth_date: NaiveDate) -> Result<Self, ValidationError> {
        let destiny = destiny_number(full_name)?;
        Ok(Self {
            life_path_number: life_path_number(birth_date),
            destiny_number: destiny.number,
            soul_urge_number: soul_urge_number(full_name)?,
            personality_number: personality_number(full_name)?,
            compound_number: destiny.compound_is_significant().then_some(destiny.compound),
        })
    }
}
