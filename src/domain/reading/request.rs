//! The ephemeral reading request value object.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{CardId, Orientation, SpreadType};
use crate::domain::numerology::NumerologyProfile;

/// A single drawn card: which card, face direction. Position is the index
/// within the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card_id: CardId,
    pub orientation: Orientation,
}

impl DrawnCard {
    /// Creates an upright draw.
    pub fn upright(card_id: CardId) -> Self {
        Self {
            card_id,
            orientation: Orientation::Upright,
        }
    }

    /// Creates a reversed draw.
    pub fn reversed(card_id: CardId) -> Self {
        Self {
            card_id,
            orientation: Orientation::Reversed,
        }
    }
}

/// Everything a reading needs: the position-ordered draw, the question, the
/// spread, and optionally the seeker's numerology profile.
///
/// Produced once per request and consumed immediately by the prompt
/// assembler; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub drawn: Vec<DrawnCard>,
    pub question: String,
    pub spread: SpreadType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<NumerologyProfile>,
}

impl ReadingRequest {
    /// Creates a request without a numerology profile.
    pub fn new(drawn: Vec<DrawnCard>, question: impl Into<String>, spread: SpreadType) -> Self {
        Self {
            drawn,
            question: question.into(),
            spread,
            profile: None,
        }
    }

    /// Attaches a numerology profile.
    pub fn with_profile(mut self, profile: NumerologyProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}
