//! Spread types and their position labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The layout a reading is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadType {
    SingleCard,
    ThreeCard,
    FiveCard,
}

impl SpreadType {
    /// Wire/display tag, e.g. "three-card".
    pub fn tag(&self) -> &'static str {
        match self {
            SpreadType::SingleCard => "single-card",
            SpreadType::ThreeCard => "three-card",
            SpreadType::FiveCard => "five-card",
        }
    }

    /// Number of positions in the spread.
    pub fn positions(&self) -> usize {
        match self {
            SpreadType::SingleCard => 1,
            SpreadType::ThreeCard => 3,
            SpreadType::FiveCard => 5,
        }
    }

    /// Label for a zero-based position index.
    ///
    /// Falls back to a numbered label for indexes beyond the spread, so a
    /// reading with extra cards still renders.
    pub fn position_label(&self, index: usize) -> String {
        let labels: &[&str] = match self {
            SpreadType::SingleCard => &["Focus"],
            SpreadType::ThreeCard => &["Past", "Present", "Future"],
            SpreadType::FiveCard => &["Root", "Challenge", "Hidden Current", "Counsel", "Outcome"],
        };
        labels
            .get(index)
            .map(|label| label.to_string())
            .unwrap_or_else(|| format!("Position {}", index + 1))
    }
}

impl fmt::Display for SpreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for SpreadType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-card" => Ok(SpreadType::SingleCard),
            "three-card" => Ok(SpreadType::ThreeCard),
            "five-card" => Ok(SpreadType::FiveCard),
            other => Err(ValidationError::invalid_format(
                "spread_type",
                format!("unknown spread '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for spread in [SpreadType::SingleCard, SpreadType::ThreeCard, SpreadType::FiveCard] {
            let parsed: SpreadType = spread.tag().parse().unwrap();
            assert_eq!(parsed, spread);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("celtic-cross".parse::<SpreadType>().is_err());
    }

    #[test]
    fn three_card_positions_are_labeled() {
        let spread = SpreadType::ThreeCard;
        assert_eq!(spread.positions(), 3);
        assert_eq!(spread.position_label(0), "Past");
        assert_eq!(spread.position_label(2), "Future");
    }

    #[test]
    fn out_of_spread_positions_get_numbered_labels() {
        assert_eq!(SpreadType::SingleCard.position_label(3), "Position 4");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&SpreadType::ThreeCard).unwrap();
        assert_eq!(json, "\"three-card\"");
    }
}
