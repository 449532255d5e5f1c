//! Oracle card reference types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The five symbolic suits of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cauldrons,
    Spears,
    Chalices,
    Torches,
    Mirrors,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 5] = [
        Suit::Cauldrons,
        Suit::Spears,
        Suit::Chalices,
        Suit::Torches,
        Suit::Mirrors,
    ];

    /// Lowercase identifier used in card ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Suit::Cauldrons => "cauldrons",
            Suit::Spears => "spears",
            Suit::Chalices => "chalices",
            Suit::Torches => "torches",
            Suit::Mirrors => "mirrors",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Cauldrons => "Cauldrons",
            Suit::Spears => "Spears",
            Suit::Chalices => "Chalices",
            Suit::Torches => "Torches",
            Suit::Mirrors => "Mirrors",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Suit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cauldrons" => Ok(Suit::Cauldrons),
            "spears" => Ok(Suit::Spears),
            "chalices" => Ok(Suit::Chalices),
            "torches" => Ok(Suit::Torches),
            "mirrors" => Ok(Suit::Mirrors),
            other => Err(ValidationError::invalid_format(
                "suit",
                format!("unknown suit '{}'", other),
            )),
        }
    }
}

/// The five elemental tags carried by cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Spirit,
}

impl Element {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Spirit => "Spirit",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Orientation of a drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Upright => "Upright",
            Orientation::Reversed => "Reversed",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifier of a card: "{number}-{suit}", e.g. "3-chalices".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Builds the id for a number/suit pair.
    pub fn from_parts(number: u8, suit: Suit) -> Self {
        Self(format!("{}-{}", number, suit.slug()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CardId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, suit) = s
            .split_once('-')
            .ok_or_else(|| ValidationError::invalid_format("card_id", "expected '{number}-{suit}'"))?;
        let number: u8 = number
            .parse()
            .map_err(|_| ValidationError::invalid_format("card_id", "number is not a digit"))?;
        if number > 9 {
            return Err(ValidationError::out_of_range("card_id", 0, 9, number as i32));
        }
        let suit: Suit = suit.parse()?;
        Ok(Self::from_parts(number, suit))
    }
}

/// Static reference data for a single oracle card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCard {
    pub id: CardId,
    /// Card number, 0 through 9.
    pub number: u8,
    pub suit: Suit,
    pub base_element: Element,
    pub synergistic_element: Element,
    pub planet_internal_influence: String,
    pub astrology_external_domain: String,
    pub icon_symbol: String,
    pub sacred_geometry: String,
    pub key_meanings: Vec<String>,
    pub symbolism_breakdown: Vec<String>,
}

impl OracleCard {
    /// Display title, e.g. "Three of Chalices".
    pub fn title(&self) -> String {
        format!("{} of {}", number_word(self.number), self.suit.name())
    }
}

/// English word for a card number.
pub fn number_word(number: u8) -> &'static str {
    match number {
        0 => "Zero",
        1 => "One",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        _ => "Unknown",
    }
}
