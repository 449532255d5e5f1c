//! The standard NUMO reference deck.
//!
//! Fifty cards: every suit paired with every number 0 through 9. Card
//! attributes derive from two fixed tables, one per suit and one per number,
//! so the deck is built combinatorially rather than listed by hand.

use once_cell::sync::Lazy;

use super::card::{number_word, CardId, Element, OracleCard, Suit};

/// Per-suit attributes.
struct SuitTraits {
    base_element: Element,
    astrology_external_domain: &'static str,
    theme: &'static str,
    symbol_line: &'static str,
}

fn suit_traits(suit: Suit) -> SuitTraits {
    match suit {
        Suit::Cauldrons => SuitTraits {
            base_element: Element::Water,
            astrology_external_domain: "Home, ancestry, and emotional tides",
            theme: "transformation through feeling",
            symbol_line: "The cauldron holds what is dissolved and remade",
        },
        Suit::Spears => SuitTraits {
            base_element: Element::Fire,
            astrology_external_domain: "Ambition, conflict, and public striving",
            theme: "directed will",
            symbol_line: "The spear points where intention must travel",
        },
        Suit::Chalices => SuitTraits {
            base_element: Element::Spirit,
            astrology_external_domain: "Partnership, devotion, and shared bonds",
            theme: "receptive connection",
            symbol_line: "The chalice receives what is offered freely",
        },
        Suit::Torches => SuitTraits {
            base_element: Element::Air,
            astrology_external_domain: "Learning, speech, and sudden insight",
            theme: "illumination",
            symbol_line: "The torch carries light into unexamined places",
        },
        Suit::Mirrors => SuitTraits {
            base_element: Element::Earth,
            astrology_external_domain: "Work, body, and material consequence",
            theme: "honest reflection",
            symbol_line: "The mirror returns exactly what is brought before it",
        },
    }
}

/// Per-number attributes.
struct NumberTraits {
    planet: &'static str,
    icon_symbol: &'static str,
    sacred_geometry: &'static str,
    archetype: &'static str,
    keynote: &'static str,
}

fn number_traits(number: u8) -> NumberTraits {
    match number {
        0 => NumberTraits {
            planet: "Pluto",
            icon_symbol: "Open Ring",
            sacred_geometry: "Circle",
            archetype: "the Unwritten",
            keynote: "potential before form",
        },
        1 => NumberTraits {
            planet: "Sun",
            icon_symbol: "Single Flame",
            sacred_geometry: "Point",
            archetype: "the Initiator",
            keynote: "beginnings and self-direction",
        },
        2 => NumberTraits {
            planet: "Moon",
            icon_symbol: "Twin Crescents",
            sacred_geometry: "Vesica Piscis",
            archetype: "the Mediator",
            keynote: "balance and partnership",
        },
        3 => NumberTraits {
            planet: "Jupiter",
            icon_symbol: "Rising Spiral",
            sacred_geometry: "Triangle",
            archetype: "the Voice",
            keynote: "expression and growth",
        },
        4 => NumberTraits {
            planet: "Uranus",
            icon_symbol: "Cornerstone",
            sacred_geometry: "Square",
            archetype: "the Builder",
            keynote: "structure and endurance",
        },
        5 => NumberTraits {
            planet: "Mercury",
            icon_symbol: "Crossroads",
            sacred_geometry: "Pentagram",
            archetype: "the Traveler",
            keynote: "change and adaptation",
        },
        6 => NumberTraits {
            planet: "Venus",
            icon_symbol: "Interlaced Hearts",
            sacred_geometry: "Hexagram",
            archetype: "the Keeper",
            keynote: "care and responsibility",
        },
        7 => NumberTraits {
            planet: "Neptune",
            icon_symbol: "Veiled Lantern",
            sacred_geometry: "Heptagon",
            archetype: "the Seeker",
            keynote: "inquiry and the unseen",
        },
        8 => NumberTraits {
            planet: "Saturn",
            icon_symbol: "Double Loop",
            sacred_geometry: "Octagon",
            archetype: "the Steward",
            keynote: "power and consequence",
        },
        _ => NumberTraits {
            planet: "Mars",
            icon_symbol: "Ninefold Knot",
            sacred_geometry: "Enneagram",
            archetype: "the Completion",
            keynote: "culmination and release",
        },
    }
}

/// Elements cycle with the card number, giving each card a secondary tag
/// distinct from its suit element.
fn synergistic_element(number: u8) -> Element {
    match number % 5 {
        0 => Element::Spirit,
        1 => Element::Fire,
        2 => Element::Water,
        3 => Element::Air,
        _ => Element::Earth,
    }
}

fn build_card(number: u8, suit: Suit) -> OracleCard {
    let s = suit_traits(suit);
    let n = number_traits(number);

    OracleCard {
        id: CardId::from_parts(number, suit),
        number,
        suit,
        base_element: s.base_element,
        synergistic_element: synergistic_element(number),
        planet_internal_influence: n.planet.to_string(),
        astrology_external_domain: s.astrology_external_domain.to_string(),
        icon_symbol: n.icon_symbol.to_string(),
        sacred_geometry: n.sacred_geometry.to_string(),
        key_meanings: vec![
            format!("{} expressed through {}", n.keynote, s.theme),
            format!("{} of {}: {}", number_word(number), suit.name(), n.archetype),
        ],
        symbolism_breakdown: vec![
            format!("{} within the {}", n.icon_symbol, n.sacred_geometry),
            s.symbol_line.to_string(),
            format!("{} governs the inner current of this card", n.planet),
        ],
    }
}

/// The full 50-card reference deck in canonical order (suit-major, then
/// number ascending).
pub static STANDARD_DECK: Lazy<Vec<OracleCard>> = Lazy::new(|| {
    let mut cards = Vec::with_capacity(50);
    for suit in Suit::ALL {
        for number in 0..=9u8 {
            cards.push(build_card(number, suit));
        }
    }
    cards
});

/// Looks a card up by id in the standard deck.
pub fn card_by_id(id: &CardId) -> Option<&'static OracleCard> {
    STANDARD_DECK.iter().find(|card| &card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_fifty_cards() {
        assert_eq!(STANDARD_DECK.len(), 50);
    }

    #[test]
    fn deck_ids_are_unique() {
        let mut ids: Vec<&str> = STANDARD_DECK.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn every_card_is_fully_populated() {
        for card in STANDARD_DECK.iter() {
            assert!(card.number <= 9, "{}", card.id);
            assert!(!card.planet_internal_influence.is_empty(), "{}", card.id);
            assert!(!card.astrology_external_domain.is_empty(), "{}", card.id);
            assert!(!card.icon_symbol.is_empty(), "{}", card.id);
            assert!(!card.sacred_geometry.is_empty(), "{}", card.id);
            assert!(!card.key_meanings.is_empty(), "{}", card.id);
            assert!(card.symbolism_breakdown.len() >= 2, "{}", card.id);
        }
    }

    #[test]
    fn card_by_id_finds_existing_card() {
        let id = CardId::from_parts(3, Suit::Chalices);
        let card = card_by_id(&id).unwrap();
        assert_eq!(card.number, 3);
        assert_eq!(card.suit, Suit::Chalices);
        assert_eq!(card.title(), "Three of Chalices");
    }

    #[test]
    fn deck_covers_every_suit_and_number() {
        for suit in Suit::ALL {
            for number in 0..=9u8 {
                let id = CardId::from_parts(number, suit);
                assert!(card_by_id(&id).is_some(), "missing {}", id);
            }
        }
    }

    #[test]
    fn suit_fixes_base_element() {
        for card in STANDARD_DECK.iter().filter(|c| c.suit == Suit::Spears) {
            assert_eq!(card.base_element, Element::Fire);
        }
    }

    #[test]
    fn synergistic_element_cycles_with_number() {
        assert_eq!(synergistic_element(0), Element::Spirit);
        assert_eq!(synergistic_element(1), Element::Fire);
        assert_eq!(synergistic_element(6), Element::Fire);
        assert_eq!(synergistic_element(9), Element::Earth);
    }
}
