//! Deterministic assembly of the reading prompt.
//!
//! The assembled prompt is a pure function of the reading request and the
//! reference deck: identical inputs always yield byte-identical text. The
//! downstream model call is not this module's concern.

use std::fmt::Write;

use thiserror::Error;

use crate::domain::cards::{CardId, OracleCard};

use super::request::ReadingRequest;

/// Fixed persona preamble describing the oracle's voice and interpretive rules.
const PERSONA_PREAMBLE: &str = r#"You are the NUMO Oracle, a contemplative guide who reads a deck of fifty
numerological cards. You speak with warmth and precision, never with doom.
Interpretive rules:
- Ground every statement in the drawn cards and, when present, the seeker's
  numerology profile. Do not invent cards or numbers.
- A reversed card signals an inward, delayed, or resisted expression of the
  card's meaning, not its opposite.
- Master numbers (11, 22, 33) and significant compound numbers deserve
  explicit mention when they appear in the profile.
- Offer perspective and choices, never predictions of fixed outcomes."#;

/// Closing instruction describing the required response structure.
const OUTPUT_INSTRUCTIONS: &str = r#"Structure your reading with exactly these headed sections:
## Summary
## Numerology Interpretation
## Astrology Influence
## Card Analysis
## Guidance
In Card Analysis, address each drawn card under its position label. If no
numerology profile was provided, keep the Numerology Interpretation section to
a single sentence noting its absence."#;

/// Errors from prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A reading requires at least one drawn card.
    #[error("a reading requires at least one drawn card")]
    EmptyCardDraw,
}

/// The assembled prompt plus any cards whose reference data could not be
/// resolved (rendered by id only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub text: String,
    pub unresolved_cards: Vec<CardId>,
}

impl AssembledPrompt {
    /// True when every drawn card was rendered with full attributes.
    pub fn is_complete(&self) -> bool {
        self.unresolved_cards.is_empty()
    }
}

/// Assembles the full reading prompt.
///
/// `reference_deck` is both the lookup table for the drawn cards and the
/// ground-truth card listing embedded in the prompt, so the model has every
/// possible card available, not just the drawn ones.
///
/// # Errors
///
/// Returns [`PromptError::EmptyCardDraw`] when the request draws no cards.
/// A drawn card missing from `reference_deck` does not abort assembly; it is
/// rendered by id and reported in `unresolved_cards`.
pub fn assemble_reading_prompt(
    request: &ReadingRequest,
    reference_deck: &[OracleCard],
) -> Result<AssembledPrompt, PromptError> {
    if request.drawn.is_empty() {
        return Err(PromptError::EmptyCardDraw);
    }

    let mut text = String::new();
    let mut unresolved = Vec::new();

    text.push_str(PERSONA_PREAMBLE);
    text.push_str("\n\n# Card Reference\n");
    for card in reference_deck {
        write_card_reference(&mut text, card);
    }

    text.push_str("\n# The Question\n");
    let _ = writeln!(text, "Spread: {}", request.spread);
    let _ = writeln!(text, "Question: {}", request.question);

    if let Some(profile) = &request.profile {
        text.push_str("\n# Seeker's Numerology Profile\n");
        let _ = writeln!(text, "Life Path Number: {}", profile.life_path_number);
        let _ = writeln!(text, "Destiny Number: {}", profile.destiny_number);
        let _ = writeln!(text, "Soul Urge Number: {}", profile.soul_urge_number);
        let _ = writeln!(text, "Personality Number: {}", profile.personality_number);
        if let Some(compound) = profile.compound_number {
            let _ = writeln!(text, "Significant Compound Number: {}", compound);
        }
    }

    text.push_str("\n# Drawn Cards\n");
    for (index, drawn) in request.drawn.iter().enumerate() {
        let label = request.spread.position_label(index);
        match reference_deck.iter().find(|card| card.id == drawn.card_id) {
            Some(card) => {
                let _ = writeln!(
                    text,
                    "{}. {} — {} ({})",
                    index + 1,
                    label,
                    card.title(),
                    drawn.orientation
                );
                write_card_attributes(&mut text, card);
            }
            None => {
                let _ = writeln!(
                    text,
                    "{}. {} — card '{}' ({}) [reference data unavailable]",
                    index + 1,
                    label,
                    drawn.card_id,
                    drawn.orientation
                );
                unresolved.push(drawn.card_id.clone());
            }
        }
    }

    text.push('\n');
    text.push_str(OUTPUT_INSTRUCTIONS);

    Ok(AssembledPrompt {
        text,
        unresolved_cards: unresolved,
    })
}

fn write_card_reference(text: &mut String, card: &OracleCard) {
    let _ = writeln!(
        text,
        "- {} [{}]: {} / {}; planet {}; domain {}; {} within {}; meanings: {}",
        card.title(),
        card.id,
        card.base_element,
        card.synergistic_element,
        card.planet_internal_influence,
        card.astrology_external_domain,
        card.icon_symbol,
        card.sacred_geometry,
        card.key_meanings.join("; "),
    );
}

fn write_card_attributes(text: &mut String, card: &OracleCard) {
    let _ = writeln!(text, "   Elements: {} / {}", card.base_element, card.synergistic_element);
    let _ = writeln!(text, "   Planet (internal influence): {}", card.planet_internal_influence);
    let _ = writeln!(text, "   Astrology (external domain): {}", card.astrology_external_domain);
    let _ = writeln!(text, "   Icon: {} | Sacred geometry: {}", card.icon_symbol, card.sacred_geometry);
    let _ = writeln!(text, "   Key meanings: {}", card.key_meanings.join("; "));
    for line in &card.symbolism_breakdown {
        let _ = writeln!(text, "   Symbolism: {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{CardId, SpreadType, Suit, STANDARD_DECK};
    use crate::domain::numerology::NumerologyProfile;
    use crate::domain::reading::DrawnCard;
    use chrono::NaiveDate;

    fn single_draw() -> ReadingRequest {
        ReadingRequest::new(
            vec![DrawnCard::upright(CardId::from_parts(3, Suit::Chalices))],
            "What should I focus on?",
            SpreadType::SingleCard,
        )
    }

    #[test]
    fn empty_draw_is_rejected() {
        let request = ReadingRequest::new(vec![], "What should I focus on?", SpreadType::SingleCard);
        let result = assemble_reading_prompt(&request, &STANDARD_DECK);
        assert_eq!(result.unwrap_err(), PromptError::EmptyCardDraw);
    }

    #[test]
    fn assembly_is_deterministic() {
        let request = single_draw();
        let first = assemble_reading_prompt(&request, &STANDARD_DECK).unwrap();
        let second = assemble_reading_prompt(&request, &STANDARD_DECK).unwrap();
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn prompt_contains_all_sections_in_order() {
        let profile = NumerologyProfile::derive(
            "JOHN SMITH",
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        )
        .unwrap();
        let request = single_draw().with_profile(profile);
        let prompt = assemble_reading_prompt(&request, &STANDARD_DECK).unwrap();

        let reference = prompt.text.find("# Card Reference").unwrap();
        let question = prompt.text.find("# The Question").unwrap();
        let numerology = prompt.text.find("# Seeker's Numerology Profile").unwrap();
        let drawn = prompt.text.find("# Drawn Cards").unwrap();
        let closing = prompt.text.find("## Summary").unwrap();

        assert!(reference < question);
        assert!(question < numerology);
        assert!(numerology < drawn);
        assert!(drawn < closing);
    }

    #[test]
    fn prompt_embeds_the_whole_reference_deck() {
        let prompt = assemble_reading_prompt(&single_draw(), &STANDARD_DECK).unwrap();
        for card in STANDARD_DECK.iter() {
            assert!(
                prompt.text.contains(card.id.as_str()),
                "reference table missing {}",
                card.id
            );
        }
    }

    #[test]
    fn profile_section_absent_without_profile() {
        let prompt = assemble_reading_prompt(&single_draw(), &STANDARD_DECK).unwrap();
        assert!(!prompt.text.contains("# Seeker's Numerology Profile"));
    }

    #[test]
    fn drawn_cards_use_position_labels_and_orientation() {
        let request = ReadingRequest::new(
            vec![
                DrawnCard::upright(CardId::from_parts(1, Suit::Torches)),
                DrawnCard::reversed(CardId::from_parts(8, Suit::Mirrors)),
                DrawnCard::upright(CardId::from_parts(0, Suit::Cauldrons)),
            ],
            "Where is this heading?",
            SpreadType::ThreeCard,
        );
        let prompt = assemble_reading_prompt(&request, &STANDARD_DECK).unwrap();

        assert!(prompt.text.contains("1. Past — One of Torches (Upright)"));
        assert!(prompt.text.contains("2. Present — Eight of Mirrors (Reversed)"));
        assert!(prompt.text.contains("3. Future — Zero of Cauldrons (Upright)"));
    }

    #[test]
    fn unresolved_card_is_rendered_by_id_and_reported() {
        // A deck restricted to one suit cannot resolve cards from another.
        let partial_deck: Vec<_> = STANDARD_DECK
            .iter()
            .filter(|c| c.suit == Suit::Torches)
            .cloned()
            .collect();

        let missing_id = CardId::from_parts(4, Suit::Spears);
        let request = ReadingRequest::new(
            vec![
                DrawnCard::upright(CardId::from_parts(2, Suit::Torches)),
                DrawnCard::upright(missing_id.clone()),
            ],
            "What remains hidden?",
            SpreadType::ThreeCard,
        );

        let prompt = assemble_reading_prompt(&request, &partial_deck).unwrap();
        assert_eq!(prompt.unresolved_cards, vec![missing_id.clone()]);
        assert!(!prompt.is_complete());
        assert!(prompt
            .text
            .contains(&format!("card '{}' (Upright) [reference data unavailable]", missing_id)));
    }

    #[test]
    fn significant_compound_appears_in_profile_section() {
        let profile = NumerologyProfile::derive(
            "ADIN",
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
        )
        .unwrap();
        let request = single_draw().with_profile(profile);
        let prompt = assemble_reading_prompt(&request, &STANDARD_DECK).unwrap();
        assert!(prompt.text.contains("Significant Compound Number: 19"));
    }
}
