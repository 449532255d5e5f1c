//! Numerology number calculators.
//!
//! Each calculator is a pure function over a birth date or full name, with the
//! digit-reduction engine as its final step. Input validation is explicit:
//! names without a single mappable letter are rejected rather than silently
//! producing a 0 result.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::letter_values::{is_consonant, is_vowel, letter_value};
use super::reduction::{reduce_to_core, reduce_to_digit};

/// Compound sums considered narratively significant when they appear as the
/// un-reduced destiny total.
pub const SIGNIFICANT_COMPOUNDS: &[u32] = &[11, 13, 14, 16, 19, 22, 33];

/// A destiny number together with its un-reduced compound sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinyNumber {
    /// Reduced core number.
    pub number: u32,
    /// Un-reduced letter sum, kept for the significance check.
    pub compound: u32,
}

impl DestinyNumber {
    /// Returns true if the compound sum carries narrative significance.
    pub fn compound_is_significant(&self) -> bool {
        SIGNIFICANT_COMPOUNDS.contains(&self.compound)
    }
}

/// Computes the life path number from a birth date.
///
/// Month and day are reduced fully to single digits; the year is reduced
/// preserving master numbers; the three reduced values are summed and passed
/// once more through the core reduction.
pub fn life_path_number(birth_date: NaiveDate) -> u32 {
    let month = reduce_to_digit(birth_date.month());
    let day = reduce_to_digit(birth_date.day());
    let year = reduce_to_core(birth_date.year().unsigned_abs());
    reduce_to_core(month + day + year)
}

/// Computes the destiny (expression) number from all letters of a full name.
pub fn destiny_number(full_name: &str) -> Result<DestinyNumber, ValidationError> {
    let compound = letter_sum(full_name, |_| true)?;
    Ok(DestinyNumber {
        number: reduce_to_core(compound),
        compound,
    })
}

/// Computes the soul urge number from the vowels of a full name.
pub fn soul_urge_number(full_name: &str) -> Result<u32, ValidationError> {
    Ok(reduce_to_core(letter_sum(full_name, is_vowel)?))
}

/// Computes the personality number from the consonants of a full name.
pub fn personality_number(full_name: &str) -> Result<u32, ValidationError> {
    Ok(reduce_to_core(letter_sum(full_name, is_consonant)?))
}

/// Sums the Pythagorean values of the letters in `full_name` accepted by
/// `filter`. Non-letter characters are ignored.
///
/// Fails when the name contains no alphabetic character at all, or when the
/// filtered selection is empty (a vowel-less or consonant-less name has no
/// defined soul urge / personality number).
fn letter_sum(full_name: &str, filter: impl Fn(char) -> bool) -> Result<u32, ValidationError> {
    if !full_name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::empty_field("full_name"));
    }

    let sum: u32 = full_name
        .chars()
        .filter(|c| filter(*c))
        .filter_map(letter_value)
        .sum();

    if sum == 0 {
        return Err(ValidationError::invalid_format(
            "full_name",
            "no letters matched the requested selection",
        ));
    }

    Ok(sum)
}
