//! Numerology core: digit reduction, letter mapping, and the number
//! calculators that derive a profile from a name and birth date.

mod calculators;
mod letter_values;
mod profile;
mod reduction;

pub use calculators::{
    destiny_number, life_path_number, personality_number, soul_urge_number, DestinyNumber,
    SIGNIFICANT_COMPOUNDS,
};
pub use letter_values::{is_consonant, is_vowel, letter_value};
pub use profile::NumerologyProfile;
pub use reduction::{is_master_number, reduce_to_core, reduce_to_digit, MASTER_NUMBERS};
