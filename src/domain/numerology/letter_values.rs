//! Pythagorean letter-to-number mapping and the vowel/consonant split.

/// Returns the Pythagorean value of an ASCII letter, or None for any other
/// character. Case-insensitive.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    match c {
        'A' | 'J' | 'S' => Some(1),
        'B' | 'K' | 'T' => Some(2),
        'C' | 'L' | 'U' => Some(3),
        'D' | 'M' | 'V' => Some(4),
        'E' | 'N' | 'W' => Some(5),
        'F' | 'O' | 'X' => Some(6),
        'G' | 'P' | 'Y' => Some(7),
        'H' | 'Q' | 'Z' => Some(8),
        'I' | 'R' => Some(9),
        _ => None,
    }
}

/// Returns true for the Pythagorean vowels A, E, I, O, U.
///
/// Y is treated as a consonant. Non-letters return false.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Returns true for letters that are not vowels.
///
/// The vowel and consonant predicates partition the ASCII alphabet exactly.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
