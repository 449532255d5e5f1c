//! Digit-reduction engine shared by every numerology calculator.
//!
//! Reduction repeatedly replaces a number with the sum of its decimal digits
//! until a single digit remains, with the master numbers 11, 22 and 33 exempt
//! from further reduction.

/// Master numbers that terminate reduction without being summed further.
pub const MASTER_NUMBERS: &[u32] = &[11, 22, 33];

/// Returns true if `n` is one of the master numbers.
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sums the decimal digits of `n`.
fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` to a core numerology number.
///
/// While `n > 9` and `n` is not a master number, `n` is replaced with its
/// decimal digit sum. Master numbers pass through untouched, including when
/// they appear mid-reduction.
///
/// # Edge Cases
/// - `reduce_to_core(0)` returns 0 unchanged (the loop condition is false).
///   Callers that consider 0 an invalid core number must reject their inputs
///   before reducing; see the name calculators.
pub fn reduce_to_core(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

/// Reduces `n` all the way to a single digit, not preserving master numbers.
///
/// Used for the per-component month/day reduction in the life path
/// calculation, where convention reduces components fully.
pub fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reduce_single_digits_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce_to_core(n), n);
        }
    }

    #[test]
    fn reduce_master_numbers_pass_through() {
        assert_eq!(reduce_to_core(11), 11);
        assert_eq!(reduce_to_core(22), 22);
        assert_eq!(reduce_to_core(33), 33);
    }

    #[test]
    fn reduce_preserves_master_number_reached_mid_reduction() {
        // 38 -> 3 + 8 = 11, stops at the master number
        assert_eq!(reduce_to_core(38), 11);
        // 49 -> 13 -> 4
        assert_eq!(reduce_to_core(49), 4);
    }

    #[test]
    fn reduce_multi_step() {
        // 1990 -> 19 -> 10 -> 1
        assert_eq!(reduce_to_core(1990), 1);
        // 999 -> 27 -> 9
        assert_eq!(reduce_to_core(999), 9);
    }

    #[test]
    fn reduce_zero_returns_zero() {
        assert_eq!(reduce_to_core(0), 0);
        assert_eq!(reduce_to_digit(0), 0);
    }

    #[test]
    fn reduce_to_digit_collapses_master_numbers() {
        assert_eq!(reduce_to_digit(11), 2);
        assert_eq!(reduce_to_digit(22), 4);
        assert_eq!(reduce_to_digit(33), 6);
    }

    #[test]
    fn is_master_number_matches_the_three() {
        assert!(is_master_number(11));
        assert!(is_master_number(22));
        assert!(is_master_number(33));
        assert!(!is_master_number(44));
        assert!(!is_master_number(9));
    }

    proptest! {
        #[test]
        fn reduce_result_in_valid_range(n in 1u32..=10_000) {
            let r = reduce_to_core(n);
            prop_assert!((1..=9).contains(&r) || is_master_number(r));
        }

        #[test]
        fn reduce_is_idempotent(n in 0u32..=10_000) {
            let once = reduce_to_core(n);
            prop_assert_eq!(reduce_to_core(once), once);
        }

        #[test]
        fn reduce_to_digit_is_single_digit(n in 0u32..=1_000_000) {
            prop_assert!(reduce_to_digit(n) <= 9);
        }
    }
}
