//! Digit reduction and name/date number derivation.
//!
//! # Responsibility
//! - Fold integers down to a single digit by repeated digit sums.
//! - Map letters to digits through the fixed alphabet table.
//! - Derive the name number and birth number used by both grids.
//!
//! # Invariants
//! - Every function here is pure and total; malformed input is ignored,
//!   never rejected.
//! - Reduced values are in `[0, 9]`; `0` only appears for empty input.

/// Digit value per letter, indexed by `letter - 'A'`.
///
/// A J S -> 1, B K T -> 2, ... H Q Z -> 8, I R -> 9.
const LETTER_DIGITS: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A..I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J..R
    1, 2, 3, 4, 5, 6, 7, 8, // S..Z
];

/// Reduces `value` to a single digit by repeatedly summing its base-10 digits.
///
/// Returns `0` only when `value == 0`.
pub fn reduce_digits(value: u64) -> u32 {
    let mut total = value;
    while total > 9 {
        total = digit_sum(total);
    }
    // total <= 9 here.
    total as u32
}

/// Returns the digit mapped to `letter`, case-insensitively.
///
/// Anything outside `A..=Z` maps to `0` and contributes nothing to sums.
pub fn letter_to_digit(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_DIGITS[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Computes the name number: reduced sum of all letter digits in `name`.
///
/// Empty input or input without letters yields `0`.
pub fn name_number(name: &str) -> u32 {
    let total: u64 = name
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| u64::from(letter_to_digit(c)))
        .sum();
    reduce_digits(total)
}

/// Computes the birth number: reduced sum of all digit characters in `date`.
///
/// The date format is left to the caller; separators are ignored.
pub fn birth_number(date: &str) -> u32 {
    let total: u64 = date_digits(date).map(u64::from).sum();
    reduce_digits(total)
}

/// Iterates over the ASCII digit characters of `date` as numeric values.
pub(crate) fn date_digits(date: &str) -> impl Iterator<Item = u32> + '_ {
    date.chars().filter_map(|c| c.to_digit(10))
}

fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::{birth_number, date_digits, letter_to_digit, name_number, reduce_digits};

    #[test]
    fn reduce_digits_stays_in_single_digit_range_and_is_idempotent() {
        for value in (0..5_000u64).chain([u64::MAX, 999_999_999_999, 10, 19, 99]) {
            let reduced = reduce_digits(value);
            assert!(reduced <= 9, "reduce_digits({value}) = {reduced}");
            assert_eq!(reduce_digits(u64::from(reduced)), reduced);
        }
    }

    #[test]
    fn reduce_digits_folds_repeatedly() {
        assert_eq!(reduce_digits(0), 0);
        assert_eq!(reduce_digits(9), 9);
        assert_eq!(reduce_digits(10), 1);
        // 99 -> 18 -> 9
        assert_eq!(reduce_digits(99), 9);
        // 1990 -> 19 -> 10 -> 1
        assert_eq!(reduce_digits(1990), 1);
    }

    #[test]
    fn letter_table_is_case_insensitive_and_ignores_non_letters() {
        assert_eq!(letter_to_digit('A'), 1);
        assert_eq!(letter_to_digit('a'), 1);
        assert_eq!(letter_to_digit('S'), 1);
        assert_eq!(letter_to_digit('r'), 9);
        assert_eq!(letter_to_digit('Z'), 8);
        assert_eq!(letter_to_digit('7'), 0);
        assert_eq!(letter_to_digit(' '), 0);
        assert_eq!(letter_to_digit('é'), 0);
    }

    #[test]
    fn name_number_handles_empty_and_single_letter() {
        assert_eq!(name_number(""), 0);
        assert_eq!(name_number("  -- "), 0);
        assert_eq!(name_number("A"), letter_to_digit('A'));
        assert_eq!(name_number("A"), 1);
    }

    #[test]
    fn name_number_sums_letters_only() {
        // A(1) + s(1) + h(8) + a(1) = 11 -> 2
        assert_eq!(name_number("Asha"), 2);
        assert_eq!(name_number("A-s h.a!"), 2);
    }

    #[test]
    fn birth_number_ignores_separators() {
        // 0+1+0+1+1+9+9+0 = 21 -> 3
        assert_eq!(birth_number("01011990"), 3);
        assert_eq!(birth_number("01/01/1990"), 3);
        assert_eq!(birth_number(""), 0);
    }

    #[test]
    fn date_digits_skips_non_ascii_digits() {
        let digits: Vec<u32> = date_digits("1²-٣4").collect();
        assert_eq!(digits, vec![1, 4]);
    }
}
