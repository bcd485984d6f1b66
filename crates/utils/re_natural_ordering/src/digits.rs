//! Number runs: maximal sequences of the ASCII digits `0-9`.
//!
//! Runs are compared by magnitude without ever being parsed into an integer,
//! so arbitrarily long runs work fine.

use std::cmp::Ordering;

/// The longest prefix of `text` made up of ASCII digits.
///
/// Only `0-9` count as digits, other Unicode decimal digits do not.
#[inline]
pub fn digit_run(text: &str) -> &str {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    // ASCII digits are single bytes, so `end` is always on a char boundary.
    &text[..end]
}

/// Removes any leading `'0'` from a run of digits.
///
/// `"00100200"` becomes `"100200"`, and a run of only zeroes becomes `""`.
/// A run without leading zeroes is returned as-is.
#[inline]
pub fn trim_leading_zeroes(run: &str) -> &str {
    run.trim_start_matches('0')
}

/// Compares two runs of digits by their numeric value.
///
/// Leading zeroes are ignored when comparing magnitudes, so `"013" > "12"`.
///
/// When both runs have the same non-zero value but a different number of leading zeroes,
/// the one with more leading zeroes is the smaller one: `"010" < "10"`.
/// This mirrors how common file managers order their folders.
/// Runs made up of only zeroes are all equal to each other.
///
/// Both arguments must only contain ASCII digits.
pub fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    debug_assert!(a.bytes().all(|c| c.is_ascii_digit()), "{a:?} is not a digit run");
    debug_assert!(b.bytes().all(|c| c.is_ascii_digit()), "{b:?} is not a digit run");

    let trimmed_a = trim_leading_zeroes(a);
    let trimmed_b = trim_leading_zeroes(b);

    match (trimmed_a.is_empty(), trimmed_b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    // Without leading zeroes a longer number is always bigger: 1000 > 999.
    // Same length means plain byte order decides.
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        // Same value: more leading zeroes sorts first.
        .then_with(|| b.len().cmp(&a.len()))
}
