use std::cmp::Ordering;

use crate::{
    CaseFolding, Error,
    digits::{compare_digit_runs, digit_run},
};

/// Compares strings naturally, so that `"file2" < "file10"`.
///
/// Runs of the ASCII digits `0-9` found at the same position in both strings are compared by
/// their numeric value. Everything else is compared one character at a time, ignoring case
/// according to the configured [`CaseFolding`].
///
/// There is no support for decimal fractions, signs, or scientific notation:
/// `"21.49" > "21.5"` because `49 > 5`, and `-` and `+` are ordinary characters.
///
/// The comparator holds no state besides its folding policy,
/// so a single instance can be shared freely across threads.
///
/// ```
/// # use std::cmp::Ordering;
/// # use re_natural_ordering::NaturalComparator;
/// let comparator = NaturalComparator::new();
/// assert_eq!(comparator.compare("file2.txt", "file10.txt"), Ordering::Less);
/// assert_eq!(comparator.compare("b", "A"), Ordering::Greater);
/// assert_eq!(comparator.compare("10", "010"), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct NaturalComparator {
    #[cfg_attr(feature = "serde", serde(default))]
    folding: CaseFolding,
}

impl NaturalComparator {
    /// Uses [`CaseFolding::Invariant`].
    pub const INVARIANT: Self = Self::with_folding(CaseFolding::Invariant);

    /// A comparator using [`CaseFolding::Invariant`].
    #[inline]
    pub const fn new() -> Self {
        Self::INVARIANT
    }

    #[inline]
    pub const fn with_folding(folding: CaseFolding) -> Self {
        Self { folding }
    }

    /// A comparator folding case the way the given locale does, e.g. `tr-TR`.
    ///
    /// See [`CaseFolding::from_locale_tag`].
    pub fn for_locale(tag: &str) -> Result<Self, Error> {
        let folding = CaseFolding::from_locale_tag(tag)?;
        Ok(Self::with_folding(folding))
    }

    #[inline]
    pub fn folding(&self) -> CaseFolding {
        self.folding
    }

    /// Compare two strings in natural order.
    ///
    /// Walks both strings front to back. When both are at a digit, the two number runs
    /// are compared numerically (see [`crate::compare_digit_runs`]) and each string skips past
    /// its own run. Otherwise the two characters are compared, ignoring case.
    ///
    /// If everything matches until one string ends, the shorter string is less.
    /// If both end together, the one with more characters in total is greater,
    /// which only happens with runs of zeroes: `"00" > "0"`.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut a_rest = a;
        let mut b_rest = b;

        loop {
            let mut a_chars = a_rest.chars();
            let mut b_chars = b_rest.chars();

            let (Some(a_char), Some(b_char)) = (a_chars.next(), b_chars.next()) else {
                break;
            };

            if a_char.is_ascii_digit() && b_char.is_ascii_digit() {
                let a_number = digit_run(a_rest);
                let b_number = digit_run(b_rest);

                let ordering = compare_digit_runs(a_number, b_number);
                if ordering.is_ne() {
                    return ordering;
                }

                a_rest = &a_rest[a_number.len()..];
                b_rest = &b_rest[b_number.len()..];
            } else {
                let ordering = self.folding.compare_chars(a_char, b_char);
                if ordering.is_ne() {
                    return ordering;
                }

                a_rest = a_chars.as_str();
                b_rest = b_chars.as_str();
            }
        }

        (!a_rest.is_empty())
            .cmp(&!b_rest.is_empty())
            .then_with(|| a.chars().count().cmp(&b.chars().count()))
    }

    /// Like [`Self::compare`], but a missing string is less than any string.
    #[inline]
    pub fn compare_opt(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }
}
