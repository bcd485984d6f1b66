//! Natural ordering for strings, so that `"file2" < "file10"`.
//!
//! Runs of digits are compared by their numeric value instead of one character at a time,
//! and letters are compared ignoring case:
//!
//! ```
//! use re_natural_ordering::NaturalSortExt as _;
//!
//! let mut files = vec![
//!     "file20.txt",
//!     "file3.txt",
//!     "file100.txt",
//!     "File1.txt",
//!     "file10.txt",
//!     "file2.txt",
//! ];
//! files.natural_sort();
//! assert_eq!(
//!     files,
//!     ["File1.txt", "file2.txt", "file3.txt", "file10.txt", "file20.txt", "file100.txt"]
//! );
//! ```
//!
//! Only whole numbers made of the ASCII digits `0-9` are understood.
//! There is no support for decimal fractions (`"21.49" > "21.5"`), since that would break
//! ordering of version numbers like `1.10.0`. Signs and scientific notation are not supported
//! either: `-` and `+` are ordinary characters.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod comparator;
mod digits;
mod error;
mod folding;
mod ordered;
mod sort;

use std::cmp::Ordering;

pub use self::{
    comparator::NaturalComparator,
    digits::{compare_digit_runs, digit_run, trim_leading_zeroes},
    error::Error,
    folding::CaseFolding,
    ordered::Natural,
    sort::NaturalSortExt,
};

/// Natural ordering for strings, so that `"file5" < "file10"`.
///
/// Uses [`NaturalComparator::INVARIANT`].
#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    NaturalComparator::INVARIANT.compare(a, b)
}

/// Like [`compare`], but a missing string is less than any string.
#[inline]
pub fn compare_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    NaturalComparator::INVARIANT.compare_opt(a, b)
}
