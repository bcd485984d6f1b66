use std::cmp::Ordering;

use crate::NaturalComparator;

/// Helper for ordering strings naturally, e.g. as keys in a `BTreeMap` or with `sort_by_key`.
///
/// Uses [`NaturalComparator::INVARIANT`].
/// Note that equality follows the ordering, so `Natural("a") == Natural("A")`.
///
/// ```
/// # use re_natural_ordering::Natural;
/// let files: std::collections::BTreeSet<_> =
///     ["img10.png", "img2.png", "img1.png"].into_iter().map(Natural).collect();
/// let files: Vec<&str> = files.into_iter().map(Natural::into_inner).collect();
/// assert_eq!(files, ["img1.png", "img2.png", "img10.png"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural<S>(pub S);

impl<S> Natural<S> {
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<str>> PartialEq for Natural<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: AsRef<str>> Eq for Natural<S> {}

impl<S: AsRef<str>> PartialOrd for Natural<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Ord for Natural<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        NaturalComparator::INVARIANT.compare(self.0.as_ref(), other.0.as_ref())
    }
}

impl<S> From<S> for Natural<S> {
    #[inline]
    fn from(s: S) -> Self {
        Self(s)
    }
}

impl<S: AsRef<str>> AsRef<str> for Natural<S> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl<S: std::fmt::Display> std::fmt::Display for Natural<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn test_natural_works_like_compare() {
    let strs = ["a", "a0", "a1", "a1a", "a1b", "a2", "a10", "a20", "b"];

    for x in strs {
        for y in strs {
            assert_eq!(
                Natural(x.to_owned()).cmp(&Natural(y.to_owned())),
                crate::compare(x, y),
                "Natural should work the same as compare for {x:?} and {y:?}"
            );
        }
    }

    assert_eq!(Natural("abc"), Natural("ABC"));
    assert_ne!(Natural("abc"), Natural("abd"));
}
