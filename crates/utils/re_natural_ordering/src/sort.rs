use std::cmp::Ordering;

use crate::NaturalComparator;

/// Extends slices (and so `Vec`) with natural sorting routines.
///
/// All sorts are stable and use [`NaturalComparator::INVARIANT`] unless stated otherwise.
///
/// ```
/// use re_natural_ordering::NaturalSortExt as _;
///
/// let mut files = vec!["file10.txt", "file2.txt", "file1.txt"];
/// files.natural_sort();
/// assert_eq!(files, ["file1.txt", "file2.txt", "file10.txt"]);
/// ```
pub trait NaturalSortExt<T> {
    fn natural_sort(&mut self)
    where
        T: AsRef<str>;

    /// Largest first.
    fn natural_sort_descending(&mut self)
    where
        T: AsRef<str>;

    /// Sort using a specific comparator, e.g. one for a given locale.
    fn natural_sort_with(&mut self, comparator: &NaturalComparator)
    where
        T: AsRef<str>;

    /// Sort by a string key of each element.
    fn natural_sort_by_key<F>(&mut self, key: F)
    where
        F: FnMut(&T) -> &str;

    /// Check whether `self` is sorted in natural order.
    fn is_natural_sorted(&self) -> bool
    where
        T: AsRef<str>;
}

impl<T> NaturalSortExt<T> for [T] {
    #[inline]
    fn natural_sort(&mut self)
    where
        T: AsRef<str>,
    {
        self.natural_sort_with(&NaturalComparator::INVARIANT);
    }

    #[inline]
    fn natural_sort_descending(&mut self)
    where
        T: AsRef<str>,
    {
        let comparator = NaturalComparator::INVARIANT;
        self.sort_by(|a, b| comparator.compare(b.as_ref(), a.as_ref()));
    }

    #[inline]
    fn natural_sort_with(&mut self, comparator: &NaturalComparator)
    where
        T: AsRef<str>,
    {
        self.sort_by(|a, b| comparator.compare(a.as_ref(), b.as_ref()));
    }

    #[inline]
    fn natural_sort_by_key<F>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> &str,
    {
        let comparator = NaturalComparator::INVARIANT;
        self.sort_by(|a, b| {
            let a = key(a);
            let b = key(b);
            comparator.compare(a, b)
        });
    }

    fn is_natural_sorted(&self) -> bool
    where
        T: AsRef<str>,
    {
        let comparator = NaturalComparator::INVARIANT;
        !self.windows(2).any(|values| {
            comparator.compare(values[0].as_ref(), values[1].as_ref()) == Ordering::Greater
        })
    }
}
