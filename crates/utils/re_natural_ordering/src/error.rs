/// Errors when configuring a [`crate::NaturalComparator`].
///
/// Comparing strings never fails; these can only happen at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("locale tag is empty")]
    EmptyLocaleTag,

    #[error("invalid locale tag {tag:?}: {reason}")]
    InvalidLocaleTag { tag: String, reason: &'static str },
}
