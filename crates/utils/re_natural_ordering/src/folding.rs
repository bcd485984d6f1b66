use std::cmp::Ordering;

use crate::Error;

/// How letters are case folded before two non-digit characters are compared.
///
/// Folding only ever applies to single characters.
/// Numbers are always the ASCII digits `0-9`, regardless of the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaseFolding {
    /// Locale independent simple uppercase mapping.
    ///
    /// Characters that uppercase to more than one character (like `'ß'`) are left untouched.
    #[default]
    Invariant,

    /// Only fold the ASCII letters `a-z`.
    Ascii,

    /// Turkish and Azerbaijani: dotted `'i'` uppercases to `'İ'`, dotless `'ı'` to `'I'`.
    Turkic,
}

impl CaseFolding {
    pub const ALL: [Self; 3] = [Self::Invariant, Self::Ascii, Self::Turkic];

    /// Pick the folding policy for a locale tag such as `en-US`, `tr_TR` or `az-Latn-AZ`.
    ///
    /// Accepts `und` and `invariant` for the invariant policy.
    /// Any well-formed tag for a language without special casing rules also maps to
    /// [`Self::Invariant`].
    pub fn from_locale_tag(tag: &str) -> Result<Self, Error> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::EmptyLocaleTag);
        }

        if tag.eq_ignore_ascii_case("invariant") {
            return Ok(Self::Invariant);
        }

        let mut subtags = tag.split(['-', '_']);

        let Some(language) = subtags.next() else {
            return Err(Error::EmptyLocaleTag);
        };
        if language.len() < 2
            || 8 < language.len()
            || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(Error::InvalidLocaleTag {
                tag: tag.to_owned(),
                reason: "the language must be 2-8 ASCII letters",
            });
        }

        for subtag in subtags {
            if subtag.is_empty()
                || 8 < subtag.len()
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(Error::InvalidLocaleTag {
                    tag: tag.to_owned(),
                    reason: "subtags must be 1-8 ASCII letters or digits",
                });
            }
        }

        match language.to_ascii_lowercase().as_str() {
            "tr" | "tur" | "az" | "aze" => Ok(Self::Turkic),
            _ => {
                log::debug!("No special case folding for locale {tag:?}, using invariant folding");
                Ok(Self::Invariant)
            }
        }
    }

    /// Case fold a single character.
    #[inline]
    pub fn fold(self, c: char) -> char {
        match self {
            Self::Invariant => simple_uppercase(c),
            Self::Ascii => c.to_ascii_uppercase(),
            Self::Turkic => match c {
                'i' => 'İ',
                'ı' => 'I',
                _ => simple_uppercase(c),
            },
        }
    }

    /// Compare two characters, ignoring case.
    ///
    /// Characters that are equal after folding are equal,
    /// otherwise their folded scalar values decide.
    #[inline]
    pub fn compare_chars(self, a: char, b: char) -> Ordering {
        if a == b {
            Ordering::Equal
        } else {
            self.fold(a).cmp(&self.fold(b))
        }
    }
}

impl std::fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invariant => write!(f, "invariant"),
            Self::Ascii => write!(f, "ascii"),
            Self::Turkic => write!(f, "turkic"),
        }
    }
}

/// Parses either a policy name as printed by [`std::fmt::Display`], or a locale tag.
impl std::str::FromStr for CaseFolding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(folding) = Self::ALL
            .into_iter()
            .find(|folding| s.eq_ignore_ascii_case(&folding.to_string()))
        {
            return Ok(folding);
        }
        Self::from_locale_tag(s)
    }
}

fn simple_uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        for folding in CaseFolding::ALL {
            assert_eq!(folding.fold('a'), 'A');
            assert_eq!(folding.fold('Z'), 'Z');
            assert_eq!(folding.fold('7'), '7');
            assert_eq!(folding.fold('.'), '.');
        }

        assert_eq!(CaseFolding::Invariant.fold('é'), 'É');
        assert_eq!(CaseFolding::Ascii.fold('é'), 'é');
        assert_eq!(CaseFolding::Invariant.fold('ß'), 'ß', "expands to SS, so leave it");

        assert_eq!(CaseFolding::Invariant.fold('i'), 'I');
        assert_eq!(CaseFolding::Turkic.fold('i'), 'İ');
        assert_eq!(CaseFolding::Turkic.fold('ı'), 'I');
    }

    #[test]
    fn test_compare_chars() {
        let folding = CaseFolding::Invariant;
        assert_eq!(folding.compare_chars('a', 'A'), Ordering::Equal);
        assert_eq!(folding.compare_chars('a', 'b'), Ordering::Less);
        assert_eq!(folding.compare_chars('b', 'A'), Ordering::Greater);
        assert_eq!(folding.compare_chars('a', '1'), Ordering::Greater);
        assert_eq!(folding.compare_chars('é', 'É'), Ordering::Equal);

        assert_eq!(CaseFolding::Ascii.compare_chars('é', 'É'), Ordering::Greater);

        assert_eq!(CaseFolding::Invariant.compare_chars('i', 'I'), Ordering::Equal);
        assert_eq!(CaseFolding::Turkic.compare_chars('i', 'I'), Ordering::Greater);
        assert_eq!(CaseFolding::Turkic.compare_chars('i', 'İ'), Ordering::Equal);
    }

    #[test]
    fn test_from_locale_tag() {
        for tag in ["en", "en-US", "en_GB", "de-DE", "und", "invariant", "Invariant", " sv "] {
            assert_eq!(
                CaseFolding::from_locale_tag(tag),
                Ok(CaseFolding::Invariant),
                "{tag:?}"
            );
        }

        for tag in ["tr", "tr-TR", "TR_tr", "az-Latn-AZ", "tur"] {
            assert_eq!(
                CaseFolding::from_locale_tag(tag),
                Ok(CaseFolding::Turkic),
                "{tag:?}"
            );
        }

        assert_eq!("tr-TR".parse::<CaseFolding>(), Ok(CaseFolding::Turkic));
        assert_eq!("en".parse::<CaseFolding>(), Ok(CaseFolding::Invariant));
    }

    #[test]
    fn test_bad_locale_tags() {
        assert_eq!(CaseFolding::from_locale_tag(""), Err(Error::EmptyLocaleTag));
        assert_eq!(CaseFolding::from_locale_tag("   "), Err(Error::EmptyLocaleTag));

        for tag in ["e", "e1", "en--US", "en-", "-US", "en US", "en-ÜS", "toolonglanguage"] {
            assert!(
                matches!(
                    CaseFolding::from_locale_tag(tag),
                    Err(Error::InvalidLocaleTag { .. })
                ),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CaseFolding::Invariant.to_string(), "invariant");
        assert_eq!(CaseFolding::Ascii.to_string(), "ascii");
        assert_eq!(CaseFolding::Turkic.to_string(), "turkic");

        for folding in CaseFolding::ALL {
            assert_eq!(folding.to_string().parse::<CaseFolding>(), Ok(folding));
        }
    }
}
