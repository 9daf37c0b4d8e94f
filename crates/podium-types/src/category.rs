use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Maximum length of a category, in characters.
pub const MAX_CATEGORY_LEN: usize = 20;

/// Category assigned by [`Category::sanitize`] when nothing survives filtering.
pub const ANONYMOUS_CATEGORY: &str = "Anonymous";

/// Grouping key for stored records that carry no `name` at all.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Grouping key under which runs are ranked (the level or stage name).
///
/// A `Category` is always 1 to [`MAX_CATEGORY_LEN`] characters long and
/// contains no control characters. Construct one with [`Category::new`] for
/// strict validation, or [`Category::sanitize`] to clean up untrusted input.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Validate `name` as a category without altering it.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let len = name.chars().count();
        if len == 0 {
            return Err(TypeError::EmptyCategory);
        }
        if len > MAX_CATEGORY_LEN {
            return Err(TypeError::CategoryTooLong {
                len,
                max: MAX_CATEGORY_LEN,
            });
        }
        if let Some(ch) = name.chars().find(|c| c.is_control()) {
            return Err(TypeError::NonPrintableCategory(ch));
        }
        Ok(Self(name))
    }

    /// Clean an untrusted name into a category.
    ///
    /// Keeps the first [`MAX_CATEGORY_LEN`] characters, then drops anything
    /// that is not alphanumeric, a space, `_` or `-`. An empty result becomes
    /// [`ANONYMOUS_CATEGORY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use podium_types::Category;
    ///
    /// assert_eq!(Category::sanitize("Reef <b>1</b>").as_str(), "Reef b1b");
    /// assert_eq!(Category::sanitize("!!!").as_str(), "Anonymous");
    /// ```
    pub fn sanitize(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .take(MAX_CATEGORY_LEN)
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
            .collect();
        if cleaned.is_empty() {
            Self(ANONYMOUS_CATEGORY.to_string())
        } else {
            Self(cleaned)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Category {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category({:?})", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(Category::new("Level 1").unwrap().as_str(), "Level 1");
        assert!(Category::new("a".repeat(MAX_CATEGORY_LEN)).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Category::new(""), Err(TypeError::EmptyCategory));
    }

    #[test]
    fn rejects_too_long() {
        let err = Category::new("x".repeat(21)).unwrap_err();
        assert_eq!(err, TypeError::CategoryTooLong { len: 21, max: 20 });
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 20 two-byte characters.
        assert!(Category::new("é".repeat(20)).is_ok());
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(
            Category::new("bad\nname"),
            Err(TypeError::NonPrintableCategory('\n'))
        );
    }

    #[test]
    fn sanitize_truncates_before_filtering() {
        // The 21st character is dropped even though filtering would have
        // shortened the string below the limit.
        let raw = format!("{}{}", "<".repeat(19), "ab");
        assert_eq!(Category::sanitize(&raw).as_str(), "a");
    }

    #[test]
    fn sanitize_keeps_allowed_punctuation() {
        assert_eq!(Category::sanitize("deep_sea-2 run").as_str(), "deep_sea-2 run");
    }

    #[test]
    fn sanitize_falls_back_to_anonymous() {
        assert_eq!(Category::sanitize("").as_str(), ANONYMOUS_CATEGORY);
        assert_eq!(Category::sanitize("<>/\\").as_str(), ANONYMOUS_CATEGORY);
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: Category = serde_json::from_str("\"Reef\"").unwrap();
        assert_eq!(ok.as_str(), "Reef");
        assert!(serde_json::from_str::<Category>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"Reef\"");
    }

    proptest! {
        #[test]
        fn sanitize_always_yields_a_valid_category(raw in ".*") {
            let cat = Category::sanitize(&raw);
            prop_assert!(Category::new(cat.as_str()).is_ok());
        }
    }
}
