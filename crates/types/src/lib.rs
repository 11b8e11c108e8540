/// Errors that can occur when creating validated slug values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlugError {
    /// The input was empty or contained only whitespace
    #[error("slug cannot be empty")]
    Empty,
    /// The input was longer than [`Slug::MAX_LEN`] bytes
    #[error("slug exceeds maximum length of {max} bytes")]
    TooLong { max: usize },
    /// The input contained a path separator or a control character
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

/// A URL path segment identifying an article or tag.
///
/// Slugs are trimmed on construction and accept whatever the CMS stores for a
/// single path segment: anything except `/` and control characters. Links
/// percent-encode them, and queries pass them as GraphQL variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Longest slug accepted, in bytes.
    pub const MAX_LEN: usize = 200;

    /// Creates a new `Slug` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` for blank input, `SlugError::TooLong` when the
    /// trimmed input exceeds [`Slug::MAX_LEN`], or `SlugError::InvalidChar` for
    /// the first `/` or control character.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SlugError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(SlugError::TooLong { max: Self::MAX_LEN });
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| *c == '/' || c.is_control())
        {
            return Err(SlugError::InvalidChar(c));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::new(s)
    }
}

impl serde::Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_trims_whitespace() {
        let slug = Slug::new("  rust-in-production  ").unwrap();
        assert_eq!(slug.as_str(), "rust-in-production");
    }

    #[test]
    fn test_slug_rejects_blank() {
        assert_eq!(Slug::new("   "), Err(SlugError::Empty));
    }

    #[test]
    fn test_slug_rejects_path_separators_and_controls() {
        assert_eq!(Slug::new("../etc"), Err(SlugError::InvalidChar('/')));
        assert_eq!(Slug::new("a\u{0}b"), Err(SlugError::InvalidChar('\u{0}')));
    }

    #[test]
    fn test_slug_accepts_whatever_the_cms_stores() {
        assert!(Slug::new("статья-1").is_ok());
        assert!(Slug::new("v1.2_notes").is_ok());
        assert!(Slug::new("c++-tips").is_ok());
        assert!(Slug::new("don't-panic").is_ok());
        assert!(Slug::new("50%-off").is_ok());
    }

    #[test]
    fn test_slug_rejects_overlong_input() {
        let long = "a".repeat(Slug::MAX_LEN + 1);
        assert_eq!(
            Slug::new(long),
            Err(SlugError::TooLong { max: Slug::MAX_LEN })
        );
    }

    #[test]
    fn test_slug_deserialize_validates() {
        let ok: Slug = serde_json::from_str("\"design\"").unwrap();
        assert_eq!(ok.as_str(), "design");
        assert!(serde_json::from_str::<Slug>("\"bad/slug\"").is_err());
    }
}
