#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] magazine_types::SlugError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Failures raised by a [`crate::source::ContentSource`].
///
/// None of these are recovered inside the core. They propagate to the caller,
/// which turns them into a generic failure response.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("content source request failed: {0}")]
    Request(String),
    #[error("content source returned errors: {0}")]
    Backend(String),
    #[error("failed to decode content source response: {0}")]
    Decode(String),
    #[error("failed to read fixture file: {0}")]
    FixtureRead(std::io::Error),
    #[error("failed to parse fixture file: {0}")]
    FixtureParse(serde_json::Error),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
