use magazine_core::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("GraphQL request failed: {0}")]
    Http(reqwest::Error),
    #[error("GraphQL endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode GraphQL response: {0}")]
    Decode(serde_json::Error),
    #[error("GraphQL query returned errors: {}", .0.join("; "))]
    Errors(Vec<String>),
    #[error("GraphQL response has no data")]
    MissingData,
    #[error("invalid content source configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Source(SourceError),
}

pub type GraphqlResult<T> = std::result::Result<T, GraphqlError>;

impl From<GraphqlError> for SourceError {
    fn from(err: GraphqlError) -> Self {
        match err {
            GraphqlError::ClientBuild(_) | GraphqlError::Http(_) => {
                SourceError::Request(err.to_string())
            }
            GraphqlError::Status { .. } | GraphqlError::Errors(_) => {
                SourceError::Backend(err.to_string())
            }
            GraphqlError::Decode(_) | GraphqlError::MissingData => {
                SourceError::Decode(err.to_string())
            }
            GraphqlError::Config(_) => SourceError::Request(err.to_string()),
            GraphqlError::Source(inner) => inner,
        }
    }
}
