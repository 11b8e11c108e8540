//! Content source selection.
//!
//! Binaries read the environment once and pass the raw values here. A fixture
//! path selects the in-memory source; otherwise the Directus URL is required.

use crate::directus::DirectusSource;
use crate::error::{GraphqlError, GraphqlResult};
use magazine_core::config::http_timeout_from_env_value;
use magazine_core::{ContentSource, MemorySource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Where page content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    /// A JSON fixture file served by [`MemorySource`].
    Fixtures(PathBuf),
    /// A Directus instance.
    Directus {
        url: String,
        token: Option<String>,
        timeout: Duration,
    },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SourceSettings {
    /// Choose a source from optional environment values.
    ///
    /// # Arguments
    ///
    /// * `fixtures` - `MAGAZINE_FIXTURES`; when set, wins over everything else.
    /// * `directus_url` - `DIRECTUS_URL`.
    /// * `token` - `DIRECTUS_TOKEN`.
    /// * `timeout` - `MAGAZINE_HTTP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `GraphqlError::Config` if no source is configured or the timeout
    /// is not a positive integer.
    pub fn from_env_values(
        fixtures: Option<String>,
        directus_url: Option<String>,
        token: Option<String>,
        timeout: Option<String>,
    ) -> GraphqlResult<Self> {
        if let Some(path) = non_blank(fixtures) {
            return Ok(SourceSettings::Fixtures(PathBuf::from(path)));
        }

        let url = non_blank(directus_url).ok_or_else(|| {
            GraphqlError::Config("DIRECTUS_URL must be set unless MAGAZINE_FIXTURES is".into())
        })?;
        let secs =
            http_timeout_from_env_value(timeout).map_err(|e| GraphqlError::Config(e.to_string()))?;

        Ok(SourceSettings::Directus {
            url,
            token: non_blank(token),
            timeout: Duration::from_secs(secs),
        })
    }

    /// Build the configured source.
    ///
    /// # Errors
    ///
    /// Returns `GraphqlError::Source` if the fixture file cannot be loaded and
    /// `GraphqlError::ClientBuild` if the HTTP client cannot be created.
    pub fn build(&self) -> GraphqlResult<Arc<dyn ContentSource>> {
        match self {
            SourceSettings::Fixtures(path) => {
                let source = MemorySource::from_path(path).map_err(GraphqlError::Source)?;
                tracing::info!("Serving content from fixture file {}", path.display());
                Ok(Arc::new(source))
            }
            SourceSettings::Directus {
                url,
                token,
                timeout,
            } => {
                let source = DirectusSource::from_url(url, token.clone(), *timeout)?;
                tracing::info!("Serving content from {}", source.endpoint());
                Ok(Arc::new(source))
            }
        }
    }
}
