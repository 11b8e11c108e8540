//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the resolver, the renderers and the request handlers. Nothing in the request path
//! reads process-wide environment variables, so tests can build a config directly.

use crate::assets::AssetUrls;
use crate::constants::{
    ARTICLES_PER_PAGE, DEFAULT_RELATED_SECTION_TITLE, TAGS_PER_PAGE, TAG_ARTICLES_PER_PAGE,
};
use crate::error::{CoreError, CoreResult};

/// Default request timeout for the content source client, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    assets: AssetUrls,
    articles_per_page: u32,
    tags_per_page: u32,
    tag_articles_per_page: u32,
    related_section_title: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with the default page sizes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the asset base URL is invalid.
    pub fn new(asset_base_url: impl AsRef<str>) -> CoreResult<Self> {
        Ok(Self {
            assets: AssetUrls::new(asset_base_url)?,
            articles_per_page: ARTICLES_PER_PAGE,
            tags_per_page: TAGS_PER_PAGE,
            tag_articles_per_page: TAG_ARTICLES_PER_PAGE,
            related_section_title: DEFAULT_RELATED_SECTION_TITLE.to_string(),
        })
    }

    /// Override the page sizes of the three list pages.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if any size is zero.
    pub fn with_page_sizes(
        mut self,
        articles_per_page: u32,
        tags_per_page: u32,
        tag_articles_per_page: u32,
    ) -> CoreResult<Self> {
        if articles_per_page == 0 || tags_per_page == 0 || tag_articles_per_page == 0 {
            return Err(CoreError::InvalidConfig(
                "page sizes must be greater than zero".into(),
            ));
        }
        self.articles_per_page = articles_per_page;
        self.tags_per_page = tags_per_page;
        self.tag_articles_per_page = tag_articles_per_page;
        Ok(self)
    }

    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }

    pub fn articles_per_page(&self) -> u32 {
        self.articles_per_page
    }

    pub fn tags_per_page(&self) -> u32 {
        self.tags_per_page
    }

    pub fn tag_articles_per_page(&self) -> u32 {
        self.tag_articles_per_page
    }

    /// Heading used for the related-articles section when an article sets none.
    pub fn related_section_title(&self) -> &str {
        &self.related_section_title
    }
}

/// Resolve the asset base URL from optional environment values.
///
/// `asset_url` wins when set and non-blank, otherwise `directus_url` is used. Assets
/// are normally served by the same CMS that answers GraphQL queries.
///
/// # Errors
///
/// Returns `CoreError::InvalidConfig` if neither value is set.
pub fn asset_base_from_env_values(
    asset_url: Option<String>,
    directus_url: Option<String>,
) -> CoreResult<String> {
    let non_blank = |v: Option<String>| {
        v.map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    non_blank(asset_url)
        .or_else(|| non_blank(directus_url))
        .ok_or_else(|| {
            CoreError::InvalidConfig(
                "MAGAZINE_ASSET_URL or DIRECTUS_URL must be set".into(),
            )
        })
}

/// Parse the HTTP timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_HTTP_TIMEOUT_SECS`].
///
/// # Errors
///
/// Returns `CoreError::InvalidConfig` if the value is not a positive integer.
pub fn http_timeout_from_env_value(value: Option<String>) -> CoreResult<u64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_HTTP_TIMEOUT_SECS),
        Some(v) => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(CoreError::InvalidConfig(format!(
                "MAGAZINE_HTTP_TIMEOUT_SECS must be a positive integer, got {v}"
            ))),
        },
    }
}
