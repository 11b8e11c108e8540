//! Asset URL construction.
//!
//! The CMS serves uploaded files at `<base>/assets/<id>`. Every image reference in
//! the data model is an opaque asset id, turned into a URL here and nowhere else.

use crate::constants::ASSETS_PATH_SEGMENT;
use crate::error::{CoreError, CoreResult};

/// Builds asset URLs from a fixed base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    /// Create an `AssetUrls` for the given base URL.
    ///
    /// Trailing slashes are trimmed so `http://cms/` and `http://cms` produce
    /// identical URLs.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the base is blank or is not an
    /// `http://` or `https://` URL.
    pub fn new(base: impl AsRef<str>) -> CoreResult<Self> {
        let base = base.as_ref().trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(CoreError::InvalidConfig(
                "asset base URL cannot be empty".into(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CoreError::InvalidConfig(format!(
                "asset base URL must start with http:// or https://, got {base}"
            )));
        }
        Ok(Self {
            base: base.to_string(),
        })
    }

    /// URL of the asset with the given id.
    pub fn url(&self, asset_id: &str) -> String {
        format!("{}/{}/{}", self.base, ASSETS_PATH_SEGMENT, asset_id)
    }
}
