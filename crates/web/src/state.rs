use magazine_core::{ContentSource, CoreConfig};
use std::sync::Arc;

/// Application state shared by all page handlers.
///
/// Both parts are immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub source: Arc<dyn ContentSource>,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, source: Arc<dyn ContentSource>) -> Self {
        Self { cfg, source }
    }
}
