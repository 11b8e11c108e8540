use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magazine_core::config::asset_base_from_env_values;
use magazine_core::CoreConfig;
use magazine_graphql::SourceSettings;
use magazine_web::{router, AppState};

/// Main entry point for the magazine server
///
/// Resolves configuration from the environment once, picks the content source and
/// serves the magazine pages over HTTP.
///
/// # Environment Variables
/// - `MAGAZINE_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `DIRECTUS_URL`: Directus base URL, required unless `MAGAZINE_FIXTURES` is set
/// - `DIRECTUS_TOKEN`: Static Directus access token (optional)
/// - `MAGAZINE_ASSET_URL`: Base URL for asset links (default: `DIRECTUS_URL`)
/// - `MAGAZINE_FIXTURES`: JSON fixture file to serve instead of Directus (optional)
/// - `MAGAZINE_HTTP_TIMEOUT_SECS`: Directus request timeout (default: 30)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid, the address cannot be bound,
///   or the server fails while running
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("magazine=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MAGAZINE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let asset_base = asset_base_from_env_values(
        std::env::var("MAGAZINE_ASSET_URL").ok(),
        std::env::var("DIRECTUS_URL").ok(),
    )?;
    let cfg = Arc::new(CoreConfig::new(asset_base)?);

    let source = SourceSettings::from_env_values(
        std::env::var("MAGAZINE_FIXTURES").ok(),
        std::env::var("DIRECTUS_URL").ok(),
        std::env::var("DIRECTUS_TOKEN").ok(),
        std::env::var("MAGAZINE_HTTP_TIMEOUT_SECS").ok(),
    )?
    .build()?;

    let app = router(AppState::new(cfg, source));

    tracing::info!("-- Starting magazine on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
