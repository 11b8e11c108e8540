use anyhow::Context;
use clap::{Parser, Subcommand};
use magazine_core::config::asset_base_from_env_values;
use magazine_core::pagination::current_page;
use magazine_core::resolver::{resolve, LogUnresolved};
use magazine_core::{
    AssetUrls, BlockRecord, ContentResolver, CoreConfig, DocumentNode, PageRequest, Pagination,
    ResolvedNode, Slug, SortKey,
};
use magazine_graphql::SourceSettings;
use magazine_render::{article_page, render_body, tag_list_page};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "magazine")]
#[command(about = "Magazine front end CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a document against block records and list each position
    Resolve {
        /// Rich-text document JSON file
        document: PathBuf,
        /// Block records JSON file (an array)
        blocks: PathBuf,
    },
    /// Resolve and render an article body to HTML
    Render {
        /// Rich-text document JSON file
        document: PathBuf,
        /// Block records JSON file (an array)
        blocks: PathBuf,
        /// Asset base URL (defaults to MAGAZINE_ASSET_URL or DIRECTUS_URL)
        #[arg(long)]
        asset_url: Option<String>,
    },
    /// Show the page links for a list
    Pages {
        /// Total number of items
        #[arg(long)]
        total: u64,
        /// Items per page
        #[arg(long)]
        size: u32,
        /// Requested page, as it would appear in the query string
        #[arg(long)]
        page: Option<String>,
    },
    /// Fetch an article from the configured source and print its page
    Article {
        /// Article slug
        slug: String,
    },
    /// Fetch tags from the configured source and print the tag list page
    Tags {
        /// Requested page
        #[arg(long)]
        page: Option<String>,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// One line per resolved position.
fn describe(position: usize, node: &ResolvedNode) -> String {
    match node {
        ResolvedNode::Content(content) => format!("{position}: content {}", content.kind),
        ResolvedNode::Block { id, block } => {
            format!("{position}: block {} (id {id})", block.kind().collection())
        }
        ResolvedNode::Nothing(reason) => format!("{position}: nothing ({reason})"),
    }
}

fn config_from_env() -> anyhow::Result<CoreConfig> {
    let base = asset_base_from_env_values(
        std::env::var("MAGAZINE_ASSET_URL").ok(),
        std::env::var("DIRECTUS_URL").ok(),
    )?;
    Ok(CoreConfig::new(base)?)
}

fn source_settings_from_env() -> anyhow::Result<SourceSettings> {
    Ok(SourceSettings::from_env_values(
        std::env::var("MAGAZINE_FIXTURES").ok(),
        std::env::var("DIRECTUS_URL").ok(),
        std::env::var("DIRECTUS_TOKEN").ok(),
        std::env::var("MAGAZINE_HTTP_TIMEOUT_SECS").ok(),
    )?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("magazine=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Resolve { document, blocks }) => {
            let document: DocumentNode = read_json(&document)?;
            let records: Vec<BlockRecord> = read_json(&blocks)?;
            for (position, node) in resolve(&document, &records).iter().enumerate() {
                println!("{}", describe(position, node));
            }
        }
        Some(Commands::Render {
            document,
            blocks,
            asset_url,
        }) => {
            let document: DocumentNode = read_json(&document)?;
            let records: Vec<BlockRecord> = read_json(&blocks)?;
            let base = match asset_url {
                Some(url) => url,
                None => asset_base_from_env_values(
                    std::env::var("MAGAZINE_ASSET_URL").ok(),
                    std::env::var("DIRECTUS_URL").ok(),
                )?,
            };
            let assets = AssetUrls::new(base)?;
            let resolved = ContentResolver::new(&records)
                .resolve_with(&document, &LogUnresolved { article: "-" });
            println!("{}", render_body(&resolved, &assets).into_string());
        }
        Some(Commands::Pages { total, size, page }) => {
            if size == 0 {
                anyhow::bail!("--size must be greater than zero");
            }
            let pagination = Pagination::new(total, size, page.as_deref());
            let pages: Vec<String> = pagination.pages().iter().map(u32::to_string).collect();
            println!("pages: {}", pages.join(" "));
            println!("current: {}", pagination.current());
        }
        Some(Commands::Article { slug }) => {
            let cfg = config_from_env()?;
            let source = source_settings_from_env()?.build()?;
            let slug: Slug = slug.parse()?;
            match source.article_by_slug(&slug).await? {
                Some(article) => {
                    let records = source.blocks_for_article(&article.id).await?;
                    let body = match &article.content {
                        Some(document) => ContentResolver::new(&records).resolve_with(
                            document,
                            &LogUnresolved {
                                article: &article.slug,
                            },
                        ),
                        None => Vec::new(),
                    };
                    println!("{}", article_page(&article, &body, &cfg).into_string());
                }
                None => eprintln!("No article with slug: {}", slug),
            }
        }
        Some(Commands::Tags { page }) => {
            let cfg = config_from_env()?;
            let source = source_settings_from_env()?.build()?;
            let size = cfg.tags_per_page();
            let current = current_page(page.as_deref());
            let listing = source
                .tag_list(SortKey::ByName, Some(PageRequest::new(size, current)))
                .await?;
            let pagination = Pagination::for_page(listing.total_or_len(), size, current);
            println!("{}", tag_list_page(&listing.items, &pagination).into_string());
        }
        None => {
            println!("Use 'magazine --help' for commands");
        }
    }

    Ok(())
}
