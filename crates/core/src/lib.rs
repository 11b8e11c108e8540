//! # Magazine Core
//!
//! Core logic for the magazine front end.
//!
//! This crate contains pure data operations:
//! - The article data model and the rich-text document tree
//! - The block registry and the flexible-content resolver
//! - Pagination arithmetic for list pages
//! - The [`source::ContentSource`] boundary and an in-memory implementation
//!
//! **No HTTP or HTML concerns**: the GraphQL client lives in `magazine-graphql`,
//! rendering in `magazine-render`, and the web server in `magazine-web`.

pub mod assets;
pub mod blocks;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod ids;
pub mod models;
pub mod pagination;
pub mod resolver;
pub mod source;
pub mod validation;

pub use assets::AssetUrls;
pub use blocks::{Block, BlockKind, BlockRecord, Layout};
pub use config::CoreConfig;
pub use document::DocumentNode;
pub use error::{CoreError, CoreResult, SourceError, SourceResult};
pub use magazine_types::{Slug, SlugError};
pub use models::{Article, ArticleSummary, Asset, Author, Listing, Tag};
pub use pagination::Pagination;
pub use resolver::{ContentResolver, ResolvedNode, Unresolved};
pub use source::{ContentSource, MemorySource, PageRequest, SortKey};
