//! Content source boundary.
//!
//! Everything the pages show comes through [`ContentSource`]. The production
//! implementation queries the CMS over GraphQL (see the `magazine-graphql` crate);
//! [`MemorySource`] serves a JSON fixture for tests and local development.
//!
//! Not-found is part of the contract: an unknown article slug is `Ok(None)`,
//! distinct from an error and from an empty list.

mod memory;

pub use memory::{Fixture, MemorySource};

use crate::blocks::BlockRecord;
use crate::error::SourceResult;
use crate::models::{Article, ArticleSummary, Listing, Tag};
use async_trait::async_trait;
use magazine_types::Slug;

/// Sort orders understood by the content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest `publishedAt` first.
    NewestFirst,
    /// Alphabetical by `name`.
    ByName,
}

impl SortKey {
    /// The sort argument the CMS expects.
    pub fn as_directus(self) -> &'static str {
        match self {
            SortKey::NewestFirst => "-publishedAt",
            SortKey::ByName => "name",
        }
    }
}

/// Which slice of a list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u32,
    /// One-based page number.
    pub page: u32,
}

impl PageRequest {
    pub fn new(page_size: u32, page: u32) -> Self {
        Self { page_size, page }
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1).saturating_mul(self.page_size as usize)
    }
}

/// Read-only access to articles, tags and block records.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The article with `slug`, or `None` when no such article exists.
    async fn article_by_slug(&self, slug: &Slug) -> SourceResult<Option<Article>>;

    /// Block records referenced by the article's content, scoped to that article.
    async fn blocks_for_article(&self, article_id: &str) -> SourceResult<Vec<BlockRecord>>;

    /// One page of all articles, with the total article count.
    async fn article_list(
        &self,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>>;

    /// Tags in `sort` order. With `page` set, one page with the total tag count;
    /// without it, every tag and possibly no count.
    async fn tag_list(
        &self,
        sort: SortKey,
        page: Option<PageRequest>,
    ) -> SourceResult<Listing<Tag>>;

    /// One page of articles tagged `tag_slug`, with the total match count. An
    /// unknown tag yields an empty listing; callers check tag existence first.
    async fn articles_by_tag(
        &self,
        tag_slug: &Slug,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>>;
}
