//! In-memory content source backed by a JSON fixture.

use super::{ContentSource, PageRequest, SortKey};
use crate::blocks::BlockRecord;
use crate::error::{SourceError, SourceResult};
use crate::models::{Article, ArticleSummary, Listing, Tag};
use async_trait::async_trait;
use magazine_types::Slug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Fixture file layout: flat articles and tags, plus block records keyed by the
/// id of the article that owns them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub blocks: HashMap<String, Vec<BlockRecord>>,
}

/// A [`ContentSource`] that answers from a loaded [`Fixture`].
///
/// Sorting and paging mirror the CMS: newest-first compares `publishedAt` as
/// ISO-8601 text (missing dates sort last), pages past the end are empty.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    fixture: Fixture,
}

impl MemorySource {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    /// Load a fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FixtureRead` if the file cannot be read, or
    /// `SourceError::FixtureParse` if it is not a valid fixture.
    pub fn from_path(path: &Path) -> SourceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(SourceError::FixtureRead)?;
        let fixture = serde_json::from_str(&contents).map_err(SourceError::FixtureParse)?;
        Ok(Self::new(fixture))
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }
}

fn sorted_summaries<'a>(
    articles: impl Iterator<Item = &'a Article>,
    sort: SortKey,
) -> Vec<ArticleSummary> {
    let mut summaries: Vec<ArticleSummary> = articles.map(Article::summary).collect();
    match sort {
        SortKey::NewestFirst => {
            summaries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        }
        SortKey::ByName => summaries.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    summaries
}

fn page_of<T>(items: Vec<T>, page: PageRequest) -> Listing<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset())
        .take(page.page_size as usize)
        .collect();
    Listing::new(items, Some(total))
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn article_by_slug(&self, slug: &Slug) -> SourceResult<Option<Article>> {
        Ok(self
            .fixture
            .articles
            .iter()
            .find(|a| a.slug == slug.as_str())
            .cloned())
    }

    async fn blocks_for_article(&self, article_id: &str) -> SourceResult<Vec<BlockRecord>> {
        Ok(self
            .fixture
            .blocks
            .get(article_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn article_list(
        &self,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>> {
        let summaries = sorted_summaries(self.fixture.articles.iter(), sort);
        Ok(page_of(summaries, page))
    }

    async fn tag_list(
        &self,
        sort: SortKey,
        page: Option<PageRequest>,
    ) -> SourceResult<Listing<Tag>> {
        let mut tags = self.fixture.tags.clone();
        match sort {
            SortKey::ByName => tags.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::NewestFirst => {}
        }
        Ok(match page {
            Some(page) => page_of(tags, page),
            None => {
                let total = tags.len() as u64;
                Listing::new(tags, Some(total))
            }
        })
    }

    async fn articles_by_tag(
        &self,
        tag_slug: &Slug,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>> {
        let tagged = self
            .fixture
            .articles
            .iter()
            .filter(|a| a.has_tag(tag_slug.as_str()));
        let summaries = sorted_summaries(tagged, sort);
        Ok(page_of(summaries, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn fixture() -> Fixture {
        serde_json::from_value(json!({
            "articles": [
                {"id": 1, "title": "Old", "slug": "old", "publishedAt": "2024-01-01T09:00:00",
                 "tags": [{"name": "Rust", "slug": "rust"}]},
                {"id": 2, "title": "New", "slug": "new", "publishedAt": "2025-03-01T09:00:00",
                 "tags": [{"name": "Rust", "slug": "rust"}, {"name": "Web", "slug": "web"}]},
                {"id": 3, "title": "Mid", "slug": "mid", "publishedAt": "2024-06-01T09:00:00"}
            ],
            "tags": [{"name": "Web", "slug": "web"}, {"name": "Rust", "slug": "rust"}],
            "blocks": {"2": [{"id": "b1", "collection": "block_code", "item": {"code": "x"}}]}
        }))
        .unwrap()
    }

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_article_by_slug_found_and_missing() {
        let source = MemorySource::new(fixture());
        let found = source.article_by_slug(&slug("new")).await.unwrap();
        assert_eq!(found.map(|a| a.id), Some("2".to_string()));
        assert!(source.article_by_slug(&slug("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blocks_are_scoped_to_article() {
        let source = MemorySource::new(fixture());
        assert_eq!(source.blocks_for_article("2").await.unwrap().len(), 1);
        assert!(source.blocks_for_article("1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_article_list_sorted_newest_first_and_paged() {
        let source = MemorySource::new(fixture());
        let first = source
            .article_list(SortKey::NewestFirst, PageRequest::new(2, 1))
            .await
            .unwrap();
        let slugs: Vec<_> = first.items.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid"]);
        assert_eq!(first.total, Some(3));

        let beyond = source
            .article_list(SortKey::NewestFirst, PageRequest::new(2, 5))
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, Some(3));
    }

    #[tokio::test]
    async fn test_tag_list_sorted_by_name() {
        let source = MemorySource::new(fixture());
        let all = source.tag_list(SortKey::ByName, None).await.unwrap();
        let names: Vec<_> = all.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Web"]);
    }

    #[tokio::test]
    async fn test_articles_by_tag_filters() {
        let source = MemorySource::new(fixture());
        let listing = source
            .articles_by_tag(&slug("rust"), SortKey::NewestFirst, PageRequest::new(6, 1))
            .await
            .unwrap();
        assert_eq!(listing.total, Some(2));
        assert_eq!(listing.items[0].slug, "new");

        let unknown = source
            .articles_by_tag(&slug("go"), SortKey::NewestFirst, PageRequest::new(6, 1))
            .await
            .unwrap();
        assert!(unknown.items.is_empty());
    }

    #[test]
    fn test_from_path_reads_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tags": [{{"name": "Rust", "slug": "rust"}}]}}"#).unwrap();

        let source = MemorySource::from_path(file.path()).unwrap();
        assert_eq!(source.fixture().tags.len(), 1);
        assert!(source.fixture().articles.is_empty());
    }

    #[test]
    fn test_from_path_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            MemorySource::from_path(file.path()),
            Err(SourceError::FixtureParse(_))
        ));
    }

    #[test]
    fn test_demo_fixture_resolves_every_block() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/fixtures.json");
        let source = MemorySource::from_path(&path).unwrap();
        let article = &source.fixture().articles[0];
        let records = &source.fixture().blocks[&article.id];
        let document = article.content.as_ref().unwrap();

        let resolved = crate::resolver::resolve(document, records);
        assert_eq!(resolved.len(), document.children.len());
        assert!(resolved.iter().all(|node| !node.is_nothing()));
    }
}
