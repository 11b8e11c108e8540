//! [`ContentSource`] backed by the Directus GraphQL API.

use crate::client::GraphqlClient;
use crate::error::GraphqlResult;
use crate::queries;
use crate::wire::{
    aggregate_total, ArticleBySlugData, ArticlesWithCountData, BlocksData, TagsData,
    TagsWithCountData,
};
use async_trait::async_trait;
use magazine_core::{
    Article, ArticleSummary, BlockRecord, ContentSource, Listing, PageRequest, Slug, SortKey,
    SourceResult, Tag,
};
use serde_json::json;
use std::time::Duration;

/// Path of the GraphQL endpoint below the Directus base URL.
pub const GRAPHQL_PATH: &str = "graphql";

/// Reads articles, tags and blocks from a Directus instance.
#[derive(Clone, Debug)]
pub struct DirectusSource {
    client: GraphqlClient,
}

impl DirectusSource {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// Build a source for the Directus instance at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Directus root, e.g. `https://cms.example.com`. A trailing
    ///   slash is ignored.
    /// * `token` - Static access token, sent as a bearer token when present.
    /// * `timeout` - Per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `GraphqlError::ClientBuild` if the HTTP client cannot be created.
    pub fn from_url(base_url: &str, token: Option<String>, timeout: Duration) -> GraphqlResult<Self> {
        let endpoint = format!("{}/{GRAPHQL_PATH}", base_url.trim().trim_end_matches('/'));
        Ok(Self::new(GraphqlClient::new(endpoint, token, timeout)?))
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

fn page_variables(sort: SortKey, page: PageRequest) -> serde_json::Value {
    json!({
        "sort": [sort.as_directus()],
        "limit": page.page_size,
        "page": page.page.max(1),
    })
}

#[async_trait]
impl ContentSource for DirectusSource {
    async fn article_by_slug(&self, slug: &Slug) -> SourceResult<Option<Article>> {
        let data: ArticleBySlugData = self
            .client
            .query(
                "ArticleBySlug",
                queries::ARTICLE_BY_SLUG,
                json!({ "slug": slug.as_str() }),
            )
            .await?;
        Ok(data.articles.into_iter().next().map(Article::from))
    }

    async fn blocks_for_article(&self, article_id: &str) -> SourceResult<Vec<BlockRecord>> {
        let data: BlocksData = self
            .client
            .query(
                "CustomBlocks",
                queries::ARTICLE_BLOCKS,
                json!({ "articleId": article_id }),
            )
            .await?;
        Ok(data.into_records())
    }

    async fn article_list(
        &self,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>> {
        let data: ArticlesWithCountData = self
            .client
            .query(
                "ArticlesWithCount",
                queries::ARTICLES_WITH_COUNT,
                page_variables(sort, page),
            )
            .await?;
        let total = aggregate_total(&data.articles_aggregated);
        Ok(Listing::new(
            data.articles.into_iter().map(ArticleSummary::from).collect(),
            total,
        ))
    }

    async fn tag_list(
        &self,
        sort: SortKey,
        page: Option<PageRequest>,
    ) -> SourceResult<Listing<Tag>> {
        match page {
            Some(page) => {
                let data: TagsWithCountData = self
                    .client
                    .query(
                        "TagsWithCount",
                        queries::TAGS_WITH_COUNT,
                        page_variables(sort, page),
                    )
                    .await?;
                let total = aggregate_total(&data.tags_aggregated);
                Ok(Listing::new(data.tags, total))
            }
            None => {
                let data: TagsData = self
                    .client
                    .query(
                        "Tags",
                        queries::TAGS,
                        json!({ "sort": [sort.as_directus()] }),
                    )
                    .await?;
                Ok(Listing::new(data.tags, None))
            }
        }
    }

    async fn articles_by_tag(
        &self,
        tag_slug: &Slug,
        sort: SortKey,
        page: PageRequest,
    ) -> SourceResult<Listing<ArticleSummary>> {
        let mut variables = page_variables(sort, page);
        variables["tagSlug"] = json!(tag_slug.as_str());

        let data: ArticlesWithCountData = self
            .client
            .query(
                "ArticlesWithFilterAndCount",
                queries::ARTICLES_BY_TAG_WITH_COUNT,
                variables,
            )
            .await?;
        let total = aggregate_total(&data.articles_aggregated);
        Ok(Listing::new(
            data.articles.into_iter().map(ArticleSummary::from).collect(),
            total,
        ))
    }
}
