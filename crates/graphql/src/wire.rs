//! Response shapes of the Directus GraphQL API and their conversion into the
//! flat core models.
//!
//! Many-to-many fields arrive wrapped in junction rows (`tags_id`,
//! `related_articles_id`) and counts arrive as `*_aggregated[0].count.id`. Both
//! are unpacked here so nothing downstream sees them.

use magazine_core::ids::{deserialize_id, id_from_value, null_as_default};
use magazine_core::{Article, ArticleSummary, Asset, Author, BlockRecord, DocumentNode, Tag};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TagJunction {
    #[serde(default)]
    pub tags_id: Option<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedJunction {
    #[serde(default)]
    pub related_articles_id: Option<SummaryNode>,
}

/// Article card fields as selected by the list queries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryNode {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<Asset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<TagJunction>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNode {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<Asset>,
    #[serde(default)]
    pub cover_color: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_flexible: Option<DocumentNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<TagJunction>,
    #[serde(default)]
    pub title_for_related_articles_section: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_articles: Vec<RelatedJunction>,
}

/// `{ count: { id } }`. Directus reports the count as a number or a numeric
/// string depending on the database driver.
#[derive(Debug, Deserialize)]
pub struct Aggregate {
    #[serde(default)]
    pub count: Option<AggregateCount>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateCount {
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Deserialize)]
pub struct ArticleBySlugData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<ArticleNode>,
}

/// Junction rows of `article_blocks`. Rows that are `null` outright are
/// dropped; damaged rows decode leniently through [`BlockRecord`].
#[derive(Debug, Deserialize)]
pub struct BlocksData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_blocks: Vec<Option<BlockRecord>>,
}

impl BlocksData {
    pub fn into_records(self) -> Vec<BlockRecord> {
        self.article_blocks.into_iter().flatten().collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticlesWithCountData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<SummaryNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles_aggregated: Vec<Aggregate>,
}

#[derive(Debug, Deserialize)]
pub struct TagsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct TagsWithCountData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_aggregated: Vec<Aggregate>,
}

/// Total from the first aggregate row, `None` when absent or not a number.
pub fn aggregate_total(rows: &[Aggregate]) -> Option<u64> {
    let count = rows.first()?.count.as_ref()?;
    id_from_value(&count.id)?.parse().ok()
}

fn flatten_tags(junctions: Vec<TagJunction>) -> Vec<Tag> {
    junctions.into_iter().filter_map(|j| j.tags_id).collect()
}

impl From<SummaryNode> for ArticleSummary {
    fn from(node: SummaryNode) -> Self {
        ArticleSummary {
            title: node.title,
            slug: node.slug,
            cover: node.cover,
            tags: flatten_tags(node.tags),
            published_at: node.published_at,
            description: node.description,
            author: node.author,
        }
    }
}

impl From<ArticleNode> for Article {
    fn from(node: ArticleNode) -> Self {
        Article {
            id: node.id,
            title: node.title,
            slug: node.slug,
            cover: node.cover,
            cover_color: node.cover_color,
            author: node.author,
            published_at: node.published_at,
            reading_time: node.reading_time,
            description: node.description,
            content: node.content_flexible,
            tags: flatten_tags(node.tags),
            related_section_title: node.title_for_related_articles_section,
            related_articles: node
                .related_articles
                .into_iter()
                .filter_map(|j| j.related_articles_id)
                .map(ArticleSummary::from)
                .collect(),
        }
    }
}
