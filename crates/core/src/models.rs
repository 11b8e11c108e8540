//! Records fetched from the content source.
//!
//! These exist for the duration of one page render. They are flat: the CMS wire
//! shapes (junction tables, aggregate wrappers) are unpacked by the source that
//! fetched them, so fixtures and renderers only ever see these types.

use crate::document::DocumentNode;
use crate::ids::{deserialize_id, null_as_default};
use serde::{Deserialize, Serialize};

/// A reference to an uploaded file. Width and height are known for images that
/// the CMS has analysed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Asset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: None,
            height: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Job title shown next to the name. Absent renders nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

/// Card-sized view of an article, used by list pages and related sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<Asset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

/// A full article as shown on its own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<Asset>,
    /// Accent colour behind the cover image, as a CSS colour value.
    #[serde(default)]
    pub cover_color: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    /// Flexible content document. `None` for an article with no body yet.
    #[serde(default)]
    pub content: Option<DocumentNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    /// Custom heading for the related-articles section.
    #[serde(default)]
    pub related_section_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_articles: Vec<ArticleSummary>,
}

impl Article {
    /// The card view of this article.
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            title: self.title.clone(),
            slug: self.slug.clone(),
            cover: self.cover.clone(),
            tags: self.tags.clone(),
            published_at: self.published_at.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }

    /// Whether the article is tagged with `tag_slug`.
    pub fn has_tag(&self, tag_slug: &str) -> bool {
        self.tags.iter().any(|t| t.slug == tag_slug)
    }

    /// Heading of the related-articles section: the article's own title when set
    /// and non-blank, otherwise `default`.
    pub fn related_heading<'a>(&'a self, default: &'a str) -> &'a str {
        self.related_section_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(default)
    }
}

/// One page of results plus the total number of matching records.
///
/// `total` is `None` when the source was asked for an unpaged list and did not
/// count it.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>, total: Option<u64>) -> Self {
        Self { items, total }
    }

    /// The reported total, or the number of items when none was reported.
    pub fn total_or_len(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_deserializes_with_optional_fields_missing() {
        let article: Article = serde_json::from_value(json!({
            "id": 3,
            "title": "Typed blocks",
            "slug": "typed-blocks",
            "tags": null,
            "relatedArticles": null
        }))
        .unwrap();

        assert_eq!(article.id, "3");
        assert!(article.tags.is_empty());
        assert!(article.related_articles.is_empty());
        assert!(article.content.is_none());
        assert!(article.author.is_none());
    }

    #[test]
    fn test_related_heading_falls_back_when_blank() {
        let mut article: Article = serde_json::from_value(json!({
            "id": "a1", "title": "T", "slug": "t"
        }))
        .unwrap();
        assert_eq!(article.related_heading("Default"), "Default");

        article.related_section_title = Some("   ".into());
        assert_eq!(article.related_heading("Default"), "Default");

        article.related_section_title = Some("Read next".into());
        assert_eq!(article.related_heading("Default"), "Read next");
    }

    #[test]
    fn test_summary_copies_card_fields() {
        let article: Article = serde_json::from_value(json!({
            "id": "a1",
            "title": "T",
            "slug": "t",
            "cover": {"id": "c1"},
            "tags": [{"name": "Rust", "slug": "rust"}],
            "author": {"name": "Ann"}
        }))
        .unwrap();
        let summary = article.summary();
        assert_eq!(summary.slug, "t");
        assert_eq!(summary.cover, Some(Asset::new("c1")));
        assert!(article.has_tag("rust"));
        assert!(!article.has_tag("go"));
    }

    #[test]
    fn test_listing_total_or_len() {
        assert_eq!(Listing::new(vec![1, 2], None).total_or_len(), 2);
        assert_eq!(Listing::new(vec![1, 2], Some(9)).total_or_len(), 9);
    }
}
