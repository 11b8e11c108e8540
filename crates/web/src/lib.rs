//! # Magazine Web
//!
//! The axum application serving the magazine pages.
//!
//! Routes:
//! - `GET /` redirects to the article list
//! - `GET /magazine/article?page=N` and `GET /magazine/article/:slug`
//! - `GET /magazine/tags?page=N` and `GET /magazine/tags/:slug?page=N`
//! - `GET /health`
//!
//! Configuration and the content source are injected through [`AppState`];
//! the binary decides which source to use.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::PageError;
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/magazine/article", get(handlers::article_list))
        .route("/magazine/article/:slug", get(handlers::article))
        .route("/magazine/tags", get(handlers::tag_list))
        .route("/magazine/tags/:slug", get(handlers::tag))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use magazine_core::source::Fixture;
    use magazine_core::{
        Article, ArticleSummary, BlockRecord, ContentSource, CoreConfig, Listing, MemorySource,
        PageRequest, Slug, SortKey, SourceError, SourceResult, Tag,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn fixture() -> Fixture {
        let tags: Vec<_> = (1..=15)
            .map(|i| json!({"name": format!("Tag {i:02}"), "slug": format!("tag-{i:02}")}))
            .collect();

        serde_json::from_value(json!({
            "articles": [
                {
                    "id": 10,
                    "title": "Blocks in practice",
                    "slug": "blocks-in-practice",
                    "publishedAt": "2025-01-05T10:00:00",
                    "tags": [{"name": "Tag 01", "slug": "tag-01"}],
                    "content": {"type": "doc", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Opening paragraph"}]},
                        {"type": "relation-block", "attrs": {"id": "img-block", "collection": "block_image"}},
                        {"type": "relation-block", "attrs": {"id": "gone", "collection": "block_quote"}}
                    ]}
                },
                {
                    "id": 11,
                    "title": "Older post",
                    "slug": "older-post",
                    "publishedAt": "2024-02-01T10:00:00",
                    "tags": []
                }
            ],
            "tags": tags,
            "blocks": {
                "10": [
                    {"id": "img-block", "collection": "block_image",
                     "item": {"image": {"id": "asset-1", "width": 640, "height": 480}, "width": "screen"}}
                ]
            }
        }))
        .unwrap()
    }

    fn app_with(source: Arc<dyn ContentSource>) -> Router {
        let cfg = Arc::new(CoreConfig::new("https://cms.example.com").unwrap());
        router(AppState::new(cfg, source))
    }

    fn app() -> Router {
        app_with(Arc::new(MemorySource::new(fixture())))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    struct FailingSource;

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn article_by_slug(&self, _slug: &Slug) -> SourceResult<Option<Article>> {
            Err(SourceError::Request("connection refused".into()))
        }

        async fn blocks_for_article(&self, _article_id: &str) -> SourceResult<Vec<BlockRecord>> {
            Err(SourceError::Request("connection refused".into()))
        }

        async fn article_list(
            &self,
            _sort: SortKey,
            _page: PageRequest,
        ) -> SourceResult<Listing<ArticleSummary>> {
            Err(SourceError::Backend("forbidden".into()))
        }

        async fn tag_list(
            &self,
            _sort: SortKey,
            _page: Option<PageRequest>,
        ) -> SourceResult<Listing<Tag>> {
            Err(SourceError::Backend("forbidden".into()))
        }

        async fn articles_by_tag(
            &self,
            _tag_slug: &Slug,
            _sort: SortKey,
            _page: PageRequest,
        ) -> SourceResult<Listing<ArticleSummary>> {
            Err(SourceError::Backend("forbidden".into()))
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["ok"], json!(true));
    }

    #[tokio::test]
    async fn test_root_redirects_to_article_list() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/magazine/article");
    }

    #[tokio::test]
    async fn test_article_page_resolves_blocks_and_skips_missing() {
        let (status, body) = get(app(), "/magazine/article/blocks-in-practice").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<div class=\"article-container\"><p>Opening paragraph</p></div>"));
        assert!(body.contains("<div class=\"js-fullWidthSection\"><figure class=\"picture\">"));
        assert!(body.contains("src=\"https://cms.example.com/assets/asset-1\""));
        assert!(!body.contains("class=\"quote"));
    }

    #[tokio::test]
    async fn test_damaged_block_row_does_not_blank_article() {
        let fixture: Fixture = serde_json::from_value(json!({
            "articles": [{
                "id": 20,
                "title": "Patchy blocks",
                "slug": "patchy-blocks",
                "content": {"type": "doc", "content": [
                    {"type": "relation-block", "attrs": {"id": 1, "collection": "block_code"}},
                    {"type": "relation-block", "attrs": {"id": 2, "collection": "block_code"}},
                    {"type": "paragraph", "content": [{"type": "text", "text": "Closing words"}]}
                ]}
            }],
            "blocks": {
                "20": [
                    {"id": 1, "collection": "block_code", "item": {"code": "fn main() {}"}},
                    {"id": 2, "collection": null, "item": null}
                ]
            }
        }))
        .unwrap();

        let (status, body) = get(
            app_with(Arc::new(MemorySource::new(fixture))),
            "/magazine/article/patchy-blocks",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<div class=\"code\">").count(), 1);
        assert!(body.contains("<p>Closing words</p>"));
    }

    #[tokio::test]
    async fn test_slug_with_punctuation_is_served() {
        let fixture: Fixture = serde_json::from_value(json!({
            "articles": [{"id": 30, "title": "C++ for Rustaceans", "slug": "c++-for-rustaceans"}]
        }))
        .unwrap();
        let app = app_with(Arc::new(MemorySource::new(fixture)));

        let (status, body) = get(app.clone(), "/magazine/article/c++-for-rustaceans").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("C++ for Rustaceans"));

        let (status, _) = get(app, "/magazine/article/c%2B%2B-for-rustaceans").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_article_and_tag_are_not_found() {
        let (status, body) = get(app(), "/magazine/article/no-such-article").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));

        let (status, _) = get(app(), "/magazine/tags/no-such-tag").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(app(), "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tag_list_second_page() {
        let (status, body) = get(app(), "/magazine/tags?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<a class=\"tag\"").count(), 5);
        assert!(body.contains("#Tag 11"));
        assert!(!body.contains("#Tag 10<"));
        assert!(body.contains("<a class=\"page\" href=\"?page=1\">1</a>"));
        assert!(body.contains("<a class=\"page current-page\" href=\"?page=2\">2</a>"));
    }

    #[tokio::test]
    async fn test_malformed_page_falls_back_to_first() {
        let (status, body) = get(app(), "/magazine/tags?page=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<a class=\"tag\"").count(), 10);
        assert!(body.contains("<a class=\"page current-page\" href=\"?page=1\">1</a>"));
    }

    #[tokio::test]
    async fn test_article_list_and_tag_page() {
        let (status, body) = get(app(), "/magazine/article").await;
        assert_eq!(status, StatusCode::OK);
        let newer = body.find("Blocks in practice").unwrap();
        let older = body.find("Older post").unwrap();
        assert!(newer < older);
        assert!(!body.contains("class=\"pagination\""));

        let (status, body) = get(app(), "/magazine/tags/tag-01").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("current-tag"));
        assert!(body.contains("Blocks in practice"));
        assert!(!body.contains("Older post"));
    }

    #[tokio::test]
    async fn test_source_failure_is_server_error() {
        let app = app_with(Arc::new(FailingSource));
        let (status, body) = get(app.clone(), "/magazine/article").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Something went wrong"));

        let (status, _) = get(app, "/magazine/article/anything").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
