//! Page handlers.
//!
//! Each handler fetches what its page needs from the content source, runs the
//! pure resolve and render steps, and returns HTML. Not-found and source
//! failures become [`PageError`] responses.

use crate::error::PageError;
use crate::state::AppState;
use axum::{
    extract::{Path as AxumPath, Query, State},
    response::{Html, Json, Redirect},
};
use magazine_core::resolver::LogUnresolved;
use magazine_core::{ContentResolver, PageRequest, Pagination, Slug, SortKey};
use magazine_render::{article_list_page, article_page, tag_list_page, tag_page};
use serde::{Deserialize, Serialize};

/// Query string of list pages. `page` is kept raw; a malformed value means
/// page 1, never a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

fn parse_slug(raw: &str) -> Result<Slug, PageError> {
    raw.parse().map_err(|_| PageError::NotFound)
}

/// Health check endpoint
///
/// # Returns
/// * `Json<HealthRes>` - Always `ok: true` while the process is serving.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Magazine is alive".into(),
    })
}

pub async fn home() -> Redirect {
    Redirect::temporary("/magazine/article")
}

pub async fn fallback() -> PageError {
    PageError::NotFound
}

/// Article list page, newest first.
///
/// # Errors
/// Returns `500 Internal Server Error` if the content source fails.
#[axum::debug_handler]
pub async fn article_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PageError> {
    let size = state.cfg.articles_per_page();
    let current = magazine_core::pagination::current_page(params.page.as_deref());

    let listing = state
        .source
        .article_list(SortKey::NewestFirst, PageRequest::new(size, current))
        .await?;
    let pagination = Pagination::for_page(listing.total_or_len(), size, current);

    Ok(Html(
        article_list_page(&listing.items, &pagination, state.cfg.assets()).into_string(),
    ))
}

/// A single article with its flexible content resolved against the article's
/// block records.
///
/// # Errors
/// Returns `404 Not Found` for an unknown slug and `500 Internal Server Error`
/// if the content source fails.
#[axum::debug_handler]
pub async fn article(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
) -> Result<Html<String>, PageError> {
    let slug = parse_slug(&slug)?;
    let article = state
        .source
        .article_by_slug(&slug)
        .await?
        .ok_or(PageError::NotFound)?;

    let records = state.source.blocks_for_article(&article.id).await?;
    let body = match &article.content {
        Some(document) => ContentResolver::new(&records).resolve_with(
            document,
            &LogUnresolved {
                article: &article.slug,
            },
        ),
        None => Vec::new(),
    };

    Ok(Html(article_page(&article, &body, &state.cfg).into_string()))
}

/// Tag list page, alphabetical.
///
/// # Errors
/// Returns `500 Internal Server Error` if the content source fails.
#[axum::debug_handler]
pub async fn tag_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PageError> {
    let size = state.cfg.tags_per_page();
    let current = magazine_core::pagination::current_page(params.page.as_deref());

    let listing = state
        .source
        .tag_list(SortKey::ByName, Some(PageRequest::new(size, current)))
        .await?;
    let pagination = Pagination::for_page(listing.total_or_len(), size, current);

    Ok(Html(tag_list_page(&listing.items, &pagination).into_string()))
}

/// Articles carrying one tag, alongside the full tag list.
///
/// # Errors
/// Returns `404 Not Found` when no tag has this slug and
/// `500 Internal Server Error` if the content source fails.
#[axum::debug_handler]
pub async fn tag(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PageError> {
    let slug = parse_slug(&slug)?;
    let tags = state.source.tag_list(SortKey::ByName, None).await?;
    if !tags.items.iter().any(|t| t.slug == slug.as_str()) {
        return Err(PageError::NotFound);
    }

    let size = state.cfg.tag_articles_per_page();
    let current = magazine_core::pagination::current_page(params.page.as_deref());
    let listing = state
        .source
        .articles_by_tag(&slug, SortKey::NewestFirst, PageRequest::new(size, current))
        .await?;
    let pagination = Pagination::for_page(listing.total_or_len(), size, current);

    Ok(Html(
        tag_page(
            &tags.items,
            slug.as_str(),
            &listing.items,
            &pagination,
            state.cfg.assets(),
        )
        .into_string(),
    ))
}
