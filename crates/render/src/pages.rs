//! Full-page templates.

use crate::blocks::{render_body, ARTICLE_CONTAINER_CLASS};
use crate::dates::format_date;
use magazine_core::validation::css_color;
use magazine_core::{Article, ArticleSummary, AssetUrls, Author, CoreConfig, Pagination, ResolvedNode, Tag};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Magazine";

const ARTICLE_COVER: (u32, u32) = (1200, 700);
const RELATED_CARD_COVER: (u32, u32) = (290, 200);
const LIST_CARD_COVER: (u32, u32) = (500, 300);
const TAG_CARD_COVER: (u32, u32) = (400, 300);

/// Link to an article page.
pub fn article_href(slug: &str) -> String {
    format!("/magazine/article/{}", urlencoding::encode(slug))
}

/// Link to a tag page.
pub fn tag_href(slug: &str) -> String {
    format!("/magazine/tags/{}", urlencoding::encode(slug))
}

/// Wrap page content in the HTML document shell.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
            }
            body {
                header.site-header {
                    div.container {
                        a.site-logo href="/magazine/article" { (SITE_NAME) }
                        nav.site-nav {
                            a href="/magazine/article" { "Articles" }
                            a href="/magazine/tags" { "Tags" }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}

fn cover_image(class: &str, src: String, (width, height): (u32, u32)) -> Markup {
    html! { img class=(class) src=(src) alt="" width=(width) height=(height); }
}

fn tag_link(tag: &Tag, class: &str) -> Markup {
    html! { a class=(class) href=(tag_href(&tag.slug)) { "#" (tag.name) } }
}

fn author_block(author: &Author) -> Markup {
    html! {
        div.author {
            span.author-name { (author.name) }
            @if let Some(duty) = &author.duty {
                span.author-duty { (duty) }
            }
        }
    }
}

fn published_date(published_at: Option<&str>) -> Markup {
    html! {
        @if let Some(raw) = published_at {
            span.published-date { (format_date(raw)) }
        }
    }
}

/// Page-link row. Renders nothing when there is at most one page.
pub fn pagination_row(pagination: &Pagination) -> Markup {
    html! {
        @if pagination.has_controls() {
            div.pagination {
                @for page in pagination.pages() {
                    a.page.current-page[pagination.is_current(*page)] href={ "?page=" (page) } { (page) }
                }
            }
        }
    }
}

/// The article page.
///
/// # Arguments
///
/// * `article` - The article being shown.
/// * `body` - Its resolved top-level content, in document order.
/// * `cfg` - Supplies asset URLs and the default related-section heading.
pub fn article_page(article: &Article, body: &[ResolvedNode], cfg: &CoreConfig) -> Markup {
    let assets = cfg.assets();
    let accent = css_color(article.cover_color.as_deref())
        .map(|color| format!("background-color: {color}"));

    let content = html! {
        div.container { h1.page-title { (article.title) } }
        @if let Some(cover) = &article.cover {
            div.cover style=[accent.as_deref()] {
                div.cover-image-wrapper {
                    (cover_image("cover-image", assets.url(&cover.id), ARTICLE_COVER))
                    div.cover-left-gradient style=[accent.as_deref()] {}
                    div.cover-right-gradient style=[accent.as_deref()] {}
                }
            }
        }
        div.container {
            div class=(ARTICLE_CONTAINER_CLASS) {
                div.meta-header {
                    @if let Some(author) = &article.author { (author_block(author)) }
                    (published_date(article.published_at.as_deref()))
                    @if let Some(minutes) = article.reading_time {
                        span.reading-time { "Read for " (minutes) " minutes" }
                    }
                }
            }
        }
        div.container.article-body {
            (render_body(body, assets))
        }
        div.container {
            div class=(ARTICLE_CONTAINER_CLASS) {
                div.meta-footer {
                    @if let Some(author) = &article.author { (author_block(author)) }
                    (published_date(article.published_at.as_deref()))
                    span.tags {
                        @for tag in &article.tags { (tag_link(tag, "tag")) }
                    }
                }
            }
        }
        @if !article.related_articles.is_empty() {
            div.container {
                h2.section-heading { (article.related_heading(cfg.related_section_title())) }
                div.related-articles {
                    @for related in &article.related_articles {
                        (related_card(related, assets))
                    }
                }
            }
        }
    };

    layout(&article.title, content)
}

fn related_card(article: &ArticleSummary, assets: &AssetUrls) -> Markup {
    html! {
        div.article-card {
            @if let Some(cover) = &article.cover {
                (cover_image("article-card-cover", assets.url(&cover.id), RELATED_CARD_COVER))
            }
            @if !article.tags.is_empty() {
                div.article-card-meta {
                    span { "Articles" }
                    @for tag in &article.tags { (tag_link(tag, "article-card-tag")) }
                }
            }
            h3.article-card-title {
                a href=(article_href(&article.slug)) { (article.title) }
            }
            @if let Some(author) = &article.author {
                div.article-card-author { (author.name) }
            }
        }
    }
}

/// The "All materials" list page.
pub fn article_list_page(
    articles: &[ArticleSummary],
    pagination: &Pagination,
    assets: &AssetUrls,
) -> Markup {
    let content = html! {
        div.container {
            h1.heading { "All materials" }
            @for article in articles {
                div.article-card {
                    @if let Some(cover) = &article.cover {
                        (cover_image("article-image", assets.url(&cover.id), LIST_CARD_COVER))
                    }
                    div.article-meta {
                        span.article-type { "Articles" }
                        @for tag in &article.tags { (tag_link(tag, "article-tag")) }
                        @if let Some(raw) = &article.published_at {
                            span.article-date { (format_date(raw)) }
                        }
                    }
                    h2.article-title {
                        a href=(article_href(&article.slug)) { (article.title) }
                    }
                    @if let Some(description) = &article.description {
                        div.article-description { (description) }
                    }
                    @if let Some(author) = &article.author {
                        div.article-author { (author.name) }
                    }
                }
            }
            (pagination_row(pagination))
        }
    };

    layout("All materials", content)
}

/// The "All tags" list page.
pub fn tag_list_page(tags: &[Tag], pagination: &Pagination) -> Markup {
    let content = html! {
        div.container {
            h1.heading { "All tags" }
            @for tag in tags { (tag_link(tag, "tag")) }
            (pagination_row(pagination))
        }
    };

    layout("All tags", content)
}

/// A single tag's page: every tag as a filter link with `current_slug`
/// highlighted, then one page of that tag's articles.
pub fn tag_page(
    tags: &[Tag],
    current_slug: &str,
    articles: &[ArticleSummary],
    pagination: &Pagination,
    assets: &AssetUrls,
) -> Markup {
    let title = tags
        .iter()
        .find(|t| t.slug == current_slug)
        .map(|t| format!("#{}", t.name))
        .unwrap_or_else(|| current_slug.to_string());

    let content = html! {
        div.container {
            h1.page-title { "Sharing needed important" }
            div.tags {
                @for tag in tags {
                    a.tag.current-tag[tag.slug == current_slug] href=(tag_href(&tag.slug)) { "#" (tag.name) }
                }
            }
            div.articles {
                @for article in articles {
                    div.article-card {
                        @if let Some(cover) = &article.cover {
                            (cover_image("article-image", assets.url(&cover.id), TAG_CARD_COVER))
                        }
                        h2.article-title {
                            a href=(article_href(&article.slug)) { (article.title) }
                        }
                        @if let Some(author) = &article.author {
                            div.article-author { (author.name) }
                        }
                        div.article-meta {
                            span.article-type { "Articles" }
                            @for tag in &article.tags { (tag_link(tag, "article-tag")) }
                        }
                    }
                }
            }
            (pagination_row(pagination))
        }
    };

    layout(&title, content)
}

pub fn not_found_page() -> Markup {
    layout(
        "Not found",
        html! {
            div.container {
                h1.heading { "Page not found" }
                p { "The page you are looking for does not exist." }
                a href="/magazine/article" { "Back to all materials" }
            }
        },
    )
}

pub fn error_page() -> Markup {
    layout(
        "Error",
        html! {
            div.container {
                h1.heading { "Something went wrong" }
                p { "The page could not be loaded. Please try again later." }
            }
        },
    )
}
