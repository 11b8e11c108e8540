//! Block renderers and the article body.
//!
//! Every block kind has one renderer, chosen by an exhaustive match on
//! [`Block`]. The body renderer wraps each resolved position according to its
//! [`Layout`]: content-width output goes in the article column, full-bleed
//! output in the full-width section wrapper the page script stretches.

use crate::highlight::highlight;
use crate::rich_text::render_node;
use magazine_core::blocks::{AdvertisingBlock, CodeBlock, ImageBlock, LeadBlock, QuoteBlock, QuoteStyle};
use magazine_core::validation::{css_color, is_safe_href};
use magazine_core::{AssetUrls, Block, Layout, ResolvedNode};
use maud::{html, Markup, PreEscaped};

/// Class of the article column wrapper.
pub const ARTICLE_CONTAINER_CLASS: &str = "article-container";
/// Class of the full-width section wrapper.
pub const FULL_WIDTH_CLASS: &str = "js-fullWidthSection";

const QUOTE_PHOTO_SIZE: u32 = 250;

/// Render the resolved top-level children of an article, in order.
pub fn render_body(nodes: &[ResolvedNode], assets: &AssetUrls) -> Markup {
    html! {
        @for node in nodes {
            (render_resolved(node, assets))
        }
    }
}

/// Render one resolved position inside its layout wrapper. Unresolved
/// positions produce no output at all.
pub fn render_resolved(node: &ResolvedNode, assets: &AssetUrls) -> Markup {
    match node {
        ResolvedNode::Content(content) => wrap(Layout::ContentWidth, render_node(content)),
        ResolvedNode::Block { block, .. } => wrap(block.layout(), render_block(block, assets)),
        ResolvedNode::Nothing(_) => html! {},
    }
}

fn wrap(layout: Layout, inner: Markup) -> Markup {
    let class = match layout {
        Layout::ContentWidth => ARTICLE_CONTAINER_CLASS,
        Layout::FullBleed => FULL_WIDTH_CLASS,
    };
    html! { div class=(class) { (inner) } }
}

/// Render a block without its layout wrapper.
pub fn render_block(block: &Block, assets: &AssetUrls) -> Markup {
    match block {
        Block::Lead(lead) => render_lead(lead),
        Block::Image(image) => render_image(image, assets),
        Block::Advertising(ad) => render_advertising(ad),
        Block::Code(code) => render_code(code),
        Block::Quote(quote) => render_quote(quote, assets),
    }
}

fn render_lead(lead: &LeadBlock) -> Markup {
    html! { div.lead { (render_node(&lead.text)) } }
}

fn render_image(image: &ImageBlock, assets: &AssetUrls) -> Markup {
    let background = css_color(image.background_color.as_deref())
        .map(|color| format!("background-color: {color}"));

    html! {
        figure.picture {
            div.picture-wrapper.picture-wrapper-padded[image.padding] style=[background] {
                img.picture-image.picture-image-stretched[image.stretch]
                    src=(assets.url(&image.image.id))
                    alt=""
                    width=[image.image.width]
                    height=[image.image.height];
            }
            @if let Some(caption) = &image.caption {
                div.picture-caption { (render_node(caption)) }
            }
        }
    }
}

fn render_advertising(ad: &AdvertisingBlock) -> Markup {
    html! {
        div.advertising {
            div.advertising-column {
                div.advertising-title { (ad.title) }
                @if is_safe_href(&ad.link_url) {
                    a.advertising-link href=(ad.link_url.trim()) { (ad.link_text) }
                } @else {
                    span.advertising-link { (ad.link_text) }
                }
            }
            div.advertising-column {
                div.advertising-content { (ad.content) }
            }
        }
    }
}

fn render_code(code: &CodeBlock) -> Markup {
    let highlighted = highlight(&code.code);
    html! {
        div.code {
            pre.code-pre {
                code.hljs {
                    @match highlighted {
                        Some(spans) => (PreEscaped(spans)),
                        None => (code.code),
                    }
                }
            }
        }
    }
}

fn quote_style_class(style: QuoteStyle) -> &'static str {
    match style {
        QuoteStyle::Small => "quote-small",
        QuoteStyle::Medium => "quote-medium",
        QuoteStyle::Big => "quote-big",
        QuoteStyle::WithPhoto => "quote-with-photo",
    }
}

fn render_quote(quote: &QuoteBlock, assets: &AssetUrls) -> Markup {
    html! {
        div class={ "quote " (quote_style_class(quote.style)) } {
            div.quote-container {
                @if let Some(photo) = quote.portrait() {
                    div.quote-photo-wrapper {
                        img.quote-photo
                            src=(assets.url(&photo.id))
                            alt=""
                            width=(QUOTE_PHOTO_SIZE)
                            height=(QUOTE_PHOTO_SIZE);
                    }
                }
                div {
                    blockquote.quote-text { (render_node(&quote.text)) }
                    div.quote-author { (render_node(&quote.author_name)) }
                    @if let Some(duty) = &quote.author_duty {
                        div.quote-duty { (render_node(duty)) }
                    }
                }
            }
        }
    }
}
