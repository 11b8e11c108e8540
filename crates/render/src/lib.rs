//! # Magazine Render
//!
//! Pure HTML rendering with Maud: rich text, the five block kinds, and the page
//! templates. Every function takes already-fetched data and returns `Markup`;
//! nothing here performs I/O.

pub mod blocks;
pub mod dates;
pub mod highlight;
pub mod pages;
pub mod rich_text;

pub use blocks::{render_block, render_body, render_resolved};
pub use dates::format_date;
pub use pages::{
    article_list_page, article_page, error_page, not_found_page, pagination_row, tag_list_page,
    tag_page,
};
pub use rich_text::render_node;
