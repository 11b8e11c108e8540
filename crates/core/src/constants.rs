//! Constants used throughout the magazine core crate.
//!
//! Wire tags shared with the CMS and the fixed presentation defaults live here so
//! the resolver, the sources and the renderers agree on them.

/// Node kind of the root of a rich-text document.
pub const DOC_KIND: &str = "doc";

/// Node kind of a relation placeholder referencing an out-of-band block record.
pub const RELATION_BLOCK_KIND: &str = "relation-block";

/// Placeholder attribute holding the referenced block record id.
pub const BLOCK_ID_ATTR: &str = "id";

/// Placeholder attribute holding the referenced block collection.
pub const BLOCK_COLLECTION_ATTR: &str = "collection";

/// Collection tag of lead-text blocks.
pub const LEAD_COLLECTION: &str = "block_lead";

/// Collection tag of image blocks.
pub const IMAGE_COLLECTION: &str = "block_image";

/// Collection tag of advertising blocks.
pub const ADVERTISING_COLLECTION: &str = "block_advertising";

/// Collection tag of source-code blocks.
pub const CODE_COLLECTION: &str = "block_code";

/// Collection tag of quotation blocks.
pub const QUOTE_COLLECTION: &str = "block_quote";

/// Path segment inserted between the asset base URL and an asset id.
pub const ASSETS_PATH_SEGMENT: &str = "assets";

/// Articles shown per page on the article list.
pub const ARTICLES_PER_PAGE: u32 = 6;

/// Tags shown per page on the tag index.
pub const TAGS_PER_PAGE: u32 = 10;

/// Articles shown per page on a tag page.
pub const TAG_ARTICLES_PER_PAGE: u32 = 6;

/// Heading of the related-articles section when the article sets none.
pub const DEFAULT_RELATED_SECTION_TITLE: &str = "More interesting articles";
