//! Block registry.
//!
//! Custom content blocks live in their own CMS collections and reach the renderer
//! as side-loaded [`BlockRecord`]s. The set of supported collections is closed:
//! each [`BlockKind`] names one collection tag and one typed fields shape, and the
//! [`Block`] enum carries the validated payload. Renderers match on `Block`
//! exhaustively, so a new kind cannot be added without a renderer for it.

use crate::constants::{
    ADVERTISING_COLLECTION, CODE_COLLECTION, IMAGE_COLLECTION, LEAD_COLLECTION, QUOTE_COLLECTION,
};
use crate::document::DocumentNode;
use crate::ids::{deserialize_id_or_empty, deserialize_text_or_empty, null_as_default};
use crate::models::Asset;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A side-loaded block payload, as returned by the content source.
///
/// `fields` is kept untyped until the registry validates it against the shape
/// declared for `collection`. Decoding never fails on a damaged row: a missing
/// id or collection decodes as empty, so the row resolves to nothing instead
/// of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(default, deserialize_with = "deserialize_id_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text_or_empty")]
    pub collection: String,
    #[serde(rename = "item", default)]
    pub fields: Value,
}

impl BlockRecord {
    pub fn new(id: impl Into<String>, collection: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            collection: collection.into(),
            fields,
        }
    }
}

/// The closed set of supported block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Lead,
    Image,
    Advertising,
    Code,
    Quote,
}

impl BlockKind {
    /// Every registered kind, in registry order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Lead,
        BlockKind::Image,
        BlockKind::Advertising,
        BlockKind::Code,
        BlockKind::Quote,
    ];

    /// The CMS collection tag for this kind.
    pub fn collection(self) -> &'static str {
        match self {
            BlockKind::Lead => LEAD_COLLECTION,
            BlockKind::Image => IMAGE_COLLECTION,
            BlockKind::Advertising => ADVERTISING_COLLECTION,
            BlockKind::Code => CODE_COLLECTION,
            BlockKind::Quote => QUOTE_COLLECTION,
        }
    }

    /// Look up the kind registered for a collection tag.
    pub fn from_collection(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.collection() == tag)
    }

    /// Validate a raw fields payload against this kind's shape.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error when the payload does not match.
    pub fn parse_fields(self, fields: &Value) -> Result<Block, serde_json::Error> {
        Ok(match self {
            BlockKind::Lead => Block::Lead(LeadBlock::deserialize(fields)?),
            BlockKind::Image => Block::Image(ImageBlock::deserialize(fields)?),
            BlockKind::Advertising => Block::Advertising(AdvertisingBlock::deserialize(fields)?),
            BlockKind::Code => Block::Code(CodeBlock::deserialize(fields)?),
            BlockKind::Quote => Block::Quote(QuoteBlock::deserialize(fields)?),
        })
    }
}

/// Where a block sits in the page.
///
/// Content-width blocks share the article column with body text. Full-bleed
/// blocks span the page and need the full-width section wrapper instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    ContentWidth,
    FullBleed,
}

/// Width flag stored on image and quote blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockWidth {
    #[default]
    Content,
    Screen,
}

impl BlockWidth {
    pub fn layout(self) -> Layout {
        match self {
            BlockWidth::Content => Layout::ContentWidth,
            BlockWidth::Screen => Layout::FullBleed,
        }
    }
}

/// A validated block payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Lead(LeadBlock),
    Image(ImageBlock),
    Advertising(AdvertisingBlock),
    Code(CodeBlock),
    Quote(QuoteBlock),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Lead(_) => BlockKind::Lead,
            Block::Image(_) => BlockKind::Image,
            Block::Advertising(_) => BlockKind::Advertising,
            Block::Code(_) => BlockKind::Code,
            Block::Quote(_) => BlockKind::Quote,
        }
    }

    /// The layout slot this block occupies.
    ///
    /// Advertising and code blocks are always full bleed; lead text always sits in
    /// the article column; images and quotes follow their width flag.
    pub fn layout(&self) -> Layout {
        match self {
            Block::Lead(_) => Layout::ContentWidth,
            Block::Image(image) => image.width.layout(),
            Block::Advertising(_) | Block::Code(_) => Layout::FullBleed,
            Block::Quote(quote) => quote.width.layout(),
        }
    }
}

/// Introductory paragraph set in larger type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadBlock {
    pub text: DocumentNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub image: Asset,
    #[serde(default)]
    pub caption: Option<DocumentNode>,
    /// Colour shown behind the image, visible with padding or letterboxing.
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: BlockWidth,
    #[serde(default, deserialize_with = "null_as_default")]
    pub padding: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stretch: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisingBlock {
    pub title: String,
    pub content: String,
    pub link_text: String,
    pub link_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub code: String,
}

/// Size tier of a quotation, or the portrait variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[serde(rename = "small")]
    Small,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "big")]
    Big,
    #[serde(rename = "with photo")]
    WithPhoto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBlock {
    pub text: DocumentNode,
    pub author_name: DocumentNode,
    #[serde(default)]
    pub author_duty: Option<DocumentNode>,
    #[serde(rename = "type")]
    pub style: QuoteStyle,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: BlockWidth,
    #[serde(default)]
    pub photo: Option<Asset>,
}

impl QuoteBlock {
    /// The portrait to show, if any. Only the `with photo` style shows one, and
    /// only when a photo is actually attached.
    pub fn portrait(&self) -> Option<&Asset> {
        match self.style {
            QuoteStyle::WithPhoto => self.photo.as_ref(),
            _ => None,
        }
    }
}
