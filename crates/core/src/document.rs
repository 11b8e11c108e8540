//! Rich-text document tree.
//!
//! Article bodies are stored by the CMS as ProseMirror-style JSON: every node has a
//! `type`, optional `attrs`, optional `content` children, and text nodes carry
//! `text` plus inline `marks`. The tree is kept generic here; only relation
//! placeholders get special treatment, by the resolver.

use crate::constants::{BLOCK_COLLECTION_ATTR, BLOCK_ID_ATTR, DOC_KIND, RELATION_BLOCK_KIND};
use crate::ids::{id_from_value, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of a rich-text document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(
        rename = "attrs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attributes: Option<Map<String, Value>>,
    #[serde(
        rename = "content",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub marks: Vec<Mark>,
}

/// An inline mark applied to a text node (bold, link, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "attrs", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

/// The block record a relation placeholder points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRef {
    pub id: String,
    pub collection: String,
}

impl DocumentNode {
    /// Create a node of the given kind with children and no attributes.
    pub fn new(kind: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        Self {
            kind: kind.into(),
            attributes: None,
            children,
            text: None,
            marks: Vec::new(),
        }
    }

    /// Create a root `doc` node.
    pub fn doc(children: Vec<DocumentNode>) -> Self {
        Self::new(DOC_KIND, children)
    }

    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new("text", Vec::new())
        }
    }

    /// Create a paragraph holding a single text node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("paragraph", vec![Self::text(text)])
    }

    /// Create a relation placeholder referencing `collection`/`id`.
    pub fn relation(id: impl Into<String>, collection: impl Into<String>) -> Self {
        let mut attrs = Map::new();
        attrs.insert(BLOCK_ID_ATTR.into(), Value::String(id.into()));
        attrs.insert(BLOCK_COLLECTION_ATTR.into(), Value::String(collection.into()));
        Self {
            attributes: Some(attrs),
            ..Self::new(RELATION_BLOCK_KIND, Vec::new())
        }
    }

    /// Add or replace one attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Whether this node stands in for an out-of-band block record.
    pub fn is_relation_placeholder(&self) -> bool {
        self.kind == RELATION_BLOCK_KIND
    }

    /// The referenced block, if this is a placeholder carrying both an id and a
    /// collection. Always `None` for content-bearing nodes.
    pub fn block_ref(&self) -> Option<BlockRef> {
        if !self.is_relation_placeholder() {
            return None;
        }
        let attrs = self.attributes.as_ref()?;
        let id = attrs.get(BLOCK_ID_ATTR).and_then(id_from_value)?;
        let collection = attrs
            .get(BLOCK_COLLECTION_ATTR)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())?;
        Some(BlockRef {
            id,
            collection: collection.to_string(),
        })
    }

    /// String attribute lookup.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key)?.as_str()
    }

    /// Unsigned integer attribute lookup. Accepts numeric strings.
    pub fn attr_u64(&self, key: &str) -> Option<u64> {
        match self.attributes.as_ref()?.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

impl Mark {
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key)?.as_str()
    }
}
