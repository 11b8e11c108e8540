//! Flexible-content resolution.
//!
//! An article body arrives in two parts: a rich-text document whose top-level
//! children are either ordinary content nodes or `relation-block` placeholders,
//! and a flat list of block records scoped to that article. The resolver joins
//! the two by block id and produces one [`ResolvedNode`] per top-level child, in
//! document order.
//!
//! Resolution never fails as a whole. A placeholder that cannot be resolved
//! keeps its position as [`ResolvedNode::Nothing`] with the reason attached, and
//! the renderers emit no output for it. Reasons are also reported to a
//! [`ResolveObserver`] so callers can log broken references.
//!
//! Block ids are only unique within one article, so a resolver is built per
//! render from that article's records.

use crate::blocks::{Block, BlockKind, BlockRecord};
use crate::document::DocumentNode;
use std::collections::HashMap;

/// The result of resolving one top-level document child.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedNode {
    /// A content-bearing node, passed through unchanged.
    Content(DocumentNode),
    /// A placeholder whose block record was found and validated.
    Block { id: String, block: Block },
    /// A placeholder that could not be resolved. Renders nothing.
    Nothing(Unresolved),
}

impl ResolvedNode {
    pub fn is_nothing(&self) -> bool {
        matches!(self, ResolvedNode::Nothing(_))
    }
}

/// Why a placeholder resolved to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// The placeholder lacks an id or a collection attribute.
    MissingReference,
    /// No block record has the placeholder's id.
    MissingRecord { id: String },
    /// The record's collection is not in the registry.
    UnknownCollection { id: String, collection: String },
    /// The placeholder and the record disagree about the collection.
    CollectionMismatch {
        id: String,
        expected: String,
        found: String,
    },
    /// The record's fields do not match the shape registered for its collection.
    InvalidFields {
        id: String,
        collection: String,
        message: String,
    },
}

impl std::fmt::Display for Unresolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unresolved::MissingReference => {
                write!(f, "relation placeholder has no block id or collection")
            }
            Unresolved::MissingRecord { id } => write!(f, "no block record with id {id}"),
            Unresolved::UnknownCollection { id, collection } => {
                write!(f, "block {id} has unknown collection {collection}")
            }
            Unresolved::CollectionMismatch {
                id,
                expected,
                found,
            } => write!(
                f,
                "block {id} referenced as {expected} but stored in {found}"
            ),
            Unresolved::InvalidFields {
                id,
                collection,
                message,
            } => write!(f, "block {id} in {collection} has invalid fields: {message}"),
        }
    }
}

/// Receives every position that resolved to nothing.
pub trait ResolveObserver {
    fn unresolved(&self, position: usize, reason: &Unresolved);
}

/// Observer that discards all reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreUnresolved;

impl ResolveObserver for IgnoreUnresolved {
    fn unresolved(&self, _position: usize, _reason: &Unresolved) {}
}

/// Observer that logs each report as a warning, tagged with the article slug.
#[derive(Debug, Clone, Copy)]
pub struct LogUnresolved<'a> {
    pub article: &'a str,
}

impl ResolveObserver for LogUnresolved<'_> {
    fn unresolved(&self, position: usize, reason: &Unresolved) {
        tracing::warn!(
            article = self.article,
            position,
            "skipping content block: {}",
            reason
        );
    }
}

/// Joins one article's document with its block records.
#[derive(Debug)]
pub struct ContentResolver<'a> {
    records: HashMap<&'a str, &'a BlockRecord>,
}

impl<'a> ContentResolver<'a> {
    /// Index the article's block records by id. When ids repeat, the first
    /// record wins. Records without an id cannot be referenced and are left out.
    pub fn new(records: &'a [BlockRecord]) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for record in records.iter().filter(|r| !r.id.is_empty()) {
            index.entry(record.id.as_str()).or_insert(record);
        }
        Self { records: index }
    }

    /// Resolve the top-level children of `document`, reporting nothing.
    pub fn resolve(&self, document: &DocumentNode) -> Vec<ResolvedNode> {
        self.resolve_with(document, &IgnoreUnresolved)
    }

    /// Resolve the top-level children of `document`, reporting every unresolved
    /// position to `observer`.
    pub fn resolve_with(
        &self,
        document: &DocumentNode,
        observer: &dyn ResolveObserver,
    ) -> Vec<ResolvedNode> {
        document
            .children
            .iter()
            .enumerate()
            .map(|(position, node)| {
                let resolved = self.resolve_node(node);
                if let ResolvedNode::Nothing(reason) = &resolved {
                    observer.unresolved(position, reason);
                }
                resolved
            })
            .collect()
    }

    /// Resolve a single top-level node.
    pub fn resolve_node(&self, node: &DocumentNode) -> ResolvedNode {
        if !node.is_relation_placeholder() {
            return ResolvedNode::Content(node.clone());
        }

        match self.lookup(node) {
            Ok((id, block)) => ResolvedNode::Block { id, block },
            Err(reason) => ResolvedNode::Nothing(reason),
        }
    }

    fn lookup(&self, node: &DocumentNode) -> Result<(String, Block), Unresolved> {
        let block_ref = node.block_ref().ok_or(Unresolved::MissingReference)?;

        let record = self
            .records
            .get(block_ref.id.as_str())
            .ok_or_else(|| Unresolved::MissingRecord {
                id: block_ref.id.clone(),
            })?;

        let kind = BlockKind::from_collection(&record.collection).ok_or_else(|| {
            Unresolved::UnknownCollection {
                id: record.id.clone(),
                collection: record.collection.clone(),
            }
        })?;

        if block_ref.collection != record.collection {
            return Err(Unresolved::CollectionMismatch {
                id: record.id.clone(),
                expected: block_ref.collection,
                found: record.collection.clone(),
            });
        }

        let block = kind
            .parse_fields(&record.fields)
            .map_err(|e| Unresolved::InvalidFields {
                id: record.id.clone(),
                collection: record.collection.clone(),
                message: e.to_string(),
            })?;

        Ok((record.id.clone(), block))
    }
}

/// Resolve `document` against `records`. Shorthand for
/// `ContentResolver::new(records).resolve(document)`.
pub fn resolve(document: &DocumentNode, records: &[BlockRecord]) -> Vec<ResolvedNode> {
    ContentResolver::new(records).resolve(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockWidth, Layout};
    use serde_json::json;
    use std::cell::RefCell;

    fn image_record(id: &str) -> BlockRecord {
        BlockRecord::new(
            id,
            "block_image",
            json!({"image": {"id": "asset-1"}, "width": "content"}),
        )
    }

    fn quote_fields() -> serde_json::Value {
        json!({
            "text": {"type": "doc", "content": [{"type": "paragraph"}]},
            "authorName": {"type": "doc"},
            "type": "small",
            "width": "screen"
        })
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(usize, Unresolved)>>);

    impl ResolveObserver for Recorder {
        fn unresolved(&self, position: usize, reason: &Unresolved) {
            self.0.borrow_mut().push((position, reason.clone()));
        }
    }

    #[test]
    fn test_content_only_document_passes_through() {
        let doc = DocumentNode::doc(vec![
            DocumentNode::paragraph("one"),
            DocumentNode::new("heading", vec![DocumentNode::text("two")]),
            DocumentNode::paragraph("three"),
        ]);

        let resolved = resolve(&doc, &[]);

        assert_eq!(resolved.len(), 3);
        for (node, original) in resolved.iter().zip(&doc.children) {
            assert_eq!(node, &ResolvedNode::Content(original.clone()));
        }
    }

    #[test]
    fn test_matching_record_becomes_typed_block() {
        let record = BlockRecord::new("q1", "block_quote", quote_fields());
        let doc = DocumentNode::doc(vec![DocumentNode::relation("q1", "block_quote")]);

        let resolved = resolve(&doc, std::slice::from_ref(&record));

        let expected = BlockKind::Quote.parse_fields(&record.fields).unwrap();
        assert_eq!(
            resolved,
            vec![ResolvedNode::Block {
                id: "q1".into(),
                block: expected
            }]
        );
    }

    #[test]
    fn test_article_with_present_and_absent_blocks() {
        let doc = DocumentNode::doc(vec![
            DocumentNode::paragraph("Intro"),
            DocumentNode::relation("img", "block_image"),
            DocumentNode::relation("gone", "block_quote"),
        ]);
        let records = vec![image_record("img")];

        let resolved = resolve(&doc, &records);

        assert_eq!(resolved.len(), 3);
        assert!(matches!(resolved[0], ResolvedNode::Content(_)));
        match &resolved[1] {
            ResolvedNode::Block {
                block: Block::Image(image),
                ..
            } => {
                assert_eq!(image.image.id, "asset-1");
                assert_eq!(image.width, BlockWidth::Content);
            }
            other => panic!("expected image block, got {other:?}"),
        }
        assert_eq!(
            resolved[2],
            ResolvedNode::Nothing(Unresolved::MissingRecord { id: "gone".into() })
        );
    }

    #[test]
    fn test_missing_record_does_not_affect_siblings() {
        let records = vec![image_record("a"), image_record("c")];
        let with_gap = DocumentNode::doc(vec![
            DocumentNode::relation("a", "block_image"),
            DocumentNode::relation("missing", "block_image"),
            DocumentNode::relation("c", "block_image"),
        ]);
        let without_gap = DocumentNode::doc(vec![
            DocumentNode::relation("a", "block_image"),
            DocumentNode::relation("c", "block_image"),
        ]);

        let gapped = resolve(&with_gap, &records);
        let clean = resolve(&without_gap, &records);

        assert_eq!(gapped[0], clean[0]);
        assert!(gapped[1].is_nothing());
        assert_eq!(gapped[2], clean[1]);
    }

    #[test]
    fn test_unknown_collection_and_bad_fields_degrade_to_nothing() {
        let records = vec![
            BlockRecord::new("v", "block_video", json!({"url": "x"})),
            BlockRecord::new("c", "block_code", json!({"code": 12})),
        ];
        let doc = DocumentNode::doc(vec![
            DocumentNode::relation("v", "block_video"),
            DocumentNode::relation("c", "block_code"),
            DocumentNode::paragraph("still here"),
        ]);

        let resolved = resolve(&doc, &records);

        assert_eq!(
            resolved[0],
            ResolvedNode::Nothing(Unresolved::UnknownCollection {
                id: "v".into(),
                collection: "block_video".into()
            })
        );
        assert!(matches!(
            resolved[1],
            ResolvedNode::Nothing(Unresolved::InvalidFields { .. })
        ));
        assert!(matches!(resolved[2], ResolvedNode::Content(_)));
    }

    #[test]
    fn test_placeholder_without_reference_and_collection_mismatch() {
        let records = vec![image_record("img")];
        let doc = DocumentNode::doc(vec![
            DocumentNode::new("relation-block", vec![]),
            DocumentNode::relation("img", "block_quote"),
        ]);

        let resolved = resolve(&doc, &records);

        assert_eq!(resolved[0], ResolvedNode::Nothing(Unresolved::MissingReference));
        assert_eq!(
            resolved[1],
            ResolvedNode::Nothing(Unresolved::CollectionMismatch {
                id: "img".into(),
                expected: "block_quote".into(),
                found: "block_image".into()
            })
        );
    }

    #[test]
    fn test_damaged_rows_resolve_to_nothing_beside_valid_blocks() {
        let records: Vec<BlockRecord> = serde_json::from_value(json!([
            {"id": 1, "collection": "block_code", "item": {"code": "fn main() {}"}},
            {"id": 2, "collection": null, "item": null},
            {"collection": "block_lead", "item": null}
        ]))
        .unwrap();
        let doc = DocumentNode::doc(vec![
            DocumentNode::relation("1", "block_code"),
            DocumentNode::relation("2", "block_code"),
        ]);

        let resolved = resolve(&doc, &records);

        assert!(matches!(
            resolved[0],
            ResolvedNode::Block {
                block: Block::Code(_),
                ..
            }
        ));
        assert_eq!(
            resolved[1],
            ResolvedNode::Nothing(Unresolved::UnknownCollection {
                id: "2".into(),
                collection: String::new()
            })
        );
    }

    #[test]
    fn test_duplicate_ids_first_record_wins() {
        let records = vec![
            BlockRecord::new("d", "block_code", json!({"code": "first"})),
            BlockRecord::new("d", "block_code", json!({"code": "second"})),
        ];
        let doc = DocumentNode::doc(vec![DocumentNode::relation("d", "block_code")]);

        match &resolve(&doc, &records)[0] {
            ResolvedNode::Block {
                block: Block::Code(code),
                ..
            } => assert_eq!(code.code, "first"),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_placeholders_are_not_resolved() {
        let nested = DocumentNode::new(
            "blockquote",
            vec![DocumentNode::relation("img", "block_image")],
        );
        let doc = DocumentNode::doc(vec![nested.clone()]);

        let resolved = resolve(&doc, &[image_record("img")]);

        assert_eq!(resolved, vec![ResolvedNode::Content(nested)]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let records = vec![
            image_record("img"),
            BlockRecord::new("q", "block_quote", quote_fields()),
        ];
        let doc = DocumentNode::doc(vec![
            DocumentNode::paragraph("p"),
            DocumentNode::relation("q", "block_quote"),
            DocumentNode::relation("img", "block_image"),
            DocumentNode::relation("nope", "block_lead"),
        ]);

        let resolver = ContentResolver::new(&records);
        assert_eq!(resolver.resolve(&doc), resolver.resolve(&doc));
        assert_eq!(resolve(&doc, &records), resolve(&doc, &records));
    }

    #[test]
    fn test_observer_sees_each_unresolved_position() {
        let doc = DocumentNode::doc(vec![
            DocumentNode::relation("x", "block_lead"),
            DocumentNode::paragraph("ok"),
            DocumentNode::relation("y", "block_lead"),
        ]);
        let recorder = Recorder::default();

        let resolved = ContentResolver::new(&[]).resolve_with(&doc, &recorder);

        assert_eq!(resolved.len(), 3);
        let seen = recorder.0.into_inner();
        assert_eq!(
            seen,
            vec![
                (0, Unresolved::MissingRecord { id: "x".into() }),
                (2, Unresolved::MissingRecord { id: "y".into() }),
            ]
        );
    }

    #[test]
    fn test_quote_layout_follows_width() {
        let records = vec![BlockRecord::new("q", "block_quote", quote_fields())];
        let doc = DocumentNode::doc(vec![DocumentNode::relation("q", "block_quote")]);

        match &resolve(&doc, &records)[0] {
            ResolvedNode::Block { block, .. } => assert_eq!(block.layout(), Layout::FullBleed),
            other => panic!("expected block, got {other:?}"),
        }
    }
}
