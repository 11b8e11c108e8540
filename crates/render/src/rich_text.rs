//! Generic rich-text renderer.
//!
//! Covers the node and mark kinds the CMS editor produces. Unknown node kinds
//! render their children. Relation placeholders never reach this renderer at
//! the top level; nested ones render nothing.

use magazine_core::document::{DocumentNode, Mark};
use magazine_core::validation::is_safe_href;
use maud::{html, Markup};

/// Render a document or any subtree of one.
pub fn render_node(node: &DocumentNode) -> Markup {
    match node.kind.as_str() {
        "text" => render_text(node),
        "paragraph" => html! { p { (render_children(node)) } },
        "heading" => render_heading(node),
        "bulletList" => html! { ul { (render_children(node)) } },
        "orderedList" => {
            let start = node.attr_u64("start").filter(|s| *s != 1);
            html! { ol start=[start] { (render_children(node)) } }
        }
        "listItem" => html! { li { (render_children(node)) } },
        "blockquote" => html! { blockquote { (render_children(node)) } },
        "codeBlock" => {
            let language = node
                .attr_str("language")
                .filter(|l| !l.trim().is_empty())
                .map(|l| format!("language-{}", l.trim()));
            html! { pre { code class=[language] { (node.plain_text()) } } }
        }
        "hardBreak" => html! { br; },
        "horizontalRule" => html! { hr; },
        "relation-block" => html! {},
        _ => render_children(node),
    }
}

fn render_children(node: &DocumentNode) -> Markup {
    html! {
        @for child in &node.children {
            (render_node(child))
        }
    }
}

fn render_heading(node: &DocumentNode) -> Markup {
    let inner = render_children(node);
    match node.attr_u64("level").unwrap_or(1).clamp(1, 6) {
        1 => html! { h1 { (inner) } },
        2 => html! { h2 { (inner) } },
        3 => html! { h3 { (inner) } },
        4 => html! { h4 { (inner) } },
        5 => html! { h5 { (inner) } },
        _ => html! { h6 { (inner) } },
    }
}

fn render_text(node: &DocumentNode) -> Markup {
    let text = node.text.as_deref().unwrap_or_default();
    // First mark ends up outermost.
    node.marks
        .iter()
        .rev()
        .fold(html! { (text) }, |inner, mark| apply_mark(mark, inner))
}

fn apply_mark(mark: &Mark, inner: Markup) -> Markup {
    match mark.kind.as_str() {
        "bold" => html! { strong { (inner) } },
        "italic" => html! { em { (inner) } },
        "strike" => html! { s { (inner) } },
        "underline" => html! { u { (inner) } },
        "code" => html! { code { (inner) } },
        "link" => match mark.attr_str("href").filter(|href| is_safe_href(href)) {
            Some(href) => html! {
                a href=(href.trim()) rel="noopener noreferrer nofollow" { (inner) }
            },
            None => inner,
        },
        _ => inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_json(value: serde_json::Value) -> String {
        let node: DocumentNode = serde_json::from_value(value).unwrap();
        render_node(&node).into_string()
    }

    #[test]
    fn test_paragraph_text_is_escaped() {
        let html = render_node(&DocumentNode::paragraph("<b>a & b</b>")).into_string();
        assert_eq!(html, "<p>&lt;b&gt;a &amp; b&lt;/b&gt;</p>");
    }

    #[test]
    fn test_headings_and_lists() {
        let html = render_json(json!({"type": "doc", "content": [
            {"type": "heading", "attrs": {"level": 3}, "content": [{"type": "text", "text": "Title"}]},
            {"type": "orderedList", "attrs": {"start": 4}, "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "four"}]}]}
            ]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "dot"}]}]}
            ]}
        ]}));
        assert_eq!(
            html,
            "<h3>Title</h3><ol start=\"4\"><li><p>four</p></li></ol><ul><li><p>dot</p></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_default_start_is_omitted() {
        let html = render_json(json!({"type": "orderedList", "attrs": {"start": 1}, "content": []}));
        assert_eq!(html, "<ol></ol>");
    }

    #[test]
    fn test_marks_nest_in_order() {
        let html = render_json(json!({
            "type": "text",
            "text": "hi",
            "marks": [{"type": "bold"}, {"type": "italic"}]
        }));
        assert_eq!(html, "<strong><em>hi</em></strong>");
    }

    #[test]
    fn test_link_marks() {
        let safe = render_json(json!({
            "type": "text", "text": "docs",
            "marks": [{"type": "link", "attrs": {"href": "https://example.com/?a=1&b=2"}}]
        }));
        assert_eq!(
            safe,
            "<a href=\"https://example.com/?a=1&amp;b=2\" rel=\"noopener noreferrer nofollow\">docs</a>"
        );

        let unsafe_link = render_json(json!({
            "type": "text", "text": "click",
            "marks": [{"type": "link", "attrs": {"href": "javascript:alert(1)"}}]
        }));
        assert_eq!(unsafe_link, "click");
    }

    #[test]
    fn test_code_block_break_and_rule() {
        let html = render_json(json!({"type": "doc", "content": [
            {"type": "codeBlock", "attrs": {"language": "rust"}, "content": [{"type": "text", "text": "a < b"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "one"}, {"type": "hardBreak"}, {"type": "text", "text": "two"}
            ]},
            {"type": "horizontalRule"}
        ]}));
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">a &lt; b</code></pre><p>one<br>two</p><hr>"
        );
    }

    #[test]
    fn test_unknown_kinds_render_children_and_nested_placeholders_render_nothing() {
        let html = render_json(json!({"type": "callout", "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "kept"}]},
            {"type": "relation-block", "attrs": {"id": 1, "collection": "block_code"}}
        ]}));
        assert_eq!(html, "<p>kept</p>");
    }
}
