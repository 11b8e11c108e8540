//! Server-side syntax highlighting for code blocks.
//!
//! Code blocks carry no language, so the language is guessed: a first-line
//! match (shebangs, modelines, `<?xml`) wins, otherwise each candidate grammar
//! parses the snippet and the one that recognises the most scopes is used.
//! Output is class-based (`hljs-*` span classes) so a stylesheet themes it.

use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{ParseState, ScopeStackOp, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Grammars tried when the first line does not identify the language, in
/// tie-break order.
const CANDIDATES: &[&str] = &[
    "Rust",
    "JavaScript",
    "Python",
    "Go",
    "C++",
    "Java",
    "Bourne Again Shell (bash)",
    "HTML",
    "CSS",
    "SQL",
    "JSON",
    "YAML",
];

/// Highlight `code` as HTML span markup. Returns `None` when no grammar
/// recognises anything in it; callers then emit the escaped text.
pub fn highlight(code: &str) -> Option<String> {
    if code.trim().is_empty() {
        return None;
    }
    let syntax = detect(code)?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::debug!("highlighting failed for {}: {}", syntax.name, e);
            return None;
        }
    }
    Some(generator.finalize())
}

fn detect(code: &str) -> Option<&'static SyntaxReference> {
    if let Some(syntax) = SYNTAX_SET.find_syntax_by_first_line(code) {
        return Some(syntax);
    }

    let mut best: Option<(&SyntaxReference, usize)> = None;
    for syntax in CANDIDATES
        .iter()
        .filter_map(|name| SYNTAX_SET.find_syntax_by_name(name))
    {
        let score = relevance(syntax, code);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((syntax, score));
        }
    }
    best.map(|(syntax, _)| syntax)
}

/// Scopes opened while parsing `code`, not counting the grammar's root scope.
fn relevance(syntax: &SyntaxReference, code: &str) -> usize {
    let mut state = ParseState::new(syntax);
    let mut pushes = 0usize;
    for line in LinesWithEndings::from(code) {
        match state.parse_line(line, &SYNTAX_SET) {
            Ok(ops) => {
                pushes += ops
                    .iter()
                    .filter(|(_, op)| matches!(op, ScopeStackOp::Push(_)))
                    .count();
            }
            Err(_) => return 0,
        }
    }
    pushes.saturating_sub(1)
}
