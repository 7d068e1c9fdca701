//! Line classifier and HTML fragment builder.
//!
//! Each input line is trimmed and classified on its own; the only state
//! carried between lines is which kind of list (if any) is currently open.

use super::escape::escape_html;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Opening of the block used for content that already looks like markup.
const CODE_BLOCK_OPEN: &str = "<pre style=\"background: #f8f8f8; color: #333; padding: 1em; \
border-radius: 6px; font-family: Menlo, Monaco, Consolas, 'Courier New', monospace; \
font-size: 0.9rem; overflow-x: auto; border: 1px solid #ddd;\"><code>";

/// Closing of the markup block.
const CODE_BLOCK_CLOSE: &str = "</code></pre>";

/// Line break emitted for every blank line.
const LINE_BREAK: &str = "<br/>\n";

/// HTML only defines `<h1>` through `<h6>`.
const MAX_HEADING_LEVEL: usize = 6;

/// Marker of an unordered item plus the whitespace that follows it.
fn unordered_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-*]\s*").expect("unordered marker pattern is valid"))
}

/// `N.` prefix of an ordered item plus the whitespace that follows it.
fn ordered_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+\.\s*").expect("ordered marker pattern is valid"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Classification
// ─────────────────────────────────────────────────────────────────────────────

/// What a single (trimmed) line of tab content turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// `- text` or `* text`
    UnorderedItem(&'a str),
    /// `1. text`
    OrderedItem(&'a str),
    /// Nothing but whitespace
    Blank,
    /// `## text`, with the level clamped to 1..=6
    Heading(usize, &'a str),
    /// Any other text
    Paragraph(&'a str),
}

/// Classify a raw line. Rules are checked in priority order.
fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();

    if let Some(marker) = unordered_marker().find(trimmed) {
        return Line::UnorderedItem(&trimmed[marker.end()..]);
    }

    if let Some(marker) = ordered_marker().find(trimmed) {
        return Line::OrderedItem(&trimmed[marker.end()..]);
    }

    if trimmed.is_empty() {
        return Line::Blank;
    }

    if trimmed.starts_with('#') {
        // '#' is a single byte, so the count doubles as a byte offset
        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        let text = trimmed[hashes..].trim_start();
        return Line::Heading(hashes.min(MAX_HEADING_LEVEL), text);
    }

    Line::Paragraph(trimmed)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragment Builder
// ─────────────────────────────────────────────────────────────────────────────

/// The two list kinds. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>\n",
            ListKind::Ordered => "<ol>\n",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>\n",
            ListKind::Ordered => "</ol>\n",
        }
    }
}

/// Accumulates the fragment while tracking the open list.
#[derive(Debug, Default)]
struct FragmentBuilder {
    html: String,
    open_list: Option<ListKind>,
}

impl FragmentBuilder {
    fn push_line(&mut self, line: Line<'_>) {
        match line {
            Line::UnorderedItem(text) => self.push_item(ListKind::Unordered, text),
            Line::OrderedItem(text) => self.push_item(ListKind::Ordered, text),
            Line::Blank => {
                self.close_list();
                self.html.push_str(LINE_BREAK);
            }
            Line::Heading(level, text) => {
                self.close_list();
                let tag = format!("h{}", level);
                self.push_element(&tag, text);
            }
            Line::Paragraph(text) => {
                self.close_list();
                self.push_element("p", text);
            }
        }
    }

    fn push_item(&mut self, kind: ListKind, text: &str) {
        if self.open_list != Some(kind) {
            self.close_list();
            self.html.push_str(kind.open_tag());
            self.open_list = Some(kind);
        }
        self.push_element("li", text);
    }

    fn push_element(&mut self, tag: &str, text: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(&escape_html(text));
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push_str(">\n");
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.html.push_str(kind.close_tag());
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Check whether any line of the content already looks like HTML.
pub fn looks_like_markup(content: &str) -> bool {
    content.split('\n').any(|line| {
        let trimmed = line.trim();
        trimmed.starts_with('<') || trimmed.starts_with("!DOCTYPE")
    })
}

/// Compile one tab's content into an HTML fragment.
///
/// Never fails: every input, including the empty string, yields a fragment.
/// An empty string is a single blank line and compiles to `<br/>\n`.
///
/// # Example
///
/// ```ignore
/// assert_eq!(compile("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
/// ```
pub fn compile(content: &str) -> String {
    if looks_like_markup(content) {
        debug!("Content looks like markup, rendering as a code block");
        return format!(
            "{}{}{}",
            CODE_BLOCK_OPEN,
            escape_html(content),
            CODE_BLOCK_CLOSE
        );
    }

    let mut builder = FragmentBuilder::default();
    for line in content.split('\n') {
        builder.push_line(classify(line));
    }
    builder.finish()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
