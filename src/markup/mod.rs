//! Tutorial Markup Compiler
//!
//! Converts the freeform, line-oriented notes a user types into a tab into an
//! HTML fragment. The rules are intentionally tiny:
//!
//! - `-` or `*` at the start of a line becomes an unordered list item
//! - `1.`, `2.`, ... at the start of a line becomes an ordered list item
//! - `#`, `##`, ... at the start of a line becomes a heading
//! - an empty line becomes a `<br/>`
//! - anything else becomes a paragraph
//!
//! If any line already looks like markup (starts with `<` or `!DOCTYPE`),
//! the whole buffer is shown verbatim inside a `<pre><code>` block instead.
//!
//! # Architecture
//!
//! - `escape.rs` - HTML escaping shared with the document assembler
//! - `compiler.rs` - Line classifier and fragment builder

mod compiler;
mod escape;

pub use compiler::compile;
pub use escape::escape_html;
