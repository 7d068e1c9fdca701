//! Tutorial Export Module
//!
//! This module turns the tab list into a standalone HTML document and hands
//! it to one of the output sinks: the read-only preview, the clipboard, or a
//! file on disk.
//!
//! # Architecture
//!
//! - `options.rs` - Document title and styling options
//! - `html.rs` - Document assembly and file export
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;
pub mod html;
pub mod options;

pub use clipboard::copy_text_to_clipboard;
pub use html::{assemble_with, export_to_html_file};
pub use options::{DocumentOptions, DEFAULT_EXPORT_FILE_NAME};
