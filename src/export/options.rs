//! Export Options
//!
//! Options that shape the generated tutorial document. They are derived from
//! the user's settings so the preview, the clipboard copy and the exported
//! file always agree.

use crate::config::Settings;
use serde::{Deserialize, Serialize};

/// Title used when the settings do not provide one.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Tutorial";

/// File name suggested in the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "tutorial.html";

/// Configuration for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Contents of the `<title>` element
    pub title: String,
    /// Whether to embed the `<style>` block for the tab classes
    pub include_styles: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
            include_styles: true,
        }
    }
}

impl DocumentOptions {
    /// Build options from the current settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let options = Self::default().with_styles(settings.include_styles);
        if settings.document_title.trim().is_empty() {
            options
        } else {
            options.with_title(settings.document_title.as_str())
        }
    }

    /// Builder: set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: toggle the embedded style block.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }
}
