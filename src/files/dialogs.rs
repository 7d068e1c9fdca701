//! Native file dialogs using the rfd crate.

use rfd::FileDialog;
use std::path::{Path, PathBuf};

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Opens a native save dialog for exporting the tutorial document.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_html_dialog(initial_dir: Option<&Path>, default_name: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Export Tutorial")
        .add_filter("HTML Files", HTML_EXTENSIONS)
        .add_filter("All Files", &["*"])
        .set_file_name(default_name);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}
