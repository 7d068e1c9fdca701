//! Tutorial Document Generation
//!
//! This module assembles every tab into one standalone HTML document: a row
//! of header buttons, one content container per tab, and a small inline
//! script that switches between them. The result opens in any browser
//! without external files.

use super::options::DocumentOptions;
use crate::error::{Error, Result};
use crate::markup::{compile, escape_html};
use crate::tabs::Tab;
use log::{debug, info};
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// HTML Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the tutorial document with default options.
#[allow(dead_code)]
pub fn assemble(tabs: &[Tab]) -> String {
    assemble_with(tabs, &DocumentOptions::default())
}

/// Generate the tutorial document.
///
/// Output depends only on `tabs` and `options`: the same input always gives
/// byte-identical output. The first tab is visible and its header button is
/// marked active; every other container starts hidden.
///
/// # Arguments
///
/// * `tabs` - Tabs in display order
/// * `options` - Document title and whether to embed the style block
pub fn assemble_with(tabs: &[Tab], options: &DocumentOptions) -> String {
    debug!("Assembling tutorial document with {} tab(s)", tabs.len());

    let styles = if options.include_styles {
        format!("<style>{}</style>\n", TAB_CSS)
    } else {
        String::new()
    };

    let headers = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| tab_header(i, tab))
        .collect::<Vec<_>>()
        .join("\n");

    let contents = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| tab_container(i, tab))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
{styles}</head>
<body>

<!-- Tabs Header -->
<div class="tab">
{headers}
</div>

<!-- Tabs Content -->
{contents}

<script>{script}</script>

</body>
</html>
"#,
        title = escape_html(&options.title),
        styles = styles,
        headers = headers,
        contents = contents,
        script = TAB_SCRIPT,
    )
}

/// The anchor id of the tab container at `index`.
pub fn tab_id(index: usize) -> String {
    format!("tab{}", index)
}

/// One header button, labeled `"{n}. {title}"`.
fn tab_header(index: usize, tab: &Tab) -> String {
    let class = if index == 0 {
        "tablinks active"
    } else {
        "tablinks"
    };

    format!(
        "<button class=\"{class}\" onclick=\"openTab(event, '{id}')\">{number}. {title}</button>",
        class = class,
        id = tab_id(index),
        number = index + 1,
        title = escape_html(&tab.title),
    )
}

/// One content container with the title heading and compiled body.
fn tab_container(index: usize, tab: &Tab) -> String {
    let display = if index == 0 { "block" } else { "none" };

    format!(
        "<div id=\"{id}\" class=\"tabcontent\" style=\"display: {display};\">\n<h3>{title}</h3>\n{body}</div>",
        id = tab_id(index),
        display = display,
        title = escape_html(&tab.title),
        body = compile(&tab.content),
    )
}

/// Export the tutorial document to an HTML file.
///
/// # Errors
///
/// Returns `Error::FileWrite` if the file cannot be written.
pub fn export_to_html_file(path: &Path, tabs: &[Tab], options: &DocumentOptions) -> Result<()> {
    let html = assemble_with(tabs, options);

    std::fs::write(path, html).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Exported {} tab(s) to {}", tabs.len(), path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Embedded CSS and Script
// ─────────────────────────────────────────────────────────────────────────────

/// Styling for the tab header and containers.
const TAB_CSS: &str = r#"
body {
    font-family: Arial, sans-serif;
    margin: 20px;
}

.tab {
    overflow: hidden;
    border: 1px solid #ccc;
    background-color: #f1f1f1;
}

.tab .tablinks {
    background-color: inherit;
    float: left;
    border: none;
    outline: none;
    cursor: pointer;
    padding: 14px 16px;
    transition: background-color 0.3s;
    font-size: 16px;
}

.tab .tablinks:hover {
    background-color: #ddd;
}

.tab .tablinks.active {
    background-color: #ccc;
}

.tabcontent {
    padding: 6px 12px;
    border: 1px solid #ccc;
    border-top: none;
}

.tabcontent h3 {
    margin-top: 0;
}
"#;

/// Exclusive-visibility tab switching.
const TAB_SCRIPT: &str = r#"
function openTab(evt, tabId) {
  var contents = document.getElementsByClassName("tabcontent");
  for (var i = 0; i < contents.length; i++) {
    contents[i].style.display = "none";
  }
  var links = document.getElementsByClassName("tablinks");
  for (var j = 0; j < links.length; j++) {
    links[j].classList.remove("active");
  }
  document.getElementById(tabId).style.display = "block";
  evt.currentTarget.classList.add("active");
}
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tabs() -> Vec<Tab> {
        vec![
            Tab::new("Setup", "hello"),
            Tab::new("Install", "- node\n- git"),
            Tab::new("Run", "1. open\n2. code"),
        ]
    }

    #[test]
    fn test_single_tab_document() {
        let html = assemble(&[Tab::new("Setup", "hello")]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>Tutorial</title>"));
        assert_eq!(html.matches("class=\"tabcontent\"").count(), 1);
        assert_eq!(html.matches("id=\"tab").count(), 1);
        assert!(html.contains(
            "<div id=\"tab0\" class=\"tabcontent\" style=\"display: block;\">\n<h3>Setup</h3>\n<p>hello</p>\n</div>"
        ));
    }

    #[test]
    fn test_headers_are_numbered_and_wired() {
        let html = assemble(&sample_tabs());

        assert!(html.contains(
            "<button class=\"tablinks active\" onclick=\"openTab(event, 'tab0')\">1. Setup</button>"
        ));
        assert!(html.contains(
            "<button class=\"tablinks\" onclick=\"openTab(event, 'tab1')\">2. Install</button>"
        ));
        assert!(html.contains(
            "<button class=\"tablinks\" onclick=\"openTab(event, 'tab2')\">3. Run</button>"
        ));
        assert_eq!(html.matches("tablinks active").count(), 1);
    }

    #[test]
    fn test_only_first_container_visible() {
        let html = assemble(&sample_tabs());

        assert_eq!(html.matches("style=\"display: block;\"").count(), 1);
        assert_eq!(html.matches("style=\"display: none;\"").count(), 2);
        assert!(html.contains("<div id=\"tab1\" class=\"tabcontent\" style=\"display: none;\">"));
    }

    #[test]
    fn test_fragments_are_compiled_in_order() {
        let html = assemble(&sample_tabs());

        let install = html.find("<li>node</li>").unwrap();
        let run = html.find("<li>open</li>").unwrap();
        assert!(install < run);
        assert!(html.contains("<ul>\n<li>node</li>\n<li>git</li>\n</ul>\n</div>"));
        assert!(html.contains("<ol>\n<li>open</li>\n<li>code</li>\n</ol>\n</div>"));
    }

    #[test]
    fn test_script_and_styles_embedded_once() {
        let html = assemble(&sample_tabs());
        assert_eq!(html.matches("function openTab(evt, tabId)").count(), 1);
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(html.contains(".tabcontent {"));
        assert!(html.contains(".tab .tablinks.active {"));
    }

    #[test]
    fn test_styles_can_be_omitted() {
        let options = DocumentOptions::default().with_styles(false);
        let html = assemble_with(&sample_tabs(), &options);
        assert!(!html.contains("<style>"));
        assert!(html.contains("function openTab"));
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let options = DocumentOptions::default().with_title("Git & GitHub");
        let html = assemble_with(&sample_tabs(), &options);
        assert!(html.contains("<title>Git &amp; GitHub</title>"));
    }

    #[test]
    fn test_tab_titles_are_escaped() {
        let html = assemble(&[Tab::new("<b>Bold</b>", "text")]);
        assert!(html.contains("1. &lt;b&gt;Bold&lt;/b&gt;</button>"));
        assert!(html.contains("<h3>&lt;b&gt;Bold&lt;/b&gt;</h3>"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_empty_title_and_content() {
        let html = assemble(&[Tab::new("", "")]);
        assert!(html.contains("onclick=\"openTab(event, 'tab0')\">1. </button>"));
        assert!(html.contains("<h3></h3>\n<br/>\n</div>"));
    }

    #[test]
    fn test_pathological_content_still_renders() {
        let tabs = vec![
            Tab::new("A", "####"),
            Tab::new("B", "1."),
            Tab::new("C", "<html>"),
        ];
        let html = assemble(&tabs);
        assert!(html.contains("<h4></h4>"));
        assert!(html.contains("<ol>\n<li></li>\n</ol>"));
        assert!(html.contains("<code>&lt;html&gt;</code>"));
        assert_eq!(html.matches("class=\"tabcontent\"").count(), 3);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let tabs = sample_tabs();
        assert_eq!(assemble(&tabs), assemble(&tabs));
    }

    #[test]
    fn test_tab_id() {
        assert_eq!(tab_id(0), "tab0");
        assert_eq!(tab_id(14), "tab14");
    }

    #[test]
    fn test_export_to_html_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tutorial.html");
        let tabs = sample_tabs();
        let options = DocumentOptions::default();

        export_to_html_file(&path, &tabs, &options).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, assemble_with(&tabs, &options));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("tutorial.html");

        let err = export_to_html_file(&path, &sample_tabs(), &DocumentOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
