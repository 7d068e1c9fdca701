//! User settings and preferences for steptabs
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference
    #[default]
    System,
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Pages reachable from the navigation header.
///
/// The last visited page is persisted so the app reopens where the user
/// left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// The tab editor
    #[default]
    Tabs,
    /// Student information
    About,
}

impl Page {
    /// Get the display label for the page.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Tabs => "Tabs",
            Page::About => "About",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Student Information
// ─────────────────────────────────────────────────────────────────────────────

/// Author details shown in the top bar, footer and About page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInfo {
    pub name: String,
    pub number: String,
    pub copyright: String,
}

impl Default for StudentInfo {
    fn default() -> Self {
        Self {
            name: "Harman Singh Minhas".to_string(),
            number: "22586584".to_string(),
            copyright: "© LaTrobe University".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Color theme (light, dark, or system)
    pub theme: Theme,

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Page shown when the app was last closed
    pub last_page: Page,

    /// Window size
    pub window_size: WindowSize,

    // ─────────────────────────────────────────────────────────────────────────
    // Export Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// `<title>` of the generated document
    pub document_title: String,

    /// Whether the generated document embeds its `<style>` block
    pub include_styles: bool,

    /// Last directory used for HTML export
    pub last_export_directory: Option<PathBuf>,

    /// Whether to open exported files after export
    pub open_after_export: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────
    /// Author details
    pub student: StudentInfo,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            last_page: Page::default(),
            window_size: WindowSize::default(),
            document_title: String::from("Tutorial"),
            include_styles: true,
            last_export_directory: None,
            open_after_export: false,
            student: StudentInfo::default(),
        }
    }
}

impl Settings {
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 400.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        if self.document_title.trim().is_empty() {
            self.document_title = Settings::default().document_title;
        }
    }

    /// Load settings and sanitize them to ensure validity.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.last_page, Page::Tabs);
        assert_eq!(settings.document_title, "Tutorial");
        assert!(settings.include_styles);
        assert!(!settings.open_after_export);
        assert_eq!(settings.student.number, "22586584");
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_page_serialization() {
        assert_eq!(serde_json::to_string(&Page::Tabs).unwrap(), "\"tabs\"");
        assert_eq!(
            serde_json::from_str::<Page>("\"about\"").unwrap(),
            Page::About
        );
        assert_eq!(Page::About.label(), "About");
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let original = Settings {
            theme: Theme::Dark,
            last_page: Page::About,
            last_export_directory: Some(PathBuf::from("/tmp/out")),
            ..Settings::default()
        };
        let json = serde_json::to_string_pretty(&original).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let json = r#"{"theme": "dark", "student": {"name": "Ada"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.student.name, "Ada");
        assert_eq!(settings.student.number, StudentInfo::default().number);
        assert_eq!(settings.last_page, Page::Tabs);
    }

    #[test]
    fn test_settings_deserialize_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_sanitize_window_size() {
        let mut settings = Settings::default();
        settings.window_size.width = 10.0;
        settings.window_size.height = 50_000.0;
        settings.sanitize();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_sanitize_blank_document_title() {
        let settings = Settings::from_json_sanitized(r#"{"document_title": "  "}"#).unwrap();
        assert_eq!(settings.document_title, "Tutorial");
    }
}
