//! Theme System for steptabs
//!
//! Two fixed palettes (light and dark) color the top bar, the header, the
//! page body, the footer and the editor panes. The `Theme` setting in
//! `config::settings` selects the palette; `System` follows the visuals egui
//! was started with.
//!
//! # Usage
//!
//! ```ignore
//! let colors = ThemeColors::from_theme(Theme::Dark, &ctx.style().visuals);
//! ui.label(RichText::new("LTU Web App").color(colors.header_text));
//! ctx.set_visuals(colors.to_visuals());
//! ```

mod manager;

pub use manager::ThemeManager;

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Palette for the whole window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Page body background
    pub background: Color32,
    /// Page body text
    pub text: Color32,
    /// Top bar (student number, app name)
    pub topbar_bg: Color32,
    /// Navigation header
    pub header_bg: Color32,
    pub header_text: Color32,
    /// Footer strip
    pub footer_bg: Color32,
    pub footer_text: Color32,
    /// Panel and widget outlines
    pub border: Color32,
    /// Text input background
    pub surface: Color32,
    /// Buttons and inactive tab headers
    pub surface_alt: Color32,
    /// Highlight for the active tab header
    pub accent: Color32,
    /// Generated-document pane, always dark
    pub output_bg: Color32,
    pub output_text: Color32,
}

impl ThemeColors {
    /// Resolve the palette for a theme setting.
    pub fn from_theme(theme: crate::config::Theme, visuals: &Visuals) -> Self {
        match theme {
            crate::config::Theme::Dark => Self::dark(),
            crate::config::Theme::Light => Self::light(),
            crate::config::Theme::System => {
                if visuals.dark_mode {
                    Self::dark()
                } else {
                    Self::light()
                }
            }
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xed, 0xf2, 0xf3),
            text: Color32::from_rgb(0x0f, 0x17, 0x2a),
            topbar_bg: Color32::from_rgb(0xed, 0xf2, 0xf3),
            header_bg: Color32::from_rgb(0x37, 0x41, 0x51),
            header_text: Color32::WHITE,
            footer_bg: Color32::from_rgb(0x37, 0x41, 0x51),
            footer_text: Color32::WHITE,
            border: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            surface: Color32::from_rgb(0xf9, 0xfa, 0xfb),
            surface_alt: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            accent: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            output_bg: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            output_text: Color32::from_rgb(0xd4, 0xd4, 0xd4),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x36, 0x39, 0x3f),
            text: Color32::WHITE,
            topbar_bg: Color32::from_rgb(0x36, 0x39, 0x3f),
            header_bg: Color32::BLACK,
            header_text: Color32::WHITE,
            footer_bg: Color32::BLACK,
            footer_text: Color32::WHITE,
            border: Color32::from_rgb(0x33, 0x41, 0x55),
            surface: Color32::from_rgb(0x2b, 0x2f, 0x36),
            surface_alt: Color32::from_rgb(0x3a, 0x3f, 0x47),
            accent: Color32::from_rgb(0x55, 0x5b, 0x66),
            output_bg: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            output_text: Color32::from_rgb(0xd4, 0xd4, 0xd4),
        }
    }

    /// Check if this is a dark palette.
    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }

    /// Convert the palette to egui `Visuals`.
    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        let rounding = Rounding::same(4.0);

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.surface_alt;
        visuals.code_bg_color = self.output_bg;
        visuals.override_text_color = Some(self.text);
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_rounding = Rounding::same(6.0);

        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.text);

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text);

        visuals.widgets.inactive.bg_fill = self.surface_alt;
        visuals.widgets.inactive.weak_bg_fill = self.surface_alt;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = self.accent;
        visuals.widgets.hovered.weak_bg_fill = self.accent;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.text);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.text);
        visuals.widgets.active.rounding = rounding;

        visuals.popup_shadow = egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: Color32::from_black_alpha(40),
        };

        visuals
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    #[test]
    fn test_palettes_differ() {
        assert!(!ThemeColors::light().is_dark());
        assert!(ThemeColors::dark().is_dark());
        assert_ne!(ThemeColors::light().header_bg, ThemeColors::dark().header_bg);
    }

    #[test]
    fn test_output_pane_is_dark_in_both_palettes() {
        assert_eq!(ThemeColors::light().output_bg, ThemeColors::dark().output_bg);
        assert_eq!(
            ThemeColors::light().output_text,
            Color32::from_rgb(0xd4, 0xd4, 0xd4)
        );
    }

    #[test]
    fn test_from_theme_resolves_system() {
        assert_eq!(
            ThemeColors::from_theme(Theme::System, &Visuals::dark()),
            ThemeColors::dark()
        );
        assert_eq!(
            ThemeColors::from_theme(Theme::System, &Visuals::light()),
            ThemeColors::light()
        );
        assert_eq!(
            ThemeColors::from_theme(Theme::Light, &Visuals::dark()),
            ThemeColors::light()
        );
    }

    #[test]
    fn test_to_visuals() {
        let visuals = ThemeColors::dark().to_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, ThemeColors::dark().background);

        let visuals = ThemeColors::light().to_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.override_text_color, Some(ThemeColors::light().text));
    }
}
