//! Theme Manager for steptabs
//!
//! Holds the current theme setting, applies it to the egui context, and
//! answers the questions the chrome asks (which icon to show, which palette
//! to paint with).

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::ThemeColors;
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme setting (Light, Dark, or System)
    current_theme: Theme,
    /// Cached visuals for the current theme
    cached_visuals: Option<Visuals>,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
    /// Last detected system dark mode state (for System theme)
    last_system_dark_mode: Option<bool>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            cached_visuals: None,
            needs_apply: true,
            last_system_dark_mode: None,
        }
    }

    /// Set the theme and mark for reapplication.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.cached_visuals = None;
            self.needs_apply = true;
        }
    }

    /// Flip between light and dark, resolving System to whatever is showing.
    ///
    /// Returns the new theme.
    pub fn toggle(&mut self, ctx: &Context) -> Theme {
        let new_theme = if self.is_dark(ctx) {
            Theme::Light
        } else {
            Theme::Dark
        };
        self.set_theme(new_theme);
        new_theme
    }

    /// Apply the theme only if it changed (or the system preference did).
    ///
    /// Returns `true` if the theme was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if self.current_theme == Theme::System {
            let current_system_dark = ctx.style().visuals.dark_mode;
            if self.last_system_dark_mode != Some(current_system_dark) {
                self.last_system_dark_mode = Some(current_system_dark);
                self.cached_visuals = None;
                self.needs_apply = true;
                debug!("System dark mode changed to: {}", current_system_dark);
            }
        }

        if !self.needs_apply {
            return false;
        }

        let visuals = self.get_or_create_visuals(ctx);
        ctx.set_visuals(visuals);
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
        true
    }

    fn get_or_create_visuals(&mut self, ctx: &Context) -> Visuals {
        if let Some(ref visuals) = self.cached_visuals {
            return visuals.clone();
        }

        let visuals = self.colors(ctx).to_visuals();
        self.cached_visuals = Some(visuals.clone());
        visuals
    }

    /// Palette for the effective theme.
    pub fn colors(&self, ctx: &Context) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme, &ctx.style().visuals)
    }

    /// Check if the current effective theme is dark.
    pub fn is_dark(&self, ctx: &Context) -> bool {
        match self.current_theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => ctx.style().visuals.dark_mode,
        }
    }

    /// Icon for the toggle button: the moon offers dark mode, the sun light mode.
    pub fn toggle_icon(&self, ctx: &Context) -> &'static str {
        if self.is_dark(ctx) {
            "☀"
        } else {
            "🌙"
        }
    }

    /// Tooltip for the toggle button.
    pub fn toggle_tooltip(&self, ctx: &Context) -> &'static str {
        if self.is_dark(ctx) {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn light_ctx() -> Context {
        let ctx = Context::default();
        ctx.set_visuals(Visuals::light());
        ctx
    }

    #[test]
    fn test_theme_manager_default_is_system() {
        let manager = ThemeManager::default();
        assert_eq!(manager.current_theme, Theme::System);
        assert!(manager.needs_apply);
    }

    #[test]
    fn test_set_same_theme_does_not_reapply() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.needs_apply = false;

        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply);

        manager.set_theme(Theme::Dark);
        assert!(manager.needs_apply);
        assert!(manager.cached_visuals.is_none());
    }

    #[test]
    fn test_toggle_between_light_and_dark() {
        let ctx = light_ctx();
        let mut manager = ThemeManager::new(Theme::Light);

        assert_eq!(manager.toggle(&ctx), Theme::Dark);
        assert_eq!(manager.toggle(&ctx), Theme::Light);
    }

    #[test]
    fn test_toggle_from_system_uses_effective_theme() {
        let ctx = light_ctx();
        let mut manager = ThemeManager::new(Theme::System);
        assert_eq!(manager.toggle(&ctx), Theme::Dark);
    }

    #[test]
    fn test_apply_if_needed_sets_visuals_once() {
        let ctx = light_ctx();
        let mut manager = ThemeManager::new(Theme::Dark);

        assert!(manager.apply_if_needed(&ctx));
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, ThemeColors::dark().background);

        assert!(!manager.apply_if_needed(&ctx));
    }

    #[test]
    fn test_toggle_icon() {
        let ctx = light_ctx();
        let mut manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.toggle_icon(&ctx), "🌙");

        manager.set_theme(Theme::Dark);
        assert_eq!(manager.toggle_icon(&ctx), "☀");
    }
}
