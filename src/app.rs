//! Main application module for steptabs
//!
//! This module implements the eframe App trait: it lays out the chrome and
//! the current page each frame, then applies the actions the UI reported.

use crate::config::{Page, WindowSize};
use crate::export::{copy_text_to_clipboard, export_to_html_file, DEFAULT_EXPORT_FILE_NAME};
use crate::files::dialogs::save_html_dialog;
use crate::state::{AppState, TOAST_SECS};
use crate::theme::ThemeManager;
use crate::ui::{
    show_about_page, show_footer, show_header, show_tabs_page, show_top_bar, HeaderAction,
    TabsAction, TabsView,
};
use eframe::egui;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// The main application struct that holds all state and implements eframe::App.
pub struct StepTabsApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    /// Last known inner window size, for persistence
    last_window_size: Option<egui::Vec2>,
    /// Application start time, used for toast and "Copied!" expiry
    start_time: Instant,
}

impl StepTabsApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing steptabs");

        let state = AppState::new();

        let mut theme_manager = ThemeManager::new(state.settings.theme);
        theme_manager.apply_if_needed(&cc.egui_ctx);
        info!("Applied initial theme: {:?}", state.settings.theme);

        Self {
            state,
            theme_manager,
            last_window_size: None,
            start_time: Instant::now(),
        }
    }

    /// Seconds since the app started.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Track window size changes for persistence.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let (size, maximized) = ctx.input(|i| {
            (
                i.viewport().inner_rect.map(|rect| rect.size()),
                i.viewport().maximized.unwrap_or(false),
            )
        });
        let Some(size) = size else {
            return;
        };

        let changed = self
            .last_window_size
            .map(|s| (s - size).length() > 1.0)
            .unwrap_or(true);
        if !changed {
            return;
        }

        self.last_window_size = Some(size);
        let window_size = WindowSize {
            width: size.x,
            height: size.y,
            maximized,
        };
        if self.state.settings.window_size != window_size {
            debug!(
                "Window state updated: {}x{}, maximized: {}",
                size.x, size.y, maximized
            );
            self.state.settings.window_size = window_size;
            self.state.mark_settings_dirty();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Lay out the whole window and return the deferred actions.
    fn render_ui(&mut self, ctx: &egui::Context) -> (Option<HeaderAction>, Vec<TabsAction>) {
        let colors = self.theme_manager.colors(ctx);
        let current_time = self.get_app_time();
        let student = &self.state.settings.student;

        egui::TopBottomPanel::top("top_bar")
            .frame(chrome_frame(colors.topbar_bg, 4.0))
            .show(ctx, |ui| show_top_bar(ui, &colors, student));

        let header_action = egui::TopBottomPanel::top("header")
            .frame(chrome_frame(colors.header_bg, 10.0))
            .show(ctx, |ui| {
                show_header(
                    ui,
                    &colors,
                    self.state.page(),
                    self.state.ui.menu_open,
                    self.theme_manager.toggle_icon(ctx),
                    self.theme_manager.toggle_tooltip(ctx),
                )
            })
            .inner;

        egui::TopBottomPanel::bottom("footer")
            .frame(chrome_frame(colors.footer_bg, 8.0))
            .show(ctx, |ui| {
                show_footer(
                    ui,
                    &colors,
                    student,
                    self.state.ui.toast_message.as_deref(),
                )
            });

        let tabs_actions = egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .fill(colors.background)
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| match self.state.page() {
                Page::Tabs => {
                    let view = TabsView {
                        tabs: self.state.tabs(),
                        document: self.state.document(),
                        editing_index: self.state.ui.editing_index,
                        rename_buffer: &self.state.ui.rename_buffer,
                        focus_rename: self.state.ui.focus_rename,
                        copied: self.state.is_copied(current_time),
                    };
                    show_tabs_page(ui, &colors, &view)
                }
                Page::About => {
                    show_about_page(ui, &colors, student);
                    Vec::new()
                }
            })
            .inner;

        (header_action, tabs_actions)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_header_action(&mut self, action: HeaderAction, ctx: &egui::Context) {
        match action {
            HeaderAction::Navigate(page) => self.state.navigate(page),
            HeaderAction::ToggleMenu => self.state.toggle_menu(),
            HeaderAction::ToggleTheme => self.handle_toggle_theme(ctx),
        }
    }

    fn handle_tabs_action(&mut self, action: TabsAction) {
        match action {
            TabsAction::Select(index) => {
                self.state.set_active_tab(index);
            }
            TabsAction::BeginRename(index) => {
                self.state.set_active_tab(index);
                self.state.begin_rename(index);
            }
            TabsAction::RenameEdited(title) => {
                self.state.ui.rename_buffer = title;
                self.state.apply_rename_buffer();
            }
            TabsAction::RenameFocused => self.state.ui.focus_rename = false,
            TabsAction::FinishRename => self.state.finish_rename(),
            TabsAction::Add => {
                if self.state.add_tab().is_none() {
                    let time = self.get_app_time();
                    self.state.show_toast("Tab limit reached", time, TOAST_SECS);
                }
            }
            TabsAction::RemoveActive => {
                self.state.remove_active_tab();
            }
            TabsAction::EditContent(content) => {
                let index = self.state.tabs().active_index();
                self.state.set_tab_content(index, content);
            }
            TabsAction::Copy => self.handle_copy(),
            TabsAction::Export => self.handle_export(),
        }
    }

    /// Flip the theme and persist the choice.
    fn handle_toggle_theme(&mut self, ctx: &egui::Context) {
        let new_theme = self.theme_manager.toggle(ctx);
        self.theme_manager.apply_if_needed(ctx);
        self.state.update_settings(|s| s.theme = new_theme);
        info!("Theme changed to: {:?}", new_theme);
    }

    /// Copy the generated document to the clipboard.
    fn handle_copy(&mut self) {
        let time = self.get_app_time();
        match copy_text_to_clipboard(self.state.document()) {
            Ok(()) => {
                info!("Copied tutorial document to clipboard");
                self.state.mark_copied(time);
            }
            Err(e) => {
                warn!("Failed to copy document to clipboard: {}", e);
                self.state
                    .show_toast(format!("Copy failed: {}", e), time, TOAST_SECS);
            }
        }
    }

    /// Ask for a destination and write the generated document there.
    fn handle_export(&mut self) {
        let initial_dir = self.state.settings.last_export_directory.clone();
        let Some(path) = save_html_dialog(initial_dir.as_deref(), DEFAULT_EXPORT_FILE_NAME) else {
            debug!("Export cancelled");
            return;
        };

        let options = self.state.document_options();
        let time = self.get_app_time();
        match export_to_html_file(&path, self.state.tabs().tabs(), &options) {
            Ok(()) => {
                if let Some(parent) = path.parent() {
                    let parent = parent.to_path_buf();
                    self.state
                        .update_settings(|s| s.last_export_directory = Some(parent));
                }

                self.state
                    .show_toast(format!("Exported to {}", path.display()), time, TOAST_SECS);

                if self.state.settings.open_after_export {
                    if let Err(e) = open::that(&path) {
                        warn!("Failed to open exported file: {}", e);
                    }
                }
            }
            Err(e) => {
                warn!("{}", e);
                self.state
                    .show_toast(format!("Export failed: {}", e), time, TOAST_SECS);
            }
        }
    }
}

/// Colored strip used by the top bar, header and footer.
fn chrome_frame(fill: egui::Color32, vertical_margin: f32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(16.0, vertical_margin))
}

impl eframe::App for StepTabsApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handles System theme changes too
        self.theme_manager.apply_if_needed(ctx);

        let current_time = self.get_app_time();
        self.state.update_toast(current_time);

        self.update_window_state(ctx);

        let (header_action, tabs_actions) = self.render_ui(ctx);

        if let Some(action) = header_action {
            self.handle_header_action(action, ctx);
        }
        for action in tabs_actions {
            self.handle_tabs_action(action);
        }

        // Keep repainting while a timed label is on screen so it disappears on time
        if self.state.ui.copied_expires_at.is_some() || self.state.ui.toast_expires_at.is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.shutdown();
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        debug!("Saving application state");
        self.state.save_settings_if_dirty();
    }

    /// Auto-save interval in seconds.
    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }
}
