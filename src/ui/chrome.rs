//! Window chrome: top bar, navigation header and footer.
//!
//! The header only reports what was clicked as a [`HeaderAction`]; the app
//! applies it after the frame is laid out.

use crate::config::{Page, StudentInfo};
use crate::theme::ThemeColors;
use eframe::egui::{self, Align, Button, Layout, RichText, Ui};

/// Name shown in the top bar and window title.
pub const APP_TITLE: &str = "LTU Web App";

/// Actions that can be triggered from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Switch to a page
    Navigate(Page),
    /// Flip between light and dark
    ToggleTheme,
    /// Open or close the ☰ menu
    ToggleMenu,
}

/// Student number on the left, app name on the right.
pub fn show_top_bar(ui: &mut Ui, colors: &ThemeColors, student: &StudentInfo) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("Student No: {}", student.number))
                .small()
                .color(colors.text),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(APP_TITLE).strong().color(colors.text));
        });
    });
}

/// Navigation links, theme toggle and the ☰ menu.
pub fn show_header(
    ui: &mut Ui,
    colors: &ThemeColors,
    current_page: Page,
    menu_open: bool,
    theme_icon: &str,
    theme_tooltip: &str,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let mut tabs_label = RichText::new(Page::Tabs.label())
            .size(16.0)
            .color(colors.header_text);
        if current_page == Page::Tabs {
            tabs_label = tabs_label.underline();
        }
        if ui.add(Button::new(tabs_label).frame(false)).clicked() {
            action = Some(HeaderAction::Navigate(Page::Tabs));
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let menu_button = ui.add(
                Button::new(RichText::new("☰").size(18.0).color(colors.header_text)).frame(false),
            );
            if menu_button.clicked() {
                action = Some(HeaderAction::ToggleMenu);
            }

            let theme_button = ui
                .add(
                    Button::new(RichText::new(theme_icon).size(16.0).color(colors.header_text))
                        .frame(false),
                )
                .on_hover_text(theme_tooltip);
            if theme_button.clicked() {
                action = Some(HeaderAction::ToggleTheme);
            }

            if menu_open {
                egui::Area::new(egui::Id::new("header_menu"))
                    .order(egui::Order::Foreground)
                    .fixed_pos(menu_button.rect.left_bottom() + egui::vec2(-80.0, 6.0))
                    .show(ui.ctx(), |ui| {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.set_min_width(100.0);
                            let about = ui.selectable_label(
                                current_page == Page::About,
                                Page::About.label(),
                            );
                            if about.clicked() {
                                action = Some(HeaderAction::Navigate(Page::About));
                            }
                        });
                    });
            }
        });
    });

    action
}

/// `{copyright} | {name} | {number}`, plus the current toast on the right.
pub fn show_footer(ui: &mut Ui, colors: &ThemeColors, student: &StudentInfo, toast: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "{} | {} | {}",
                student.copyright, student.name, student.number
            ))
            .color(colors.footer_text),
        );

        if let Some(message) = toast {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(message).italics().color(colors.footer_text));
            });
        }
    });
}
