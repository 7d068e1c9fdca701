//! The tab editor page
//!
//! Three columns: the tab headers with add and remove buttons, an editor for
//! the active tab's content, and the read-only generated document with Copy
//! and Export buttons. Nothing is mutated here; every interaction comes back
//! as a [`TabsAction`] for the app to apply.

use crate::tabs::TabList;
use crate::theme::ThemeColors;
use eframe::egui::{self, Button, RichText, ScrollArea, Stroke, TextEdit, Ui};

const HEADER_BUTTON_WIDTH: f32 = 180.0;

/// Interactions on the tabs page, applied after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsAction {
    /// Make the tab at this index active
    Select(usize),
    /// Start renaming the tab at this index
    BeginRename(usize),
    /// The rename field now holds this text
    RenameEdited(String),
    /// The rename field took keyboard focus
    RenameFocused,
    /// The rename field was left (Enter or click elsewhere)
    FinishRename,
    /// Append a new tab
    Add,
    /// Remove the active tab
    RemoveActive,
    /// The active tab's content now holds this text
    EditContent(String),
    /// Copy the generated document
    Copy,
    /// Export the generated document to a file
    Export,
}

/// What the page needs to draw one frame.
pub struct TabsView<'a> {
    pub tabs: &'a TabList,
    pub document: &'a str,
    pub editing_index: Option<usize>,
    pub rename_buffer: &'a str,
    pub focus_rename: bool,
    pub copied: bool,
}

/// Render the page and collect the user's actions.
pub fn show_tabs_page(ui: &mut Ui, colors: &ThemeColors, view: &TabsView<'_>) -> Vec<TabsAction> {
    let mut actions = Vec::new();

    ui.heading(RichText::new("Tabs").strong().color(colors.text));
    ui.label(
        RichText::new(format!("{} tab(s)", view.tabs.len()))
            .small()
            .weak(),
    );
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        show_headers(&mut columns[0], colors, view, &mut actions);
        show_content(&mut columns[1], colors, view, &mut actions);
        show_output(&mut columns[2], colors, view, &mut actions);
    });

    actions
}

fn show_headers(ui: &mut Ui, colors: &ThemeColors, view: &TabsView<'_>, actions: &mut Vec<TabsAction>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Tabs Headers").strong());
        if ui
            .add_enabled(view.tabs.can_remove(), Button::new("−"))
            .on_hover_text("Remove the active tab")
            .clicked()
        {
            actions.push(TabsAction::RemoveActive);
        }
        if ui
            .add_enabled(view.tabs.can_add(), Button::new("+"))
            .on_hover_text("Add a tab")
            .clicked()
        {
            actions.push(TabsAction::Add);
        }
    });
    ui.add_space(8.0);

    ScrollArea::vertical()
        .id_source("tab_headers")
        .show(ui, |ui| {
            for (index, tab) in view.tabs.tabs().iter().enumerate() {
                if view.editing_index == Some(index) {
                    let mut buffer = view.rename_buffer.to_string();
                    let response = ui.add(
                        TextEdit::singleline(&mut buffer)
                            .desired_width(HEADER_BUTTON_WIDTH)
                            .horizontal_align(egui::Align::Center),
                    );
                    if view.focus_rename {
                        response.request_focus();
                        actions.push(TabsAction::RenameFocused);
                    }
                    if response.changed() {
                        actions.push(TabsAction::RenameEdited(buffer));
                    }
                    if response.lost_focus() {
                        actions.push(TabsAction::FinishRename);
                    }
                } else {
                    let active = index == view.tabs.active_index();
                    let label = if active {
                        RichText::new(&tab.title).strong()
                    } else {
                        RichText::new(&tab.title)
                    };
                    let stroke_width = if active { 2.0 } else { 1.0 };
                    let button = Button::new(label)
                        .fill(if active { colors.accent } else { colors.surface_alt })
                        .stroke(Stroke::new(stroke_width, colors.border))
                        .min_size(egui::vec2(HEADER_BUTTON_WIDTH, 32.0));

                    let mut response = ui.add(button);
                    if !tab.title.is_empty() {
                        response = response.on_hover_text(&tab.title);
                    }

                    if response.double_clicked() && view.tabs.can_rename(index) {
                        actions.push(TabsAction::BeginRename(index));
                    } else if response.clicked() {
                        actions.push(TabsAction::Select(index));
                    }
                }
                ui.add_space(4.0);
            }
        });
}

fn show_content(ui: &mut Ui, colors: &ThemeColors, view: &TabsView<'_>, actions: &mut Vec<TabsAction>) {
    ui.label(RichText::new("Tabs Content").strong());
    ui.add_space(8.0);

    let mut content = view.tabs.active_tab().content.clone();
    egui::Frame::none()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .rounding(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_source("tab_content")
                .show(ui, |ui| {
                    let response = ui.add(
                        TextEdit::multiline(&mut content)
                            .id_source(("tab_content_editor", view.tabs.active_index()))
                            .frame(false)
                            .desired_width(f32::INFINITY)
                            .desired_rows(20)
                            .text_color(colors.text),
                    );
                    if response.changed() {
                        actions.push(TabsAction::EditContent(content.clone()));
                    }
                });
        });
}

fn show_output(ui: &mut Ui, colors: &ThemeColors, view: &TabsView<'_>, actions: &mut Vec<TabsAction>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Generated HTML Output").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("Export…")
                .on_hover_text("Save the document as an HTML file")
                .clicked()
            {
                actions.push(TabsAction::Export);
            }
            let copy_label = if view.copied { "Copied!" } else { "Copy" };
            if ui.button(copy_label).clicked() {
                actions.push(TabsAction::Copy);
            }
        });
    });
    ui.add_space(8.0);

    let mut document = view.document;
    egui::Frame::none()
        .fill(colors.output_bg)
        .stroke(Stroke::new(1.0, colors.border))
        .rounding(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::both()
                .id_source("generated_output")
                .show(ui, |ui| {
                    ui.add(
                        TextEdit::multiline(&mut document)
                            .code_editor()
                            .frame(false)
                            .desired_width(f32::INFINITY)
                            .desired_rows(20)
                            .text_color(colors.output_text),
                    );
                });
        });
}
