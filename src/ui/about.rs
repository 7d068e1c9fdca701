//! About page: who built the app.

use crate::config::StudentInfo;
use crate::theme::ThemeColors;
use eframe::egui::{RichText, Ui};

pub fn show_about_page(ui: &mut Ui, colors: &ThemeColors, student: &StudentInfo) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new("About").strong().color(colors.text));
        ui.add_space(16.0);

        ui.label(RichText::new(format!("Name: {}", student.name)).size(16.0));
        ui.label(RichText::new(format!("Student No: {}", student.number)).size(16.0));
        ui.add_space(16.0);

        ui.label(
            RichText::new("Write a tutorial as tabs, then copy or export it as a single HTML page.")
                .weak(),
        );
    });
}
