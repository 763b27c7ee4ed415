use egui::{menu, RichText, Ui};

use crate::app::KanbanApp;
use crate::ui::theme;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut KanbanApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  Board  ").font(theme::font_menu()), |ui| {
            if ui.button("  Add Project...       Ctrl+N").clicked() {
                app.show_add_project = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned board summary
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{} projects (in memory)", app.store.len()))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
