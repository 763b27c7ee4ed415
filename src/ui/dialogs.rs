use egui::{Color32, Context, RichText, Window};

use crate::app::KanbanApp;
use crate::model::validation;
use crate::ui::theme;

/// Render the "Add Project" dialog.
///
/// Create validates all fields against the declarative rules; on
/// failure the dialog stays open and lists one message per failing
/// field. On success the store is invoked and the fields are cleared.
pub fn show_add_project_dialog(app: &mut KanbanApp, ctx: &Context) {
    let mut should_close = false;

    Window::new(RichText::new("Add Project").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.visuals_mut().striped = false;

            ui.add_space(4.0);

            egui::Grid::new("add_project_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut app.form_title)
                            .hint_text("Project title...")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 60.0],
                        egui::TextEdit::multiline(&mut app.form_description)
                            .hint_text("What is this project about?")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("People").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [60.0, 24.0],
                        egui::TextEdit::singleline(&mut app.form_people)
                            .hint_text("1-5")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();
                });

            if !app.form_errors.is_empty() {
                ui.add_space(4.0);
                for error in &app.form_errors {
                    ui.label(RichText::new(error).size(11.0).color(theme::ERROR));
                }
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(RichText::new("Create").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], create_btn).clicked() {
                    match validation::validate_project_input(
                        &app.form_title,
                        &app.form_description,
                        &app.form_people,
                    ) {
                        Ok(input) => {
                            app.store
                                .add_project(input.title.clone(), input.description, input.people);
                            app.status_message = format!("Added project '{}'", input.title);
                            app.reset_form_fields();
                            should_close = true;
                        }
                        Err(errors) => {
                            app.form_errors = errors;
                        }
                    }
                }
                if ui
                    .add_sized([80.0, 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    app.reset_form_fields();
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_project = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut KanbanApp, ctx: &Context) {
    let mut should_close = false;

    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([260.0, 170.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Rust Kanban App").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("A kanban project board");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui
                    .add_sized([100.0, 28.0], egui::Button::new("Close"))
                    .clicked()
                {
                    should_close = true;
                }
            });
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
