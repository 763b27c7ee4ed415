use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui};
use uuid::Uuid;

use crate::model::{ColumnView, Project, ProjectStatus};
use crate::ui::drag::{self, CardDrag};
use crate::ui::theme;

/// Actions the board can request from the app.
pub enum BoardAction {
    None,
    /// Open the Add Project dialog.
    AddProject,
    /// A card was dropped on the column with the given status.
    Move(Uuid, ProjectStatus),
}

/// Render the two-column board. Mutations are reported back as a
/// [`BoardAction`]; the board itself never touches the store.
pub fn show_board(active: &ColumnView, finished: &ColumnView, ui: &mut Ui) -> BoardAction {
    let mut action = BoardAction::None;

    ui.columns(2, |cols| {
        for (col_ui, column) in cols.iter_mut().zip([active, finished]) {
            if let Some(a) = show_column(column, col_ui) {
                action = a;
            }
        }
    });

    action
}

fn show_column(column: &ColumnView, ui: &mut Ui) -> Option<BoardAction> {
    let status = column.status();
    let mut action = None;

    // Header: colored dot, column name, count badge. The Active column
    // also carries the add button.
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(dot_rect.center(), 4.0, status.accent());
        ui.label(
            RichText::new(status.label().to_uppercase())
                .strong()
                .size(13.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            RichText::new(format!("({})", column.count()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );

        if status == ProjectStatus::Active {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let btn = egui::Button::new(
                    RichText::new(format!("{} Add Project", egui_phosphor::regular::PLUS))
                        .color(Color32::WHITE)
                        .size(12.0),
                )
                .fill(theme::ACCENT)
                .rounding(Rounding::same(5.0));
                if ui.add(btn).clicked() {
                    action = Some(BoardAction::AddProject);
                }
            });
        }
    });
    ui.add_space(4.0);

    let frame = Frame {
        fill: theme::BG_DARK,
        rounding: Rounding::same(6.0),
        inner_margin: Margin::same(8.0),
        outer_margin: Margin::ZERO,
        stroke: Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    let (_, dropped) = drag::drop_target(ui, frame, |ui| {
        ui.set_min_height(ui.available_height() - theme::COLUMN_GAP);
        egui::ScrollArea::vertical()
            .id_salt(("column", status.label()))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let projects = column.projects();
                if projects.is_empty() {
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Drop projects here")
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        );
                    });
                }
                for project in projects.iter() {
                    show_card(project, ui);
                    ui.add_space(theme::CARD_GAP);
                }
            });
    });

    if let Some(drag) = dropped {
        action = Some(BoardAction::Move(drag.project_id, status));
    }
    action
}

/// A single draggable project card.
fn show_card(project: &Project, ui: &mut Ui) {
    let drag_id = egui::Id::new(("card", project.id));
    let payload = CardDrag {
        project_id: project.id,
    };

    ui.dnd_drag_source(drag_id, payload, |ui| {
        let frame = Frame {
            fill: theme::BG_CARD,
            rounding: Rounding::same(theme::CARD_ROUNDING),
            inner_margin: Margin::symmetric(8.0, 6.0),
            outer_margin: Margin::ZERO,
            stroke: Stroke::new(1.0, theme::BORDER_SUBTLE),
            shadow: egui::epaint::Shadow::NONE,
        };
        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(&project.title)
                            .font(theme::font_card_title())
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .truncate(),
                );
            });
            ui.add(
                egui::Label::new(
                    RichText::new(&project.description)
                        .size(11.0)
                        .color(theme::TEXT_SECONDARY),
                )
                .wrap(),
            );
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        egui_phosphor::regular::USERS,
                        project.people_label()
                    ))
                    .size(10.5)
                    .color(theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(project.created.format("%b %d, %H:%M").to_string())
                            .size(10.0)
                            .color(theme::TEXT_DIM),
                    );
                });
            });
        });
    });
}
