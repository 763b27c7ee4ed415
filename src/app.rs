use crate::model::{ColumnView, ProjectStatus, ProjectStore};
use crate::ui;

/// Main application state.
pub struct KanbanApp {
    pub store: ProjectStore,
    active_column: ColumnView,
    finished_column: ColumnView,

    // Dialog state
    pub show_add_project: bool,
    pub show_about: bool,
    pub form_title: String,
    pub form_description: String,
    pub form_people: String,
    pub form_errors: Vec<String>,

    // Status message
    pub status_message: String,
}

impl KanbanApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut store = Self::sample_board();
        let active_column = ColumnView::attach(&mut store, ProjectStatus::Active);
        let finished_column = ColumnView::attach(&mut store, ProjectStatus::Finished);

        Self {
            store,
            active_column,
            finished_column,
            show_add_project: false,
            show_about: false,
            form_title: String::new(),
            form_description: String::new(),
            form_people: String::new(),
            form_errors: Vec::new(),
            status_message: "Ready".to_string(),
        }
    }

    /// Seed a small sample board for first launch. State is memory-only
    /// and resets on restart.
    fn sample_board() -> ProjectStore {
        let mut store = ProjectStore::new();
        store.add_project(
            "Website Redesign",
            "Refresh the landing page and navigation",
            2,
        );
        store.add_project("Build API", "Create REST endpoints for the mobile app", 3);
        let done = store.add_project("Q2 Retrospective", "Collect notes and action items", 1);
        store.move_project(done, ProjectStatus::Finished);
        store
    }

    pub fn reset_form_fields(&mut self) {
        self.form_title.clear();
        self.form_description.clear();
        self.form_people.clear();
        self.form_errors.clear();
    }
}

impl eframe::App for KanbanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Keyboard shortcuts outside closures to avoid borrow issues
        let should_add = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::N));
        if should_add {
            self.show_add_project = true;
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Active: {} · Finished: {} · Total: {}",
                                self.active_column.count(),
                                self.finished_column.count(),
                                self.store.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the board
        let board_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(ui::theme::COLUMN_GAP));
        let mut board_action = ui::board::BoardAction::None;
        egui::CentralPanel::default()
            .frame(board_frame)
            .show(ctx, |ui| {
                board_action =
                    ui::board::show_board(&self.active_column, &self.finished_column, ui);
            });

        match board_action {
            ui::board::BoardAction::AddProject => {
                self.show_add_project = true;
            }
            ui::board::BoardAction::Move(id, status) => {
                let moved = self
                    .store
                    .projects()
                    .iter()
                    .find(|p| p.id == id)
                    .filter(|p| p.status != status)
                    .map(|p| p.title.clone());
                self.store.move_project(id, status);
                // Dropping a card back on its own column is a no-op.
                if let Some(title) = moved {
                    self.status_message = format!("Moved '{}' to {}", title, status);
                }
            }
            ui::board::BoardAction::None => {}
        }

        // Dialogs
        if self.show_add_project {
            ui::dialogs::show_add_project_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.active_column.detach(&mut self.store);
        self.finished_column.detach(&mut self.store);
    }
}
