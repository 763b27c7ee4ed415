#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Rust Kanban App"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Kanban App",
        options,
        Box::new(|cc| Ok(Box::new(app::KanbanApp::new(cc)))),
    )
}
