#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod ui;

use app::GanttApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([900.0, 520.0])
            .with_title("Gantt View"),
        ..Default::default()
    };

    eframe::run_native(
        "Gantt View",
        options,
        Box::new(|cc| Ok(Box::new(GanttApp::new(cc)))),
    )
}
