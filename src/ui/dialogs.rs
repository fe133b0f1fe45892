use egui::{Color32, Context, RichText, Window};

use crate::app::GanttApp;
use crate::ui::theme;

/// Render the "Add Task" dialog.
pub fn show_add_task_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Add Task").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().striped = false;
            ui.add_space(4.0);

            egui::Grid::new("add_task_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut app.new_task_name)
                            .hint_text("Task name...")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_task_start)
                            .id_salt("dlg_dp_start"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_task_end)
                            .id_salt("dlg_dp_end"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Progress").color(theme::TEXT_SECONDARY));
                    ui.add(egui::Slider::new(&mut app.new_task_progress, 0.0..=100.0).suffix("%"));
                    ui.end_row();

                    ui.label(RichText::new("Depends on").color(theme::TEXT_SECONDARY));
                    let current = app
                        .new_task_dependency
                        .as_deref()
                        .and_then(|id| app.project.tasks.iter().find(|t| t.id == id))
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| "None".to_string());
                    egui::ComboBox::from_id_salt("dlg_dependency")
                        .selected_text(current)
                        .show_ui(ui, |ui| {
                            if ui.selectable_label(app.new_task_dependency.is_none(), "None").clicked() {
                                app.new_task_dependency = None;
                            }
                            for task in &app.project.tasks {
                                let chosen = app.new_task_dependency.as_deref() == Some(task.id.as_str());
                                if ui.selectable_label(chosen, &task.name).clicked() {
                                    app.new_task_dependency = Some(task.id.clone());
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("");
                    ui.checkbox(&mut app.new_task_is_milestone, "Milestone");
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(RichText::new("Create").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], create_btn).clicked() {
                    app.create_task_from_dialog();
                    should_close = true;
                }
                if ui
                    .add_sized([80.0, 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_task = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Gantt View").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("An interactive Gantt chart");
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
