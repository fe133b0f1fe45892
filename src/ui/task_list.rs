use egui::{Color32, RichText, Ui};

use gantt_view::layout::scroll::ScrollSynchronizer;
use gantt_view::model::{Task, TaskKind};

use crate::ui::theme;

/// Actions the frozen task-list panel can request.
pub enum TaskListAction {
    None,
    Select(String),
    Delete(String),
    Add,
}

/// Render the frozen task-list panel. Rows are `row_height` tall so they
/// stay aligned with the chart's grid rows; the vertical offset mirrors the
/// chart's through the shared synchronizer.
pub fn show_task_list(
    tasks: &[Task],
    selected: Option<&str>,
    row_height: f32,
    header_height: f32,
    v_sync: &mut ScrollSynchronizer,
    native_offset: &mut f32,
    ui: &mut Ui,
) -> TaskListAction {
    let mut action = TaskListAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Tasks")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    let add_btn = egui::Button::new(
        RichText::new(format!("{}  Add Task", egui_phosphor::regular::PLUS))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::ACCENT)
    .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], add_btn).clicked() {
        action = TaskListAction::Add;
    }
    ui.add_space(6.0);

    // Spacer matching the chart's calendar header keeps row 0 level with
    // the first grid row.
    ui.add_space(header_height - 30.0 - 6.0);

    let mut scroll_area = egui::ScrollArea::vertical()
        .id_salt("task_list")
        .auto_shrink([false, false]);
    if let Some(y) = v_sync.pending_write(*native_offset) {
        scroll_area = scroll_area.vertical_scroll_offset(y);
    }

    let output = scroll_area.show(ui, |ui| {
        for task in tasks {
            let is_selected = selected == Some(task.id.as_str());
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), row_height),
                egui::Sense::click(),
            );
            if is_selected {
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(4.0), theme::BG_SELECTED);
            } else if response.hovered() {
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(4.0), theme::BG_ROW);
            }

            let icon = match task.kind {
                TaskKind::Project => egui_phosphor::regular::FOLDER,
                TaskKind::Milestone => egui_phosphor::regular::DIAMOND,
                TaskKind::Task => egui_phosphor::regular::SQUARE,
            };
            let name_color = if task.is_disabled {
                theme::TEXT_DIM
            } else {
                theme::TEXT_PRIMARY
            };
            let indent = if task.project.is_some() { 14.0 } else { 2.0 };
            let painter = ui.painter();
            painter.text(
                egui::pos2(rect.left() + indent, rect.center().y - 7.0),
                egui::Align2::LEFT_CENTER,
                format!("{icon}  {}", task.name),
                theme::font_bar(),
                name_color,
            );
            painter.text(
                egui::pos2(rect.left() + indent + 16.0, rect.center().y + 9.0),
                egui::Align2::LEFT_CENTER,
                format!(
                    "{} → {}",
                    task.start.format("%d %b"),
                    task.end.format("%d %b")
                ),
                theme::font_sub(),
                theme::TEXT_DIM,
            );

            if response.clicked() && !task.is_disabled {
                action = TaskListAction::Select(task.id.clone());
            }
            response.context_menu(|ui| {
                if ui.button("Delete").clicked() {
                    action = TaskListAction::Delete(task.id.clone());
                    ui.close_menu();
                }
            });
        }
    });

    *native_offset = output.state.offset.y;
    v_sync.observe(*native_offset);

    action
}
