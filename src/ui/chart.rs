use egui::{Align2, Color32, Id, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2};

use gantt_view::layout::primitives::{Point, Primitive, Role};
use gantt_view::layout::scroll::ScrollSynchronizer;
use gantt_view::layout::{compute_chart, LayoutConfig};
use gantt_view::model::{BarTask, Task, TaskKind, ViewMode};

use crate::ui::theme;

/// What the user did in the chart this frame.
#[derive(Debug, Clone, Default)]
pub struct ChartAction {
    pub select: Option<String>,
    pub clear_selection: bool,
}

pub struct ChartPanel<'a> {
    pub tasks: &'a [Task],
    pub view_mode: ViewMode,
    pub locale: &'a str,
    pub rtl: bool,
    pub selected: Option<&'a str>,
    pub scroll_to_today: bool,
}

/// Render the scrolling timeline panel.
///
/// All geometry comes from one `compute_chart` pass over the current task
/// snapshot; this function only turns primitives into paint calls and wires
/// the scroll area to the two synchronizers.
pub fn show_chart(
    panel: ChartPanel<'_>,
    h_sync: &mut ScrollSynchronizer,
    v_sync: &mut ScrollSynchronizer,
    native_offset: &mut Vec2,
    ui: &mut Ui,
) -> ChartAction {
    let mut action = ChartAction::default();

    // One instant per pass; every today-test below compares against it.
    let now = chrono::Local::now().naive_local();
    let config = LayoutConfig {
        column_width: panel.view_mode.default_column_width(),
        locale: panel.locale.to_string(),
        rtl: panel.rtl,
        ..LayoutConfig::default()
    };
    let layout = compute_chart(panel.tasks, panel.view_mode, &config, now);

    if panel.scroll_to_today {
        if let Some(Primitive::Rect { x, .. }) = &layout.grid.today {
            h_sync.scroll_to((x - config.column_width * 2.0).max(0.0));
        }
    }

    let mut scroll_area = egui::ScrollArea::both()
        .id_salt("gantt_chart")
        .auto_shrink([false, false]);
    if let Some(x) = h_sync.pending_write(native_offset.x) {
        scroll_area = scroll_area.horizontal_scroll_offset(x);
    }
    if let Some(y) = v_sync.pending_write(native_offset.y) {
        scroll_area = scroll_area.vertical_scroll_offset(y);
    }

    let available = ui.available_size();
    let output = scroll_area.show(ui, |ui| {
        let canvas = Vec2::new(
            layout.svg_width.max(available.x),
            (config.header_height + layout.grid.height + 40.0).max(available.y),
        );
        let (response, painter) = ui.allocate_painter(canvas, Sense::click());
        let origin = response.rect.min;
        let body_origin = origin + Vec2::new(0.0, config.header_height);

        painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
        for primitive in layout.grid.primitives() {
            paint_primitive(&painter, body_origin, &primitive);
        }
        for primitive in layout.header.primitives() {
            paint_primitive(&painter, origin, &primitive);
        }
        for arrow in &layout.arrows {
            for primitive in arrow.primitives() {
                paint_primitive(&painter, body_origin, &primitive);
            }
        }

        let mut consumed_click = false;
        for bar in &layout.bars {
            let hit_rect = draw_bar(&painter, body_origin, bar, panel.selected);
            if bar.task.is_disabled {
                continue;
            }
            let bar_response = ui.interact(
                hit_rect,
                ui.make_persistent_id(("task-bar", &bar.task.id)),
                Sense::click(),
            );
            if bar_response.clicked() {
                action.select = Some(bar.task.id.clone());
                consumed_click = true;
            }
            if bar_response.hovered() {
                show_bar_tooltip(ui, bar);
            }
        }

        if response.clicked() && !consumed_click {
            action.clear_selection = true;
        }
    });

    *native_offset = output.state.offset;
    h_sync.observe(native_offset.x);
    v_sync.observe(native_offset.y);

    action
}

fn paint_primitive(painter: &egui::Painter, origin: Pos2, primitive: &Primitive) {
    let at = |x: f32, y: f32| Pos2::new(origin.x + x, origin.y + y);
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            role,
        } => {
            painter.rect_filled(
                Rect::from_min_size(at(*x, *y), Vec2::new(*width, *height)),
                0.0,
                theme::role_fill(*role),
            );
        }
        Primitive::Line { x1, y1, x2, y2, role } => {
            painter.line_segment([at(*x1, *y1), at(*x2, *y2)], theme::role_stroke(*role));
        }
        Primitive::Text { x, y, text, role } => {
            let (font, color) = theme::role_text(*role);
            painter.text(at(*x, *y), Align2::CENTER_BOTTOM, text, font, color);
        }
        Primitive::Path { points, role } => {
            painter.add(Shape::line(
                points.iter().map(|p: &Point| at(p.x, p.y)).collect(),
                theme::role_stroke(*role),
            ));
        }
        Primitive::Polygon { points, role } => {
            painter.add(Shape::convex_polygon(
                points.iter().map(|p: &Point| at(p.x, p.y)).collect(),
                theme::role_fill(*role),
                Stroke::NONE,
            ));
        }
    }
}

/// Draw one bar (or milestone diamond) and return its interaction rect.
fn draw_bar(
    painter: &egui::Painter,
    origin: Pos2,
    bar: &BarTask,
    selected: Option<&str>,
) -> Rect {
    let is_selected = selected == Some(bar.task.id.as_str());
    let left = origin.x + bar.x1.min(bar.x2);
    let width = (bar.x2 - bar.x1).abs().max(2.0);
    let top = origin.y + bar.y;
    let bar_rect = Rect::from_min_size(Pos2::new(left, top), Vec2::new(width, bar.height));
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    let fill = if bar.task.is_disabled {
        theme::BAR_DISABLED
    } else {
        match bar.task.kind {
            TaskKind::Task => theme::BAR_TASK,
            TaskKind::Project => theme::BAR_PROJECT,
            TaskKind::Milestone => theme::BAR_MILESTONE,
        }
    };

    if bar.task.kind == TaskKind::Milestone {
        let center = bar_rect.center();
        let size = bar.height / 2.0;
        let points = vec![
            Pos2::new(center.x, center.y - size),
            Pos2::new(center.x + size, center.y),
            Pos2::new(center.x, center.y + size),
            Pos2::new(center.x - size, center.y),
        ];
        painter.add(Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
        if is_selected {
            painter.add(Shape::convex_polygon(
                points,
                Color32::TRANSPARENT,
                Stroke::new(2.0, theme::BORDER_ACCENT),
            ));
        }
        return bar_rect.expand(4.0);
    }

    painter.rect_filled(bar_rect, rounding, fill);

    if bar.task.progress > 0.0 {
        let progress_width = width * (bar.task.progress / 100.0).clamp(0.0, 1.0);
        painter.rect_filled(
            Rect::from_min_size(bar_rect.min, Vec2::new(progress_width, bar.height)),
            rounding,
            theme::PROGRESS_OVERLAY,
        );
    }

    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    if width > 30.0 {
        let galley = painter.layout_no_wrap(
            bar.task.name.clone(),
            theme::font_bar(),
            theme::TEXT_ON_BAR,
        );
        let clipped = painter.with_clip_rect(bar_rect);
        let text_y = top + (bar.height - galley.size().y) / 2.0;
        clipped.galley(
            Pos2::new(bar_rect.left() + 6.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }

    bar_rect
}

fn show_bar_tooltip(ui: &Ui, bar: &BarTask) {
    egui::show_tooltip_at_pointer(
        ui.ctx(),
        ui.layer_id(),
        Id::new(("task-tip", &bar.task.id)),
        |ui| {
            ui.strong(&bar.task.name);
            ui.label(format!(
                "{} → {}",
                bar.task.start.format("%Y-%m-%d %H:%M"),
                bar.task.end.format("%Y-%m-%d %H:%M"),
            ));
            ui.label(format!("Progress: {:.0}%", bar.task.progress));
        },
    );
}
