//! The pure layout core: tick generation, header bands, grid geometry,
//! arrow routing, scroll synchronization.
//!
//! [`compute_chart`] is the one entry point the shell calls per frame; it
//! derives everything from a single snapshot of the task list and a single
//! tick sequence, so downstream geometry can never mix old ticks with new
//! tasks. The current instant is a parameter, sampled once per pass by the
//! caller.

pub mod arrow;
pub mod bars;
pub mod calendar;
pub mod date_range;
pub mod grid;
pub mod locale;
pub mod primitives;
pub mod scroll;

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::model::{BarTask, DateSetup, Task, ViewMode};

/// Caller-supplied layout constants. Widths and heights must be positive;
/// a zero or negative value is a caller contract violation.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub column_width: f32,
    pub row_height: f32,
    pub header_height: f32,
    pub task_height: f32,
    pub arrow_indent: f32,
    pub locale: String,
    pub rtl: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 60.0,
            row_height: 50.0,
            header_height: 50.0,
            task_height: 30.0,
            arrow_indent: 20.0,
            locale: "en-US".to_string(),
            rtl: false,
        }
    }
}

/// Everything one frame needs to draw, computed from one input snapshot.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub date_setup: DateSetup,
    pub bars: Vec<BarTask>,
    pub header: calendar::CalendarHeader,
    pub grid: grid::GridBody,
    pub arrows: Vec<arrow::ArrowGeometry>,
    pub svg_width: f32,
}

impl ChartLayout {
    /// Header, grid, and arrow primitives in paint order. Bars are not
    /// included; the shell draws them from [`ChartLayout::bars`] because
    /// they carry per-task state (progress, kind, selection).
    pub fn primitives(&self) -> Vec<primitives::Primitive> {
        let mut out = self.grid.primitives();
        out.extend(self.header.primitives());
        for arrow in &self.arrows {
            out.extend(arrow.primitives());
        }
        out
    }
}

/// Run one layout pass.
pub fn compute_chart(
    tasks: &[Task],
    view_mode: ViewMode,
    config: &LayoutConfig,
    now: NaiveDateTime,
) -> ChartLayout {
    let (start, end) = date_range::chart_date_range(tasks, view_mode, now);
    let dates = date_range::seed_dates(start, end, view_mode);
    let svg_width = dates.len() as f32 * config.column_width;

    let mut bars = bars::layout_bars(
        tasks,
        &dates,
        config.column_width,
        config.row_height,
        config.task_height,
    );
    if config.rtl {
        bars::reflect_bars(&mut bars, svg_width);
    }

    let date_setup = DateSetup { view_mode, dates };
    let header = calendar::build_header(
        &date_setup,
        &config.locale,
        config.rtl,
        config.header_height,
        config.column_width,
    );
    let grid = grid::build_grid(
        tasks,
        &date_setup.dates,
        config.row_height,
        svg_width,
        config.column_width,
        now,
        config.rtl,
    );

    let arrows = {
        let by_id: HashMap<&str, &BarTask> =
            bars.iter().map(|b| (b.task.id.as_str(), b)).collect();
        let mut arrows = Vec::new();
        for bar in &bars {
            for dep in &bar.task.dependencies {
                // Unresolvable predecessor ids are the caller's problem;
                // the arrow is simply omitted.
                if let Some(from) = by_id.get(dep.as_str()) {
                    arrows.push(arrow::route_arrow(
                        from,
                        bar,
                        config.row_height,
                        config.task_height,
                        config.arrow_indent,
                        config.rtl,
                    ));
                }
            }
        }
        arrows
    };

    ChartLayout {
        date_setup,
        bars,
        header,
        grid,
        arrows,
        svg_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("idea", "Idea", dt(2026, 3, 2, 0), dt(2026, 3, 6, 0)),
            Task::new("build", "Build", dt(2026, 3, 6, 0), dt(2026, 3, 14, 0))
                .with_dependencies(&["idea"]),
            Task::new("ship", "Ship", dt(2026, 3, 14, 0), dt(2026, 3, 16, 0))
                .with_dependencies(&["build", "no-such-task"]),
        ]
    }

    #[test]
    fn one_pass_is_internally_consistent() {
        let layout = compute_chart(
            &sample_tasks(),
            ViewMode::Day,
            &LayoutConfig::default(),
            dt(2026, 3, 10, 9),
        );
        let ticks = layout.date_setup.dates.len();
        assert_eq!(layout.header.lower.len(), ticks);
        assert_eq!(layout.grid.ticks.len(), ticks);
        assert_eq!(layout.bars.len(), 3);
        assert_eq!(layout.svg_width, ticks as f32 * 60.0);
        assert!(layout.grid.today.is_some());
    }

    #[test]
    fn unresolvable_dependencies_are_omitted() {
        let layout = compute_chart(
            &sample_tasks(),
            ViewMode::Day,
            &LayoutConfig::default(),
            dt(2026, 3, 10, 9),
        );
        // "no-such-task" resolves to nothing; the other two links route.
        assert_eq!(layout.arrows.len(), 2);
    }

    #[test]
    fn bars_stay_inside_the_padded_chart() {
        for rtl in [false, true] {
            let config = LayoutConfig {
                rtl,
                ..LayoutConfig::default()
            };
            let layout =
                compute_chart(&sample_tasks(), ViewMode::Week, &config, dt(2026, 3, 10, 9));
            for bar in &layout.bars {
                assert!(bar.x1 > 0.0 && bar.x2 < layout.svg_width);
            }
        }
    }

    #[test]
    fn empty_task_list_still_produces_a_header() {
        let layout = compute_chart(&[], ViewMode::Month, &LayoutConfig::default(), dt(2026, 3, 10, 9));
        assert!(layout.date_setup.dates.len() >= 1);
        assert_eq!(layout.grid.height, 0.0);
        assert!(layout.bars.is_empty());
        assert!(layout.arrows.is_empty());
        assert!(!layout.header.lower.is_empty());
    }
}
