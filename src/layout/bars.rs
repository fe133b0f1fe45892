//! Bar positioning: Task → BarTask in tick space.

use chrono::NaiveDateTime;

use crate::model::{BarTask, Task, TaskKind};

use super::primitives::reflect_x;

/// Horizontal pixel position of an instant inside the tick sequence, by
/// linear interpolation within the containing interval. Instants before the
/// first tick clamp to 0, instants past the last tick to the chart width.
pub fn x_coord(instant: NaiveDateTime, dates: &[NaiveDateTime], column_width: f32) -> f32 {
    let interval = match dates.binary_search(&instant) {
        Ok(i) => return i as f32 * column_width,
        Err(0) => return 0.0,
        Err(j) if j >= dates.len() => return dates.len() as f32 * column_width,
        Err(j) => j - 1,
    };
    let span = (dates[interval + 1] - dates[interval]).num_milliseconds() as f64;
    let part = (instant - dates[interval]).num_milliseconds() as f64;
    ((interval as f64 + part / span) * column_width as f64) as f32
}

/// Position every task on its row. Milestones get a `task_height`-wide
/// footprint centered on their start instant; a task whose end precedes its
/// start yields a negative-width bar, which is the caller's validation
/// concern. Disabled tasks lay out like any other.
pub fn layout_bars(
    tasks: &[Task],
    dates: &[NaiveDateTime],
    column_width: f32,
    row_height: f32,
    task_height: f32,
) -> Vec<BarTask> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let (x1, x2) = match task.kind {
                TaskKind::Milestone => {
                    let mid = x_coord(task.start, dates, column_width);
                    (mid - task_height / 2.0, mid + task_height / 2.0)
                }
                TaskKind::Task | TaskKind::Project => (
                    x_coord(task.start, dates, column_width),
                    x_coord(task.end, dates, column_width),
                ),
            };
            BarTask {
                task: task.clone(),
                x1,
                x2,
                y: index as f32 * row_height + (row_height - task_height) / 2.0,
                index,
                height: task_height,
            }
        })
        .collect()
}

/// Reflect every bar about the chart width for right-to-left display.
pub fn reflect_bars(bars: &mut [BarTask], width: f32) {
    for bar in bars {
        let (x1, x2) = (reflect_x(bar.x2, width), reflect_x(bar.x1, width));
        bar.x1 = x1;
        bar.x2 = x2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::date_range::seed_dates;
    use crate::model::ViewMode;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn march() -> Vec<NaiveDateTime> {
        seed_dates(dt(2026, 3, 1, 0), dt(2026, 3, 31, 0), ViewMode::Day)
    }

    #[test]
    fn instants_interpolate_within_their_interval() {
        let dates = march();
        assert_eq!(x_coord(dt(2026, 3, 1, 0), &dates, 50.0), 0.0);
        assert_eq!(x_coord(dt(2026, 3, 3, 0), &dates, 50.0), 100.0);
        // Halfway through March 3rd: the interval's horizontal midpoint.
        assert_eq!(x_coord(dt(2026, 3, 3, 12), &dates, 50.0), 125.0);
    }

    #[test]
    fn out_of_range_instants_clamp_to_the_chart() {
        let dates = march();
        assert_eq!(x_coord(dt(2026, 1, 1, 0), &dates, 50.0), 0.0);
        assert_eq!(x_coord(dt(2026, 6, 1, 0), &dates, 50.0), 31.0 * 50.0);
    }

    #[test]
    fn bars_stack_by_row_index() {
        let tasks = vec![
            Task::new("a", "a", dt(2026, 3, 2, 0), dt(2026, 3, 5, 0)),
            Task::new("b", "b", dt(2026, 3, 4, 0), dt(2026, 3, 9, 0)),
        ];
        let bars = layout_bars(&tasks, &march(), 50.0, 40.0, 20.0);
        assert_eq!(bars[0].y, 10.0);
        assert_eq!(bars[1].y, 50.0);
        assert_eq!(bars[0].index, 0);
        assert_eq!(bars[1].index, 1);
        assert_eq!(bars[0].x1, 50.0);
        assert_eq!(bars[0].x2, 200.0);
    }

    #[test]
    fn milestones_get_a_diamond_footprint() {
        let tasks = vec![Task::new_milestone("m", "m", dt(2026, 3, 10, 0))];
        let bars = layout_bars(&tasks, &march(), 50.0, 40.0, 20.0);
        assert_eq!(bars[0].x1, 450.0 - 10.0);
        assert_eq!(bars[0].x2, 450.0 + 10.0);
    }

    #[test]
    fn inverted_task_dates_yield_a_negative_width_bar() {
        let tasks = vec![Task::new("a", "a", dt(2026, 3, 9, 0), dt(2026, 3, 4, 0))];
        let bars = layout_bars(&tasks, &march(), 50.0, 40.0, 20.0);
        assert!(bars[0].x2 < bars[0].x1);
    }

    #[test]
    fn reflection_swaps_edges_and_preserves_width() {
        let tasks = vec![Task::new("a", "a", dt(2026, 3, 2, 0), dt(2026, 3, 5, 0))];
        let mut bars = layout_bars(&tasks, &march(), 50.0, 40.0, 20.0);
        let width = 31.0 * 50.0;
        reflect_bars(&mut bars, width);
        assert_eq!(bars[0].x1, width - 200.0);
        assert_eq!(bars[0].x2, width - 50.0);
        assert!(bars[0].x2 > bars[0].x1);
    }
}
