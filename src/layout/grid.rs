//! Grid body: row backgrounds, separator lines, vertical tick lines, and
//! the today highlight.

use chrono::{Duration, NaiveDateTime};

use crate::model::Task;

use super::primitives::{Primitive, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct GridBody {
    pub width: f32,
    pub height: f32,
    pub rows: Vec<Primitive>,
    pub row_lines: Vec<Primitive>,
    pub ticks: Vec<Primitive>,
    pub today: Option<Primitive>,
}

impl GridBody {
    /// Flatten in paint order: backgrounds, separators, ticks, today on top.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(
            self.rows.len() + self.row_lines.len() + self.ticks.len() + 1,
        );
        out.extend(self.rows.iter().cloned());
        out.extend(self.row_lines.iter().cloned());
        out.extend(self.ticks.iter().cloned());
        out.extend(self.today.iter().cloned());
        out
    }
}

/// Lay out the grid body for the given row order and tick sequence.
///
/// `now` is sampled once per layout pass by the caller so every interval
/// test in the pass compares against the same instant.
pub fn build_grid(
    tasks: &[Task],
    dates: &[NaiveDateTime],
    row_height: f32,
    svg_width: f32,
    column_width: f32,
    now: NaiveDateTime,
    rtl: bool,
) -> GridBody {
    let total_height = tasks.len() as f32 * row_height;

    let mut rows = Vec::with_capacity(tasks.len());
    let mut row_lines = Vec::with_capacity(tasks.len() + 1);
    row_lines.push(Primitive::Line {
        x1: 0.0,
        y1: 0.0,
        x2: svg_width,
        y2: 0.0,
        role: Role::RowLine,
    });
    let mut y = 0.0;
    for _task in tasks {
        rows.push(Primitive::Rect {
            x: 0.0,
            y,
            width: svg_width,
            height: row_height,
            role: Role::RowBackground,
        });
        y += row_height;
        row_lines.push(Primitive::Line {
            x1: 0.0,
            y1: y,
            x2: svg_width,
            y2: y,
            role: Role::RowLine,
        });
    }

    let mut ticks = Vec::with_capacity(dates.len());
    let mut today = None;
    let mut tick_x = 0.0;
    for (i, &date) in dates.iter().enumerate() {
        let prev = (i > 0).then(|| dates[i - 1]);
        let next = dates.get(i + 1).copied();

        ticks.push(Primitive::Line {
            x1: tick_x,
            y1: 0.0,
            x2: tick_x,
            y2: total_height,
            role: Role::TickLine,
        });

        // The last tick has no successor; synthesize an upper bound by
        // extrapolating the previous interval's duration. With a single
        // tick the previous instant defaults to the epoch.
        let prev_millis = prev.map(|p| p.and_utc().timestamp_millis()).unwrap_or(0);
        let extrapolated =
            date + Duration::milliseconds(date.and_utc().timestamp_millis() - prev_millis);
        let is_today = (now >= date && next.map_or(false, |n| now < n))
            || (i == dates.len() - 1 && now >= date && extrapolated > now);
        // Mirrored interval test for callers that hand over a reversed
        // (descending) tick array for right-to-left display.
        let is_today_rtl = rtl && next.map_or(false, |n| now <= date && now > n);

        if today.is_none() && (is_today || is_today_rtl) {
            today = Some(Primitive::Rect {
                x: if rtl { tick_x + column_width } else { tick_x },
                y: 0.0,
                width: column_width,
                height: total_height,
                role: Role::TodayHighlight,
            });
        }

        tick_x += column_width;
    }

    GridBody {
        width: svg_width,
        height: total_height,
        rows,
        row_lines,
        ticks,
        today,
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

    fn tasks(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| Task::new(format!("t{i}"), "task", dt(2026, 3, 1, 0), dt(2026, 3, 5, 0)))
            .collect()
    }

    fn march_dates() -> Vec<NaiveDateTime> {
        seed_dates(dt(2026, 3, 1, 0), dt(2026, 3, 31, 0), ViewMode::Day)
    }

    #[test]
    fn one_row_per_task_plus_a_leading_separator() {
        let grid = build_grid(&tasks(4), &march_dates(), 40.0, 800.0, 50.0, dt(2026, 3, 2, 0), false);
        assert_eq!(grid.rows.len(), 4);
        assert_eq!(grid.row_lines.len(), 5);
        assert_eq!(grid.height, 160.0);
        assert_eq!(
            grid.row_lines[0],
            Primitive::Line { x1: 0.0, y1: 0.0, x2: 800.0, y2: 0.0, role: Role::RowLine }
        );
    }

    #[test]
    fn one_tick_line_per_tick_at_column_boundaries() {
        let dates = march_dates();
        let grid = build_grid(&tasks(2), &dates, 40.0, 1550.0, 50.0, dt(2026, 3, 2, 0), false);
        assert_eq!(grid.ticks.len(), dates.len());
        for (i, tick) in grid.ticks.iter().enumerate() {
            match tick {
                Primitive::Line { x1, x2, role, .. } => {
                    assert_eq!(*x1, 50.0 * i as f32);
                    assert_eq!(x1, x2);
                    assert_eq!(*role, Role::TickLine);
                }
                other => panic!("expected a line, got {other:?}"),
            }
        }
    }

    #[test]
    fn today_marker_lands_in_the_containing_column() {
        let grid = build_grid(&tasks(3), &march_dates(), 40.0, 1550.0, 50.0, dt(2026, 3, 10, 12), false);
        match grid.today {
            Some(Primitive::Rect { x, width, height, role, .. }) => {
                assert_eq!(x, 9.0 * 50.0);
                assert_eq!(width, 50.0);
                assert_eq!(height, 120.0);
                assert_eq!(role, Role::TodayHighlight);
            }
            other => panic!("expected a today rect, got {other:?}"),
        }
    }

    #[test]
    fn today_in_the_final_column_uses_the_extrapolated_interval() {
        let grid = build_grid(&tasks(1), &march_dates(), 40.0, 1550.0, 50.0, dt(2026, 3, 31, 12), false);
        match grid.today {
            Some(Primitive::Rect { x, .. }) => assert_eq!(x, 30.0 * 50.0),
            other => panic!("expected a today rect, got {other:?}"),
        }
    }

    #[test]
    fn no_marker_outside_the_covered_span() {
        let dates = march_dates();
        let before = build_grid(&tasks(1), &dates, 40.0, 1550.0, 50.0, dt(2026, 2, 27, 0), false);
        assert!(before.today.is_none());
        // Past the last tick plus its extrapolated one-day interval.
        let after = build_grid(&tasks(1), &dates, 40.0, 1550.0, 50.0, dt(2026, 4, 2, 0), false);
        assert!(after.today.is_none());
    }

    #[test]
    fn rtl_shifts_the_marker_one_column_right() {
        let now = dt(2026, 3, 10, 12);
        let ltr = build_grid(&tasks(1), &march_dates(), 40.0, 1550.0, 50.0, now, false);
        let rtl = build_grid(&tasks(1), &march_dates(), 40.0, 1550.0, 50.0, now, true);
        match (ltr.today, rtl.today) {
            (Some(Primitive::Rect { x: a, .. }), Some(Primitive::Rect { x: b, .. })) => {
                assert_eq!(b, a + 50.0);
            }
            other => panic!("expected two today rects, got {other:?}"),
        }
    }

    #[test]
    fn empty_task_list_is_a_zero_height_grid() {
        let grid = build_grid(&[], &march_dates(), 40.0, 1550.0, 50.0, dt(2026, 3, 10, 0), false);
        assert_eq!(grid.height, 0.0);
        assert!(grid.rows.is_empty());
        assert_eq!(grid.row_lines.len(), 1);
    }
}
