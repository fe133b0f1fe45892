//! Tick generation: the ordered column-boundary instants for a view mode.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::model::{Task, ViewMode};

/// Generate the strictly increasing tick sequence covering `[start, end]`.
///
/// The first tick is `start` aligned down to the view mode's unit boundary;
/// subsequent ticks step by one native unit until `end` is reached or
/// passed. A span whose end precedes its start yields the single aligned
/// start tick; callers must not rely on this signaling invalid input.
pub fn seed_dates(start: NaiveDateTime, end: NaiveDateTime, view_mode: ViewMode) -> Vec<NaiveDateTime> {
    let mut cursor = align_to_unit(start, view_mode);
    let mut dates = vec![cursor];
    while cursor < end {
        cursor = step(cursor, view_mode);
        dates.push(cursor);
    }
    dates
}

/// Derive the requested chart span from the task set, padded by one step on
/// each side so bars never touch the chart edge. An empty task list falls
/// back to a one-step span around `now`.
pub fn chart_date_range(
    tasks: &[Task],
    view_mode: ViewMode,
    now: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let min = tasks.iter().map(|t| t.start).min().unwrap_or(now);
    let max = tasks.iter().map(|t| t.end).max().unwrap_or(now);
    (step_back(min, view_mode), step(max, view_mode))
}

/// Advance an instant by one native unit of the view mode.
pub fn step(date: NaiveDateTime, view_mode: ViewMode) -> NaiveDateTime {
    match view_mode {
        ViewMode::Hour => date + Duration::hours(1),
        ViewMode::QuarterDay => date + Duration::hours(6),
        ViewMode::HalfDay => date + Duration::hours(12),
        ViewMode::Day => date + Duration::days(1),
        ViewMode::Week => date + Duration::days(7),
        ViewMode::Month => date
            .checked_add_months(Months::new(1))
            .unwrap_or(date + Duration::days(30)),
        ViewMode::QuarterYear => date
            .checked_add_months(Months::new(3))
            .unwrap_or(date + Duration::days(91)),
        ViewMode::Year => date
            .checked_add_months(Months::new(12))
            .unwrap_or(date + Duration::days(365)),
    }
}

fn step_back(date: NaiveDateTime, view_mode: ViewMode) -> NaiveDateTime {
    match view_mode {
        ViewMode::Hour => date - Duration::hours(1),
        ViewMode::QuarterDay => date - Duration::hours(6),
        ViewMode::HalfDay => date - Duration::hours(12),
        ViewMode::Day => date - Duration::days(1),
        ViewMode::Week => date - Duration::days(7),
        ViewMode::Month => date
            .checked_sub_months(Months::new(1))
            .unwrap_or(date - Duration::days(30)),
        ViewMode::QuarterYear => date
            .checked_sub_months(Months::new(3))
            .unwrap_or(date - Duration::days(91)),
        ViewMode::Year => date
            .checked_sub_months(Months::new(12))
            .unwrap_or(date - Duration::days(365)),
    }
}

/// Align an instant down to the start of the view mode's unit: the hour (or
/// 6/12-hour block), midnight, the ISO Monday, the 1st of the month, the
/// quarter's first month, or January 1st.
fn align_to_unit(date: NaiveDateTime, view_mode: ViewMode) -> NaiveDateTime {
    let day_start = date.date().and_time(NaiveTime::MIN);
    match view_mode {
        ViewMode::Hour => on_hour(date, date.hour()),
        ViewMode::QuarterDay => on_hour(date, date.hour() - date.hour() % 6),
        ViewMode::HalfDay => on_hour(date, date.hour() - date.hour() % 12),
        ViewMode::Day => day_start,
        ViewMode::Week => {
            day_start - Duration::days(date.weekday().num_days_from_monday() as i64)
        }
        ViewMode::Month => on_month_start(date, date.month()),
        ViewMode::QuarterYear => on_month_start(date, date.month() - date.month0() % 3),
        ViewMode::Year => on_month_start(date, 1),
    }
}

fn on_hour(date: NaiveDateTime, hour: u32) -> NaiveDateTime {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|t| date.date().and_time(t))
        .unwrap_or(date)
}

fn on_month_start(date: NaiveDateTime, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.year(), month, 1)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn every_mode_is_strictly_increasing() {
        let start = dt(2026, 2, 27, 13);
        let end = dt(2026, 8, 3, 5);
        for mode in ViewMode::ALL {
            let dates = seed_dates(start, end, mode);
            assert!(!dates.is_empty());
            assert!(
                dates.windows(2).all(|w| w[0] < w[1]),
                "{mode:?} produced a non-increasing sequence"
            );
            assert!(*dates.last().unwrap() >= end, "{mode:?} does not cover the span");
        }
    }

    #[test]
    fn day_mode_covers_a_31_day_month_with_31_ticks() {
        let dates = seed_dates(dt(2026, 3, 1, 0), dt(2026, 3, 31, 0), ViewMode::Day);
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], dt(2026, 3, 1, 0));
        assert_eq!(dates[30], dt(2026, 3, 31, 0));
    }

    #[test]
    fn week_ticks_fall_on_iso_mondays() {
        // 2026-03-04 is a Wednesday.
        let dates = seed_dates(dt(2026, 3, 4, 9), dt(2026, 4, 20, 0), ViewMode::Week);
        assert_eq!(dates[0], dt(2026, 3, 2, 0));
        for d in &dates {
            assert_eq!(d.weekday(), chrono::Weekday::Mon);
            assert_eq!(d.time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn month_and_quarter_and_year_alignment() {
        let start = dt(2026, 5, 17, 11);
        let end = dt(2027, 2, 1, 0);

        for d in seed_dates(start, end, ViewMode::Month) {
            assert_eq!(d.day(), 1);
        }
        let quarters = seed_dates(start, end, ViewMode::QuarterYear);
        assert_eq!(quarters[0], dt(2026, 4, 1, 0));
        for d in quarters {
            assert!(matches!(d.month(), 1 | 4 | 7 | 10));
        }
        let years = seed_dates(start, end, ViewMode::Year);
        assert_eq!(years[0], dt(2026, 1, 1, 0));
        // 2027-01-01 still precedes the end, so one more step is taken.
        assert_eq!(years.last().copied(), Some(dt(2028, 1, 1, 0)));
    }

    #[test]
    fn sub_day_modes_align_to_their_block() {
        let start = dt(2026, 3, 4, 0) + Duration::minutes(13 * 60 + 40);
        let end = start + Duration::hours(30);

        assert_eq!(seed_dates(start, end, ViewMode::Hour)[0], dt(2026, 3, 4, 13));
        assert_eq!(seed_dates(start, end, ViewMode::QuarterDay)[0], dt(2026, 3, 4, 12));
        assert_eq!(seed_dates(start, end, ViewMode::HalfDay)[0], dt(2026, 3, 4, 12));
    }

    #[test]
    fn inverted_span_yields_a_single_tick() {
        let dates = seed_dates(dt(2026, 6, 10, 0), dt(2026, 6, 1, 0), ViewMode::Day);
        assert_eq!(dates, vec![dt(2026, 6, 10, 0)]);
    }

    #[test]
    fn chart_range_pads_one_step_each_side() {
        let task = Task::new("t", "t", dt(2026, 3, 10, 0), dt(2026, 3, 20, 0));
        let (start, end) = chart_date_range(&[task], ViewMode::Day, dt(2026, 1, 1, 0));
        assert_eq!(start, dt(2026, 3, 9, 0));
        assert_eq!(end, dt(2026, 3, 21, 0));
    }

    #[test]
    fn chart_range_of_empty_task_list_brackets_now() {
        let now = dt(2026, 3, 10, 0);
        let (start, end) = chart_date_range(&[], ViewMode::Week, now);
        assert!(start < now && now < end);
    }
}
