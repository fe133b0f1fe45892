//! Calendar header: a lower band with one label per tick and an upper band
//! with one labeled segment per coarser period, emitted at boundary
//! crossings.

use chrono::{Datelike, NaiveDateTime};

use crate::model::{DateSetup, ViewMode};

use super::locale;
use super::primitives::{Primitive, Role};

/// One fine-unit label, anchored at `x` with baseline `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct LowerLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// One coarse-period segment: a label plus the vertical divider marking
/// where the period begins (or, for the trailing segment, ends).
#[derive(Debug, Clone, PartialEq)]
pub struct UpperSegment {
    pub text: String,
    pub text_x: f32,
    pub text_y: f32,
    pub divider_x: f32,
    pub divider_top: f32,
    pub divider_bottom: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarHeader {
    pub width: f32,
    pub height: f32,
    pub lower: Vec<LowerLabel>,
    pub upper: Vec<UpperSegment>,
}

impl CalendarHeader {
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(1 + self.lower.len() + self.upper.len() * 2);
        out.push(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
            role: Role::HeaderBackground,
        });
        for label in &self.lower {
            out.push(Primitive::Text {
                x: label.x,
                y: label.y,
                text: label.text.clone(),
                role: Role::HeaderLowerText,
            });
        }
        for segment in &self.upper {
            out.push(Primitive::Line {
                x1: segment.divider_x,
                y1: segment.divider_top,
                x2: segment.divider_x,
                y2: segment.divider_bottom,
                role: Role::HeaderDivider,
            });
            out.push(Primitive::Text {
                x: segment.text_x,
                y: segment.text_y,
                text: segment.text.clone(),
                role: Role::HeaderUpperText,
            });
        }
        out
    }
}

/// Build both header bands for the tick sequence.
pub fn build_header(
    date_setup: &DateSetup,
    locale_tag: &str,
    rtl: bool,
    header_height: f32,
    column_width: f32,
) -> CalendarHeader {
    let locale = locale::resolve_locale(locale_tag);
    let dates = &date_setup.dates;
    let top_height = header_height * 0.5;
    let lower_y = header_height * 0.8;
    let upper_y = top_height * 0.9;
    let rtl_shift = if rtl { 1.0 } else { 0.0 };
    // Columns per day-group in the sub-day modes; sets where the day divider
    // lands relative to the triggering tick.
    let day_columns = match date_setup.view_mode {
        ViewMode::HalfDay => 2.0,
        ViewMode::QuarterDay => 4.0,
        _ => 1.0,
    };

    let mut lower = Vec::with_capacity(dates.len());
    let mut upper = Vec::new();
    // First tick index of the current month; Day mode centers its upper
    // labels over the columns the month actually occupies.
    let mut month_start = 0;

    for (i, &date) in dates.iter().enumerate() {
        let prev = (i > 0).then(|| dates[i - 1]);
        let next = dates.get(i + 1).copied();
        let centered_x = column_width * i as f32 + column_width * 0.5;

        match date_setup.view_mode {
            ViewMode::Year => {
                lower.push(LowerLabel {
                    text: date.year().to_string(),
                    x: centered_x,
                    y: lower_y,
                });
                if prev.map_or(true, |p| p.year() != date.year()) {
                    upper.push(UpperSegment {
                        text: date.year().to_string(),
                        text_x: coarse_label_x(i, 0.0, column_width, rtl),
                        text_y: upper_y,
                        divider_x: column_width * i as f32,
                        divider_top: 0.0,
                        divider_bottom: header_height,
                    });
                }
            }
            ViewMode::QuarterYear | ViewMode::Month => {
                let text = if date_setup.view_mode == ViewMode::Month {
                    locale::month_name(date, locale)
                } else {
                    format!("Q{}", (date.month() + 2) / 3)
                };
                lower.push(LowerLabel {
                    text,
                    x: centered_x,
                    y: lower_y,
                });
                if prev.map_or(true, |p| p.year() != date.year()) {
                    upper.push(UpperSegment {
                        text: date.year().to_string(),
                        text_x: coarse_label_x(i, date.month0() as f32, column_width, rtl),
                        text_y: upper_y,
                        divider_x: column_width * i as f32,
                        divider_top: 0.0,
                        divider_bottom: top_height,
                    });
                }
            }
            ViewMode::Week => {
                lower.push(LowerLabel {
                    text: format!("W{}", date.iso_week().week()),
                    x: column_width * (i as f32 + rtl_shift),
                    y: lower_y,
                });
                if prev.map_or(true, |p| p.month() != date.month()) {
                    upper.push(UpperSegment {
                        text: format!("{}, {}", locale::month_name(date, locale), date.year()),
                        text_x: column_width * i as f32 + column_width * 0.5,
                        text_y: upper_y,
                        divider_x: column_width * i as f32,
                        divider_top: 0.0,
                        divider_bottom: top_height,
                    });
                }
            }
            ViewMode::Day => {
                if prev.map_or(true, |p| p.month() != date.month()) {
                    month_start = i;
                }
                lower.push(LowerLabel {
                    text: format!("{}, {}", locale::weekday_short(date, locale), date.day()),
                    x: centered_x,
                    y: lower_y,
                });
                // A month's segment is emitted at its final tick and ends
                // where the next month begins; the label is centered over the
                // columns the month covers, which for a partially visible
                // month is fewer than its calendar days.
                if next.map_or(true, |n| n.month() != date.month()) {
                    let segment_end = column_width * (i + 1) as f32;
                    let covered = (i - month_start + 1) as f32;
                    upper.push(UpperSegment {
                        text: locale::month_name(date, locale),
                        text_x: segment_end - covered * column_width * 0.5,
                        text_y: upper_y,
                        divider_x: segment_end,
                        divider_top: 0.0,
                        divider_bottom: top_height,
                    });
                }
            }
            ViewMode::Hour | ViewMode::HalfDay | ViewMode::QuarterDay => {
                lower.push(LowerLabel {
                    text: locale::hour_label(date, locale),
                    x: column_width * (i as f32 + rtl_shift),
                    y: lower_y,
                });
                if prev.map_or(true, |p| p.day() != date.day()) {
                    upper.push(UpperSegment {
                        text: format!(
                            "{}, {} {}",
                            locale::weekday_short(date, locale),
                            date.day(),
                            locale::month_name(date, locale)
                        ),
                        text_x: column_width * i as f32 + day_columns * column_width * 0.5,
                        text_y: upper_y,
                        divider_x: column_width * i as f32 + day_columns * column_width,
                        divider_top: 0.0,
                        divider_bottom: top_height,
                    });
                }
            }
        }
    }

    CalendarHeader {
        width: column_width * dates.len() as f32,
        height: header_height,
        lower,
        upper,
    }
}

/// Anchor x for the Year/QuarterYear/Month upper labels. The label sits near
/// the period's leading edge regardless of how many ticks the period spans:
/// `periodOffset` is the zero-based month (0 in Year mode), subtracted in
/// LTR and added in RTL, with an absolute-value guard against the offset
/// exceeding the tick index at the start of the span.
fn coarse_label_x(i: usize, period_offset: f32, column_width: f32, rtl: bool) -> f32 {
    let cells = if rtl {
        6.0 + i as f32 + period_offset
    } else {
        6.0 + i as f32 - period_offset
    };
    (cells * column_width).abs()
}
