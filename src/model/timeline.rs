use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The time granularity of one timeline column.
///
/// A closed set: every layout decision dispatches on this enum, so adding a
/// granularity means adding one variant case in each consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Hour,
    QuarterDay,
    HalfDay,
    Day,
    Week,
    Month,
    QuarterYear,
    Year,
}

impl ViewMode {
    /// Default column width in pixels for this granularity.
    pub fn default_column_width(self) -> f32 {
        match self {
            ViewMode::Hour => 40.0,
            ViewMode::QuarterDay => 60.0,
            ViewMode::HalfDay => 80.0,
            ViewMode::Day => 60.0,
            ViewMode::Week => 250.0,
            ViewMode::Month => 300.0,
            ViewMode::QuarterYear => 320.0,
            ViewMode::Year => 350.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Hour => "Hour",
            ViewMode::QuarterDay => "Quarter of Day",
            ViewMode::HalfDay => "Half of Day",
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
            ViewMode::QuarterYear => "Quarter of Year",
            ViewMode::Year => "Year",
        }
    }

    pub const ALL: [ViewMode; 8] = [
        ViewMode::Hour,
        ViewMode::QuarterDay,
        ViewMode::HalfDay,
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::QuarterYear,
        ViewMode::Year,
    ];
}

/// The contract between the tick generator and its consumers.
///
/// Invariants: `dates` is non-empty, sorted ascending, with no duplicate
/// instants; adjacent ticks are one native unit of `view_mode` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSetup {
    pub view_mode: ViewMode,
    pub dates: Vec<NaiveDateTime>,
}
