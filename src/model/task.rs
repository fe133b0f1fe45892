use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How a task is rendered and laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Task,
    Milestone,
    Project,
}

/// A single entry in the chart: a task bar, a milestone, or a project span.
///
/// Instances are supplied wholesale by the caller on every layout pass and
/// are never mutated by the layout core. `end >= start` and `progress` in
/// `0..=100` are caller contracts, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Progress from 0 (not started) to 100 (complete).
    pub progress: f32,
    pub kind: TaskKind,
    /// Ids of predecessor tasks. Ids that resolve to nothing are ignored
    /// when routing arrows.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Optional parent project id.
    #[serde(default)]
    pub project: Option<String>,
    /// Suppresses interaction in the shell; layout is unaffected.
    #[serde(default)]
    pub is_disabled: bool,
    /// External sort key, applied before the layout pass.
    #[serde(default)]
    pub display_order: Option<u32>,
}

impl Task {
    /// Create a new task with sensible defaults.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            progress: 0.0,
            kind: TaskKind::Task,
            dependencies: Vec::new(),
            project: None,
            is_disabled: false,
            display_order: None,
        }
    }

    /// Create a new milestone (zero-duration, rendered as a diamond).
    pub fn new_milestone(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            kind: TaskKind::Milestone,
            ..Self::new(id, name, date, date)
        }
    }

    /// Fluent helper for wiring up predecessors in sample data and tests.
    pub fn with_dependencies(mut self, ids: &[&str]) -> Self {
        self.dependencies = ids.iter().map(|s| s.to_string()).collect();
        self
    }
}
