use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// A Gantt project: the task set plus file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            tasks: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Apply the external `display_order` sort key. Tasks without a key keep
    /// their insertion order after the keyed ones. Runs before every layout
    /// pass so the core only ever sees the final row order.
    pub fn sort_by_display_order(&mut self) {
        self.tasks
            .sort_by_key(|t| t.display_order.unwrap_or(u32::MAX));
    }
}
