pub mod bar;
pub mod project;
pub mod task;
pub mod timeline;

pub use bar::BarTask;
pub use project::Project;
pub use task::{Task, TaskKind};
pub use timeline::{DateSetup, ViewMode};
