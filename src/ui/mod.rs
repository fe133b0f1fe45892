pub mod chart;
pub mod dialogs;
pub mod task_list;
pub mod theme;
pub mod toolbar;
