use super::task::Task;

/// A task enriched with its computed on-screen geometry.
///
/// Produced by the bar-positioning step and consumed by the arrow router and
/// the rendering shell. `x1`/`x2` are the horizontal extent in pixels, `y`
/// the row top of the bar, `index` the 0-based row position used for the
/// arrow's vertical routing.
#[derive(Debug, Clone)]
pub struct BarTask {
    pub task: Task,
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub index: usize,
    pub height: f32,
}
