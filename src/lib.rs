//! Gantt chart layout core.
//!
//! Everything under [`layout`] is a pure function of its inputs: given tasks,
//! a view mode, a locale, a text direction, and layout constants, it produces
//! renderer-agnostic drawing primitives (calendar header bands, grid lines,
//! the today highlight, dependency arrows). The egui shell in the binary
//! target consumes those primitives; any other vector renderer could.

pub mod layout;
pub mod model;
