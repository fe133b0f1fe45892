//! Renderer-agnostic drawing primitives.
//!
//! The layout core emits these instead of widget calls so any vector target
//! (egui painter, SVG, canvas) can consume one flat list.

/// What a primitive represents, so the renderer can pick stroke/fill styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    HeaderBackground,
    HeaderLowerText,
    HeaderUpperText,
    HeaderDivider,
    RowBackground,
    RowLine,
    TickLine,
    TodayHighlight,
    ArrowLine,
    ArrowHead,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction. Coordinates are in chart space: x grows with the
/// tick index, y grows downward, the origin is the chart's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        role: Role,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        role: Role,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        role: Role,
    },
    Path {
        points: Vec<Point>,
        role: Role,
    },
    Polygon {
        points: Vec<Point>,
        role: Role,
    },
}

/// Reflect an x coordinate about a layout of the given total width.
///
/// The one mirroring transform shared by every right-to-left code path:
/// components compute canonical left-to-right geometry and reflect it,
/// instead of duplicating sign-flipped arithmetic per call site.
pub fn reflect_x(x: f32, width: f32) -> f32 {
    width - x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_is_an_involution() {
        let x = 137.5;
        assert_eq!(reflect_x(reflect_x(x, 400.0), 400.0), x);
    }

    #[test]
    fn reflect_swaps_edges() {
        assert_eq!(reflect_x(0.0, 400.0), 400.0);
        assert_eq!(reflect_x(400.0, 400.0), 0.0);
    }
}
