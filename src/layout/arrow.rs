//! Orthogonal connector routing between a predecessor bar and its successor.

use crate::model::BarTask;

use super::primitives::{reflect_x, Point, Primitive, Role};

const HEAD_SIZE: f32 = 5.0;

/// A routed connector: the orthogonal polyline from the predecessor's
/// trailing edge to the successor's anchor, plus the arrowhead triangle
/// whose apex sits exactly on the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGeometry {
    pub path: Vec<Point>,
    pub head: [Point; 3],
}

impl ArrowGeometry {
    pub fn primitives(&self) -> [Primitive; 2] {
        [
            Primitive::Path {
                points: self.path.clone(),
                role: Role::ArrowLine,
            },
            Primitive::Polygon {
                points: self.head.to_vec(),
                role: Role::ArrowHead,
            },
        ]
    }
}

/// Route the connector from `from` (predecessor) to `to` (successor).
///
/// The right-to-left result is the exact reflection of the left-to-right
/// one: inputs are mirrored through the shared reflect-x transform, routed
/// canonically, and mirrored back. No collision avoidance is attempted;
/// the geometry is a pure function of the four numeric inputs.
pub fn route_arrow(
    from: &BarTask,
    to: &BarTask,
    row_height: f32,
    task_height: f32,
    arrow_indent: f32,
    rtl: bool,
) -> ArrowGeometry {
    if rtl {
        let geometry = route_ltr(
            &mirrored_bar(from),
            &mirrored_bar(to),
            row_height,
            task_height,
            arrow_indent,
        );
        mirrored_geometry(geometry)
    } else {
        route_ltr(from, to, row_height, task_height, arrow_indent)
    }
}

fn route_ltr(
    from: &BarTask,
    to: &BarTask,
    row_height: f32,
    task_height: f32,
    arrow_indent: f32,
) -> ArrowGeometry {
    // Downward when the successor sits on a lower row.
    let direction = if from.index > to.index { -1.0 } else { 1.0 };
    let from_y = from.y + task_height / 2.0;
    let to_y = to.y + task_height / 2.0;
    let elbow_x = from.x2 + arrow_indent;
    let mid_y = from_y + direction * row_height / 2.0;

    let mut path = vec![
        Point::new(from.x2, from_y),
        Point::new(elbow_x, from_y),
        Point::new(elbow_x, mid_y),
    ];
    if from.x2 + 2.0 * arrow_indent < to.x1 {
        // Far apart: run the long leg at the half-row level and turn down
        // just before the successor.
        path.push(Point::new(to.x1 - arrow_indent, mid_y));
        path.push(Point::new(to.x1 - arrow_indent, to_y));
    } else {
        // Close or overlapping in x: drop straight to the successor's row;
        // the final leg backs up when the elbow has passed the anchor.
        path.push(Point::new(elbow_x, to_y));
    }
    path.push(Point::new(to.x1, to_y));

    let head = [
        Point::new(to.x1, to_y),
        Point::new(to.x1 - HEAD_SIZE, to_y - HEAD_SIZE),
        Point::new(to.x1 - HEAD_SIZE, to_y + HEAD_SIZE),
    ];

    ArrowGeometry { path, head }
}

/// Mirror a bar's horizontal extent about x = 0; rows are untouched.
fn mirrored_bar(bar: &BarTask) -> BarTask {
    BarTask {
        x1: reflect_x(bar.x2, 0.0),
        x2: reflect_x(bar.x1, 0.0),
        ..bar.clone()
    }
}

fn mirrored_geometry(geometry: ArrowGeometry) -> ArrowGeometry {
    let mirror = |p: &Point| Point::new(reflect_x(p.x, 0.0), p.y);
    ArrowGeometry {
        path: geometry.path.iter().map(mirror).collect(),
        head: [
            mirror(&geometry.head[0]),
            mirror(&geometry.head[1]),
            mirror(&geometry.head[2]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn bar(x1: f32, x2: f32, y: f32, index: usize) -> BarTask {
        let d = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        BarTask {
            task: Task::new(format!("b{index}"), "bar", d, d),
            x1,
            x2,
            y,
            index,
            height: 20.0,
        }
    }

    // from = {10, 60, row 0}, to = {120, 170, row 1}: far-apart routing.
    #[test]
    fn far_apart_bars_route_through_the_half_row_level() {
        let from = bar(10.0, 60.0, 0.0, 0);
        let to = bar(120.0, 170.0, 40.0, 1);
        let arrow = route_arrow(&from, &to, 40.0, 20.0, 10.0, false);

        assert_eq!(
            arrow.path,
            vec![
                Point::new(60.0, 10.0),
                Point::new(70.0, 10.0),
                Point::new(70.0, 30.0),
                Point::new(110.0, 30.0),
                Point::new(110.0, 50.0),
                Point::new(120.0, 50.0),
            ]
        );
        assert_eq!(arrow.head[0], Point::new(120.0, 50.0));
        assert_eq!(arrow.head[1], Point::new(115.0, 45.0));
        assert_eq!(arrow.head[2], Point::new(115.0, 55.0));
    }

    #[test]
    fn close_bars_collapse_to_a_direct_jog() {
        let from = bar(10.0, 100.0, 0.0, 0);
        let to = bar(110.0, 160.0, 40.0, 1);
        let arrow = route_arrow(&from, &to, 40.0, 20.0, 10.0, false);
        // 100 + 2*10 >= 110: no half-row leg, drop at the elbow.
        assert_eq!(
            arrow.path,
            vec![
                Point::new(100.0, 10.0),
                Point::new(110.0, 10.0),
                Point::new(110.0, 30.0),
                Point::new(110.0, 50.0),
                Point::new(110.0, 50.0),
            ]
        );
    }

    #[test]
    fn upward_routing_flips_the_direction_sign() {
        let from = bar(10.0, 60.0, 80.0, 2);
        let to = bar(120.0, 170.0, 0.0, 0);
        let arrow = route_arrow(&from, &to, 40.0, 20.0, 10.0, false);
        // from row 2 to row 0: the half-row jog goes up.
        assert_eq!(arrow.path[2], Point::new(70.0, 70.0));
        assert_eq!(*arrow.path.last().unwrap(), Point::new(120.0, 10.0));
    }

    #[test]
    fn path_always_terminates_at_the_arrowhead_apex() {
        let cases = [
            (bar(10.0, 60.0, 0.0, 0), bar(120.0, 170.0, 40.0, 1)),
            (bar(10.0, 150.0, 0.0, 0), bar(120.0, 170.0, 40.0, 1)),
            (bar(100.0, 300.0, 40.0, 1), bar(50.0, 80.0, 0.0, 0)),
        ];
        for (from, to) in cases {
            let arrow = route_arrow(&from, &to, 40.0, 20.0, 10.0, false);
            assert_eq!(*arrow.path.last().unwrap(), arrow.head[0]);
            assert_eq!(arrow.head[0], Point::new(to.x1, to.y + 10.0));
        }
    }

    #[test]
    fn all_coordinates_are_finite_for_finite_inputs() {
        let from = bar(-1.0e6, 1.0e6, 0.0, 0);
        let to = bar(3.0e6, 4.0e6, 4.0e6, 99);
        for rtl in [false, true] {
            let arrow = route_arrow(&from, &to, 40.0, 20.0, 10.0, rtl);
            for p in arrow.path.iter().chain(arrow.head.iter()) {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn rtl_output_is_the_exact_mirror_of_ltr() {
        let from_ltr = bar(10.0, 60.0, 0.0, 0);
        let to_ltr = bar(120.0, 170.0, 40.0, 1);
        let ltr = route_arrow(&from_ltr, &to_ltr, 40.0, 20.0, 10.0, false);

        // The same pair of bars reflected about x = 0.
        let from_rtl = bar(-60.0, -10.0, 0.0, 0);
        let to_rtl = bar(-170.0, -120.0, 40.0, 1);
        let rtl = route_arrow(&from_rtl, &to_rtl, 40.0, 20.0, 10.0, true);

        assert_eq!(rtl.path.len(), ltr.path.len());
        for (m, p) in rtl.path.iter().zip(ltr.path.iter()) {
            assert_eq!(*m, Point::new(-p.x, p.y));
        }
        for (m, p) in rtl.head.iter().zip(ltr.head.iter()) {
            assert_eq!(*m, Point::new(-p.x, p.y));
        }
    }
}
