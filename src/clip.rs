//! Polyline clipping against the plot extent.
//!
//! Each segment of the path is clipped parametrically (Liang-Barsky) against
//! the four edges of the extent. Consecutive visible pieces are joined into
//! runs; a run ends where the path leaves the extent and a new one starts
//! where it comes back. Points where the path crosses an edge are
//! interpolated so strokes end exactly on the boundary.

use std::mem;

use log::trace;

use crate::element::{Extent, PlotPoint};

/// Edge of the extent a clip parameter was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

/// Visible parameter range `[t0, t1]` of one path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    t0: f64,
    t1: f64,
    /// Edge crossed at `t0`, if `t0 > 0`
    enter: Option<Edge>,
    /// Edge crossed at `t1`, if `t1 < 1`
    exit: Option<Edge>,
}

/// Split `path` into the runs of points visible inside `extent`.
///
/// Points on the boundary count as inside. Runs are returned in path order
/// and never reordered internally; a path that lies entirely inside comes
/// back as a single run equal to the input. Boundary crossings are
/// interpolated with [`PlotPoint::at`] on the datum the crossing segment
/// starts from. A pair with a non-finite coordinate breaks the path, and
/// segments that only touch the extent in a single point are dropped.
pub fn clip<T: PlotPoint>(path: &[T], extent: &Extent) -> Vec<Vec<T>> {
    let mut segments = Vec::new();
    if path.len() < 2 {
        return segments;
    }

    let mut run: Vec<T> = Vec::new();
    for pair in path.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        match clip_segment(a, b, extent) {
            Some(span) if span.t0 < span.t1 => {
                if span.t0 > 0.0 {
                    // Re-entering: whatever was open ended outside
                    finish_run(&mut run, &mut segments);
                }
                if run.is_empty() {
                    run.push(point_at(a, b, span.t0, span.enter, extent));
                }
                run.push(point_at(a, b, span.t1, span.exit, extent));
                if span.t1 < 1.0 {
                    finish_run(&mut run, &mut segments);
                }
            }
            _ => finish_run(&mut run, &mut segments),
        }
    }
    finish_run(&mut run, &mut segments);

    trace!(
        "Clipped {} points to {} visible runs in {}x{}",
        path.len(),
        segments.len(),
        extent.width(),
        extent.height()
    );
    segments
}

fn finish_run<T>(run: &mut Vec<T>, segments: &mut Vec<Vec<T>>) {
    if run.len() >= 2 {
        segments.push(mem::take(run));
    } else {
        run.clear();
    }
}

/// Liang-Barsky clip of the segment `a -> b`.
fn clip_segment<T: PlotPoint>(a: &T, b: &T, extent: &Extent) -> Option<Span> {
    let (ax, ay, bx, by) = (a.x(), a.y(), b.x(), b.y());
    if !(ax.is_finite() && ay.is_finite() && bx.is_finite() && by.is_finite()) {
        return None;
    }

    let dx = bx - ax;
    let dy = by - ay;
    let mut span = Span {
        t0: 0.0,
        t1: 1.0,
        enter: None,
        exit: None,
    };

    // p * t <= q for every edge
    let constraints = [
        (-dx, ax, Edge::MinX),
        (dx, extent.width() - ax, Edge::MaxX),
        (-dy, ay, Edge::MinY),
        (dy, extent.height() - ay, Edge::MaxY),
    ];

    for (p, q, edge) in constraints {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > span.t1 {
                return None;
            }
            if r > span.t0 {
                span.t0 = r;
                span.enter = Some(edge);
            }
        } else {
            if r < span.t0 {
                return None;
            }
            if r < span.t1 {
                span.t1 = r;
                span.exit = Some(edge);
            }
        }
    }

    Some(span)
}

/// The datum at parameter `t` along `a -> b`.
///
/// Endpoints are returned as-is. Interpolated points are pinned to the edge
/// they were clipped against so rounding never leaves them a hair outside.
fn point_at<T: PlotPoint>(a: &T, b: &T, t: f64, edge: Option<Edge>, extent: &Extent) -> T {
    let edge = match edge {
        Some(edge) => edge,
        None if t <= 0.0 => return a.clone(),
        None => return b.clone(),
    };

    let mut x = a.x() + t * (b.x() - a.x());
    let mut y = a.y() + t * (b.y() - a.y());
    match edge {
        Edge::MinX => x = 0.0,
        Edge::MaxX => x = extent.width(),
        Edge::MinY => y = 0.0,
        Edge::MaxY => y = extent.height(),
    }
    a.at(
        x.clamp(0.0, extent.width()),
        y.clamp(0.0, extent.height()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;
    use crate::element::Point;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn extent() -> Extent {
        Extent::new(100.0, 100.0)
    }

    #[test]
    fn test_short_paths_yield_nothing() {
        assert!(clip::<Point>(&[], &extent()).is_empty());
        assert!(clip(&pts(&[(50.0, 50.0)]), &extent()).is_empty());
    }

    #[test]
    fn test_inside_path_is_unchanged() {
        let path = pts(&[(10.0, 10.0), (20.0, 80.0), (90.0, 40.0), (90.0, 40.0), (5.0, 5.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments, vec![path]);
    }

    #[test]
    fn test_boundary_points_are_inside() {
        let path = pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments, vec![path]);
    }

    #[test]
    fn test_outside_path_yields_nothing() {
        let path = pts(&[(-10.0, -10.0), (-50.0, 20.0), (-5.0, 200.0), (150.0, 150.0)]);
        assert!(clip(&path, &extent()).is_empty());
    }

    #[test]
    fn test_exit_is_interpolated_on_boundary() {
        let path = pts(&[(10.0, 10.0), (50.0, 10.0), (150.0, 10.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(
            segments,
            vec![pts(&[(10.0, 10.0), (50.0, 10.0), (100.0, 10.0)])]
        );
    }

    #[test]
    fn test_diagonal_exit_lands_exactly_on_edge() {
        let path = pts(&[(30.0, 20.0), (130.0, 70.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments.len(), 1);
        let last = segments[0][1];
        assert_eq!(last.x, 100.0);
        assert_close(last.y, 55.0);
    }

    #[test]
    fn test_entry_is_interpolated() {
        let path = pts(&[(-50.0, 50.0), (50.0, 50.0), (60.0, 60.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(
            segments,
            vec![pts(&[(0.0, 50.0), (50.0, 50.0), (60.0, 60.0)])]
        );
    }

    #[test]
    fn test_pass_through_both_endpoints_outside() {
        let path = pts(&[(-10.0, 50.0), (110.0, 50.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments, vec![pts(&[(0.0, 50.0), (100.0, 50.0)])]);
    }

    #[test]
    fn test_leave_and_return_splits_runs() {
        let path = pts(&[(10.0, 10.0), (200.0, 10.0), (200.0, 50.0), (10.0, 50.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(
            segments,
            vec![
                pts(&[(10.0, 10.0), (100.0, 10.0)]),
                pts(&[(100.0, 50.0), (10.0, 50.0)]),
            ]
        );
    }

    #[test]
    fn test_corner_crossing() {
        let path = pts(&[(-10.0, -10.0), (10.0, 10.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments, vec![pts(&[(0.0, 0.0), (10.0, 10.0)])]);
    }

    #[test]
    fn test_corner_graze_is_dropped() {
        // Touches the extent only at (0, 0)
        let path = pts(&[(-10.0, 10.0), (10.0, -10.0)]);
        assert!(clip(&path, &extent()).is_empty());
    }

    #[test]
    fn test_leaving_from_boundary_point() {
        let path = pts(&[(10.0, 10.0), (0.0, 50.0), (-20.0, 80.0)]);
        let segments = clip(&path, &extent());
        assert_eq!(segments, vec![pts(&[(10.0, 10.0), (0.0, 50.0)])]);
    }

    #[test]
    fn test_non_finite_point_breaks_path() {
        let path = pts(&[
            (10.0, 10.0),
            (20.0, 20.0),
            (f64::NAN, 5.0),
            (30.0, 30.0),
            (40.0, 40.0),
        ]);
        let segments = clip(&path, &extent());
        assert_eq!(
            segments,
            vec![
                pts(&[(10.0, 10.0), (20.0, 20.0)]),
                pts(&[(30.0, 30.0), (40.0, 40.0)]),
            ]
        );
    }

    #[test]
    fn test_zero_sized_extent() {
        let empty = Extent::new(0.0, 0.0);
        let path = pts(&[(-1.0, -1.0), (1.0, 1.0)]);
        assert!(clip(&path, &empty).is_empty());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        x: f64,
        y: f64,
        id: u32,
    }

    impl PlotPoint for Sample {
        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> f64 {
            self.y
        }

        fn at(&self, x: f64, y: f64) -> Self {
            Sample { x, y, id: self.id }
        }
    }

    #[test]
    fn test_custom_datum_keeps_payload() {
        let path = vec![
            Sample { x: 50.0, y: 50.0, id: 1 },
            Sample { x: 50.0, y: 150.0, id: 2 },
        ];
        let segments = clip(&path, &extent());
        assert_eq!(
            segments,
            vec![vec![
                Sample { x: 50.0, y: 50.0, id: 1 },
                Sample { x: 50.0, y: 100.0, id: 1 },
            ]]
        );
    }
}
