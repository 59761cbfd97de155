//! Geometry and legend elements shared by the clipper and the renderers.

mod legend;
pub mod text;

pub use legend::{legend_stroke_length, LegendContext, LEGEND_BASE_LENGTH};
pub use text::{escape_xml, Text};

use serde::Deserialize;

/// A point in pixel space.
///
/// Deserializes from a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// A path datum with a pixel position.
///
/// The clipper builds new data at boundary intersections through
/// [`PlotPoint::at`]; implementors decide what the non-positional payload of
/// such a datum is (typically a copy of the datum it was interpolated from).
pub trait PlotPoint: Clone {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// A datum like `self` moved to `(x, y)`.
    fn at(&self, x: f64, y: f64) -> Self;
}

impl PlotPoint for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn at(&self, x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl PlotPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn at(&self, x: f64, y: f64) -> Self {
        (x, y)
    }
}

/// The visible drawing area: `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    width: f64,
    height: f64,
}

impl Extent {
    /// Create an extent; negative or NaN sizes collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Extent {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Check if a point is inside the extent, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_normalizes_size() {
        let extent = Extent::new(-5.0, f64::NAN);
        assert_eq!(extent.width(), 0.0);
        assert_eq!(extent.height(), 0.0);
        assert!(extent.contains(0.0, 0.0));
        assert!(!extent.contains(0.1, 0.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let extent = Extent::new(100.0, 50.0);
        assert!(extent.contains(0.0, 0.0));
        assert!(extent.contains(100.0, 50.0));
        assert!(extent.contains(100.0, 0.0));
        assert!(!extent.contains(100.001, 25.0));
        assert!(!extent.contains(50.0, -0.5));
        assert!(!extent.contains(f64::NAN, 10.0));
    }

    #[test]
    fn test_point_from_json_pair() {
        let points: Vec<Point> = serde_json::from_str("[[1, 2.5], [3, 4]]").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.5), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_tuple_points() {
        let p = (3.0, 4.0);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.at(1.0, 2.0), (1.0, 2.0));
    }
}
