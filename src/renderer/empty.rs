//! Renderer that draws nothing.

use super::PathRenderer;
use crate::drawable::Drawable;
use crate::element::Extent;

/// For series that should stay invisible, such as scatter-only series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyPathRenderer;

impl<T> PathRenderer<T> for EmptyPathRenderer {
    fn render(&self, _extent: &Extent, _path: &[T]) -> Drawable {
        Drawable::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Point;
    use crate::renderer;

    #[test]
    fn test_always_empty() {
        let r = renderer::empty();
        let path: Vec<Point> = (0..10).map(|i| Point::new(i as f64, i as f64)).collect();
        for extent in [Extent::new(100.0, 100.0), Extent::new(0.0, 0.0)] {
            assert_eq!(r.render(&extent, &path), Drawable::Empty);
        }
        assert!(PathRenderer::<Point>::legend_context(&r).is_empty());
    }
}
