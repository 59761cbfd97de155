//! Renderer backed by a caller-supplied function.

use std::fmt;

use super::PathRenderer;
use crate::drawable::Drawable;
use crate::element::{Extent, LegendContext};

/// Delegates drawing to a closure. No clipping or styling is applied.
#[derive(Clone)]
pub struct CustomPathRenderer<F> {
    render: F,
    legend: LegendContext,
}

impl<F> CustomPathRenderer<F> {
    pub fn new(render: F) -> Self {
        CustomPathRenderer {
            render,
            legend: LegendContext::Empty,
        }
    }

    /// Set the legend contribution returned by this renderer.
    pub fn with_legend(mut self, legend: LegendContext) -> Self {
        self.legend = legend;
        self
    }
}

impl<F> fmt::Debug for CustomPathRenderer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPathRenderer")
            .field("legend", &self.legend)
            .finish_non_exhaustive()
    }
}

impl<T, F> PathRenderer<T> for CustomPathRenderer<F>
where
    F: Fn(&Extent, &[T]) -> Drawable + Send + Sync,
{
    fn render(&self, extent: &Extent, path: &[T]) -> Drawable {
        (self.render)(extent, path)
    }

    fn legend_context(&self) -> LegendContext {
        self.legend.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Point;
    use crate::renderer;

    #[test]
    fn test_render_is_delegated_unclipped() {
        // Draws the raw path, even outside the extent and for one point
        let r = renderer::custom(|_: &Extent, path: &[Point]| Drawable::stroke(path, 4.0));
        let extent = Extent::new(10.0, 10.0);
        let path = vec![Point::new(-100.0, -100.0)];

        let drawable = r.render(&extent, &path);
        let strokes = drawable.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points, path);
        assert_eq!(strokes[0].style.width, 4.0);
    }

    #[test]
    fn test_extent_is_passed_through() {
        let r = renderer::custom(|extent: &Extent, _: &[Point]| {
            Drawable::line(extent.width(), 1.0)
        });
        let d = r.render(&Extent::new(42.0, 7.0), &vec![Point::new(0.0, 0.0)]);
        assert_eq!(d.strokes()[0].points[1], Point::new(42.0, 0.0));
    }

    #[test]
    fn test_optional_legend() {
        let r = renderer::custom(|_: &Extent, _: &[Point]| Drawable::Empty);
        assert!(PathRenderer::<Point>::legend_context(&r).is_empty());

        let legend = LegendContext::entry(Drawable::line(8.0, 1.0), Drawable::Empty);
        let r = r.with_legend(legend.clone());
        assert_eq!(PathRenderer::<Point>::legend_context(&r), legend);
        assert!(format!("{:?}", r).starts_with("CustomPathRenderer"));
    }
}
