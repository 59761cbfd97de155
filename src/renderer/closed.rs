//! Renderer for closed outlines.

use super::PathRenderer;
use crate::drawable::Drawable;
use crate::element::{Extent, LegendContext, PlotPoint};

/// Appends the first point to the path so the inner renderer draws a loop.
#[derive(Debug, Clone)]
pub struct ClosedPathRenderer<R> {
    inner: R,
}

impl<R> ClosedPathRenderer<R> {
    pub fn new(inner: R) -> Self {
        ClosedPathRenderer { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<T, R> PathRenderer<T> for ClosedPathRenderer<R>
where
    T: PlotPoint,
    R: PathRenderer<T>,
{
    fn render(&self, extent: &Extent, path: &[T]) -> Drawable {
        let Some(first) = path.first() else {
            return Drawable::Empty;
        };

        let mut closed = Vec::with_capacity(path.len() + 1);
        closed.extend_from_slice(path);
        closed.push(first.clone());
        self.inner.render(extent, &closed)
    }

    fn legend_context(&self) -> LegendContext {
        self.inner.legend_context()
    }
}
