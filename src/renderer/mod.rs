//! Path renderers: turn a positioned path into a drawable plus a legend entry.
//!
//! [`PathRenderer`] is the one seam the plot container talks to. The free
//! functions in this module build the five renderer variants:
//!
//! | constructor | behavior |
//! |-------------|----------|
//! | [`custom`]  | caller-supplied drawing function |
//! | [`default`] | clip, stroke, dash, group |
//! | [`named`]   | [`default`] with a theme-styled text label |
//! | [`closed`]  | closes the path into a loop, then delegates |
//! | [`empty`]   | draws nothing, no legend |

mod closed;
mod custom;
mod default;
mod empty;

pub use closed::ClosedPathRenderer;
pub use custom::CustomPathRenderer;
pub use default::DefaultPathRenderer;
pub use empty::EmptyPathRenderer;

use crate::config::RendererConfig;
use crate::drawable::Drawable;
use crate::element::{Extent, LegendContext, Text};
use crate::error::PlotResult;

/// Strategy for drawing one plot series' path.
///
/// Renderers hold only construction-time configuration, so a single instance
/// can serve any number of render passes and threads.
pub trait PathRenderer<T>: Send + Sync {
    /// Draw `path` (already in pixel space) inside `extent`.
    fn render(&self, extent: &Extent, path: &[T]) -> Drawable;

    /// This renderer's legend contribution.
    fn legend_context(&self) -> LegendContext {
        LegendContext::Empty
    }
}

impl<T, R: PathRenderer<T> + ?Sized> PathRenderer<T> for Box<R> {
    fn render(&self, extent: &Extent, path: &[T]) -> Drawable {
        (**self).render(extent, path)
    }

    fn legend_context(&self) -> LegendContext {
        (**self).legend_context()
    }
}

/// A renderer that hands drawing to `render`, with no legend entry.
///
/// Attach one with [`CustomPathRenderer::with_legend`].
pub fn custom<T, F>(render: F) -> CustomPathRenderer<F>
where
    F: Fn(&Extent, &[T]) -> Drawable + Send + Sync,
{
    CustomPathRenderer::new(render)
}

/// The standard clipping renderer.
///
/// Fails when `config` does not validate (e.g. a negative dash entry).
pub fn default(
    config: &RendererConfig,
    label: Option<Drawable>,
) -> PlotResult<DefaultPathRenderer> {
    config.validate()?;
    Ok(DefaultPathRenderer::new(config, label))
}

/// [`default`] with a text label built from `name` in the configured label
/// style.
pub fn named(
    name: impl Into<String>,
    config: &RendererConfig,
) -> PlotResult<DefaultPathRenderer> {
    let label = Text::new(name, 0.0, 0.0).style(config.label_style());
    default(config, Some(Drawable::text(label)))
}

/// Close the path back to its first point before handing it to `inner`.
pub fn closed<R>(inner: R) -> ClosedPathRenderer<R> {
    ClosedPathRenderer::new(inner)
}

/// A renderer that draws nothing.
pub fn empty() -> EmptyPathRenderer {
    EmptyPathRenderer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Point;
    use crate::style::DashPattern;
    use std::sync::Arc;
    use std::thread;

    fn square() -> Vec<Point> {
        vec![
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 90.0),
        ]
    }

    #[test]
    fn test_renderers_as_trait_objects() {
        let config = RendererConfig::default();
        let renderers: Vec<Box<dyn PathRenderer<Point>>> = vec![
            Box::new(default(&config, None).unwrap()),
            Box::new(named("series", &config).unwrap()),
            Box::new(closed(default(&config, None).unwrap())),
            Box::new(empty()),
            Box::new(custom(|_: &Extent, _: &[Point]| Drawable::line(1.0, 1.0))),
        ];

        let extent = Extent::new(100.0, 100.0);
        let drawn: Vec<bool> = renderers
            .iter()
            .map(|r| !r.render(&extent, &square()).is_empty())
            .collect();
        assert_eq!(drawn, vec![true, true, true, false, true]);

        let with_legend: Vec<bool> = renderers
            .iter()
            .map(|r| !r.legend_context().is_empty())
            .collect();
        assert_eq!(with_legend, vec![false, true, false, false, false]);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = RendererConfig {
            dash: DashPattern::Custom(vec![3.0, -1.0]),
            ..RendererConfig::default()
        };
        assert!(default(&config, None).is_err());
        assert!(named("bad", &config).is_err());
    }

    #[test]
    fn test_closed_over_boxed_renderer() {
        let inner: Box<dyn PathRenderer<Point>> =
            Box::new(named("loop", &RendererConfig::default()).unwrap());
        let renderer = closed(inner);
        let extent = Extent::new(100.0, 100.0);
        let drawable = renderer.render(&extent, &square());
        assert_eq!(drawable.strokes()[0].points.len(), 4);
        assert!(!PathRenderer::<Point>::legend_context(&renderer).is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let renderer = Arc::new(named("shared", &RendererConfig::default()).unwrap());
        let expected = renderer.render(&Extent::new(100.0, 100.0), &square());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let renderer = Arc::clone(&renderer);
                thread::spawn(move || renderer.render(&Extent::new(100.0, 100.0), &square()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
