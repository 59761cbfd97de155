//! Standard path renderer.

use log::debug;

use super::PathRenderer;
use crate::clip::clip;
use crate::config::RendererConfig;
use crate::drawable::Drawable;
use crate::element::{legend_stroke_length, Extent, LegendContext, PlotPoint};
use crate::style::{Color, DashPattern};

/// Clips the path to the extent and strokes every visible run with the same
/// width, color and dash pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPathRenderer {
    stroke_width: f64,
    color: Color,
    dash: DashPattern,
    legend: LegendContext,
}

impl DefaultPathRenderer {
    /// Build a renderer from an already validated config.
    ///
    /// The legend entry, if `label` is given, is built here and reused for
    /// every render pass.
    pub(crate) fn new(config: &RendererConfig, label: Option<Drawable>) -> Self {
        let legend = match label {
            Some(label) => {
                let length = legend_stroke_length(config.dash.segments());
                let sample = Drawable::line(length, config.stroke_width)
                    .with_color(&config.color)
                    .with_dash(&config.dash);
                LegendContext::entry(sample, label)
            }
            None => LegendContext::Empty,
        };

        DefaultPathRenderer {
            stroke_width: config.stroke_width,
            color: config.color.clone(),
            dash: config.dash.clone(),
            legend,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn dash(&self) -> &DashPattern {
        &self.dash
    }

    /// The legend entry built at construction.
    pub fn legend(&self) -> &LegendContext {
        &self.legend
    }
}

impl<T: PlotPoint> PathRenderer<T> for DefaultPathRenderer {
    fn render(&self, extent: &Extent, path: &[T]) -> Drawable {
        let segments = clip(path, extent);
        if segments.is_empty() {
            debug!("Nothing of a {}-point path is visible", path.len());
            return Drawable::Empty;
        }

        debug!(
            "Rendering {} visible runs of a {}-point path",
            segments.len(),
            path.len()
        );
        Drawable::group(segments.iter().map(|segment| {
            Drawable::stroke(segment, self.stroke_width)
                .with_color(&self.color)
                .with_dash(&self.dash)
        }))
    }

    fn legend_context(&self) -> LegendContext {
        self.legend.clone()
    }
}
