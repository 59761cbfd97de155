//! Path rendering for plot series.
//!
//! Clips an already-positioned polyline against the plot extent, styles the
//! visible pieces and exposes a matching legend swatch. Output is a tree of
//! [`Drawable`]s that the SVG backend (or any other rasterizer) consumes.

pub mod backend;
pub mod clip;
pub mod config;
pub mod drawable;
pub mod element;
pub mod error;
pub mod renderer;
pub mod style;

pub use clip::clip;
pub use config::RendererConfig;
pub use drawable::{Drawable, Stroke};
pub use element::{legend_stroke_length, Extent, LegendContext, PlotPoint, Point, Text};
pub use error::{PlotError, PlotResult};
pub use renderer::{
    ClosedPathRenderer, CustomPathRenderer, DefaultPathRenderer, EmptyPathRenderer, PathRenderer,
};
pub use style::{Color, DashPattern, LineStyle, TextStyle, Theme, ThemeConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backend::SvgBackend;
    pub use crate::clip::clip;
    pub use crate::config::RendererConfig;
    pub use crate::drawable::Drawable;
    pub use crate::element::{Extent, LegendContext, PlotPoint, Point};
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::renderer::{self, PathRenderer};
    pub use crate::style::{Color, DashPattern, LineStyle, TextStyle, Theme};
}
