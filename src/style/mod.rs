//! Styling module for pathplot.
//!
//! Colors, line and dash styles, text styles for legend labels, and themes.

pub mod color;
pub mod line_style;
pub mod text_style;
pub mod theme;

pub use color::Color;
pub use line_style::{DashPattern, LineStyle};
pub use text_style::{DominantBaseline, FontWeight, TextStyle};
pub use theme::{Theme, ThemeConfig};
