//! Output backends for drawables.

mod svg;

pub use svg::SvgBackend;
