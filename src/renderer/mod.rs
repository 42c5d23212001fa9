//! Path serialization and SVG output
//!
//! `path` turns command lists into path data strings; `svg` wraps generated
//! paths into a standalone icon document.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{serialize, serialize_with_precision, PathCommand, PathData};
pub use svg::render_svg;
