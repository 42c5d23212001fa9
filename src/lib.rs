//! Cog Icon - mathematically derived gear icons as SVG path data
//!
//! This library derives the outline of a settings cog from three concentric
//! circles, a tooth count and a splay angle, and serializes it to path data.
//!
//! # Example
//!
//! ```rust
//! use cog_icon::{generate, IconConfig};
//!
//! let paths = generate(&IconConfig::default()).unwrap();
//! assert!(paths.outline.starts_with("M "));
//! assert!(paths.hole.is_some());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use config::{ConfigLoadError, FillRule, GapStyle, IconConfig};
pub use error::{ConfigError, ConfigField};
pub use geometry::Point;
pub use renderer::{render_svg, PathCommand, PathData, SvgConfig};

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use renderer::path::{DEFAULT_PRECISION, MAX_PRECISION};

/// Errors that can occur during the file-to-SVG pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading or parsing a config file
    #[error("config load error: {0}")]
    Load(#[from] ConfigLoadError),

    /// Configuration violates a geometric invariant
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Path data generated for one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconPaths {
    /// Closed outline of the toothed body
    pub outline: String,
    /// Hole contour, absent when `d3` is zero
    pub hole: Option<String>,
}

impl IconPaths {
    /// Outline and hole as a single `d` attribute
    pub fn combined(&self) -> String {
        match &self.hole {
            Some(hole) => format!("{} {}", self.outline, hole),
            None => self.outline.clone(),
        }
    }
}

/// Validate the configuration and build its path commands
///
/// The returned data holds the outline followed by the hole sub-path.
pub fn build_path(config: &IconConfig) -> Result<PathData, ConfigError> {
    config.validate()?;
    let teeth = geometry::build_teeth(config);
    Ok(geometry::assemble(&teeth, config))
}

/// Generate path data with the default precision
pub fn generate(config: &IconConfig) -> Result<IconPaths, ConfigError> {
    generate_with_precision(config, DEFAULT_PRECISION)
}

/// Generate outline and hole path data
///
/// Validation happens once, before any geometry is built; an invalid
/// configuration yields an error and never a partial path.
pub fn generate_with_precision(
    config: &IconConfig,
    precision: usize,
) -> Result<IconPaths, ConfigError> {
    if let Err(e) = config.validate() {
        debug!(error = %e, field = %e.field(), "rejected icon config");
        return Err(e);
    }

    let teeth = geometry::build_teeth(config);
    let outline = geometry::assemble_outline(&teeth, config);
    let hole = geometry::assemble_hole(config);

    debug!(
        teeth = config.teeth,
        size = config.size,
        gaps = %config.gaps,
        splayed = geometry::ToothAngles::for_config(config).is_splayed(),
        top_width = teeth
            .first()
            .map_or(0.0, |t| t.outer_leading.distance(t.outer_trailing)),
        precision = precision.min(MAX_PRECISION),
        outline_commands = outline.len(),
        has_hole = hole.is_some(),
        "generated cog geometry"
    );

    Ok(IconPaths {
        outline: renderer::serialize_with_precision(&outline, precision),
        hole: hole.map(|h| renderer::serialize_with_precision(&h, precision)),
    })
}

/// Path data of the polygon through every tooth center
pub fn polygon_path(config: &IconConfig) -> Result<String, ConfigError> {
    polygon_path_with_precision(config, DEFAULT_PRECISION)
}

/// Polygon path data with `precision` decimals, as used for the cog itself
pub fn polygon_path_with_precision(
    config: &IconConfig,
    precision: usize,
) -> Result<String, ConfigError> {
    config.validate()?;
    let teeth = geometry::build_teeth(config);
    Ok(renderer::serialize_with_precision(
        &geometry::assemble_polygon(&teeth),
        precision,
    ))
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Icon geometry
    pub icon: IconConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon configuration
    pub fn with_icon(mut self, icon: IconConfig) -> Self {
        self.icon = icon;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render an icon to an SVG document with default SVG options
///
/// # Example
///
/// ```rust
/// use cog_icon::{render, IconConfig};
///
/// let svg = render(&IconConfig::new().with_teeth(12)).unwrap();
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("<path d=\"M "));
/// ```
pub fn render(config: &IconConfig) -> Result<String, ConfigError> {
    render_with_config(&RenderConfig::new().with_icon(config.clone()))
}

/// Render an icon to an SVG document
pub fn render_with_config(config: &RenderConfig) -> Result<String, ConfigError> {
    let paths = generate_with_precision(&config.icon, config.svg.precision)?;
    Ok(render_svg(&paths, &config.icon, &config.svg))
}

/// Load an icon config from a TOML file and render it
pub fn render_file(path: &Path, svg: &SvgConfig) -> Result<String, RenderError> {
    let icon = IconConfig::from_file(path)?;
    debug!(path = %path.display(), "loaded icon config");
    let config = RenderConfig::new().with_icon(icon).with_svg(svg.clone());
    Ok(render_with_config(&config)?)
}
