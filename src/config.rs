//! Icon configuration
//!
//! Every field has an explicit, documented default so a configuration can be
//! built from a partial TOML file or from CLI flags without hidden values.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::error::{ConfigError, ConfigField};

/// Errors that can occur when loading an icon configuration file
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read icon config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the outline travels between neighbouring teeth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapStyle {
    /// Straight line across the middle circle's chord
    #[default]
    Chord,
    /// Circular arc following the middle circle
    Arc,
}

/// Fill rule written on the rendered path element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    /// Value of the SVG `fill-rule` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

impl fmt::Display for GapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapStyle::Chord => f.write_str("chord"),
            GapStyle::Arc => f.write_str("arc"),
        }
    }
}

impl FromStr for GapStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chord" => Ok(GapStyle::Chord),
            "arc" => Ok(GapStyle::Arc),
            other => Err(format!("unknown gap style '{}' (expected chord or arc)", other)),
        }
    }
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nonzero" => Ok(FillRule::NonZero),
            "evenodd" => Ok(FillRule::EvenOdd),
            other => Err(format!(
                "unknown fill rule '{}' (expected nonzero or evenodd)",
                other
            )),
        }
    }
}

/// Parameters of a cog icon
///
/// | field       | default          |
/// |-------------|------------------|
/// | `size`      | `32.0`           |
/// | `d1`        | `1.0`            |
/// | `d2`        | `0.6875`         |
/// | `d3`        | `0.375`          |
/// | `teeth`     | `8`              |
/// | `splay`     | `4.0` degrees    |
/// | `fill`      | `"currentcolor"` |
/// | `gaps`      | [`GapStyle::Chord`] |
/// | `fill_rule` | [`FillRule::NonZero`] |
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Side of the square bounding box
    pub size: f64,

    /// Outer circle diameter as a ratio of `size` (tooth tips)
    pub d1: f64,

    /// Middle circle diameter ratio (tooth roots)
    pub d2: f64,

    /// Inner circle diameter ratio (hole); `0` disables the hole
    pub d3: f64,

    pub teeth: u32,

    /// Degrees taken off the tooth angle at the root, tapering the flanks
    pub splay: f64,

    /// Color token passed through to the rendered markup
    pub fill: String,

    pub gaps: GapStyle,

    pub fill_rule: FillRule,
}

/// TOML structure for deserializing icon configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlIcon {
    size: Option<f64>,
    d1: Option<f64>,
    d2: Option<f64>,
    d3: Option<f64>,
    teeth: Option<u32>,
    splay: Option<f64>,
    fill: Option<String>,
    gaps: Option<GapStyle>,
    fill_rule: Option<FillRule>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 32.0,
            d1: 1.0,
            d2: 0.6875,
            d3: 0.375,
            teeth: 8,
            splay: 4.0,
            fill: "currentcolor".to_string(),
            gaps: GapStyle::Chord,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string; omitted fields keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigLoadError> {
        let parsed: TomlIcon = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(IconConfig {
            size: parsed.size.unwrap_or(defaults.size),
            d1: parsed.d1.unwrap_or(defaults.d1),
            d2: parsed.d2.unwrap_or(defaults.d2),
            d3: parsed.d3.unwrap_or(defaults.d3),
            teeth: parsed.teeth.unwrap_or(defaults.teeth),
            splay: parsed.splay.unwrap_or(defaults.splay),
            fill: parsed.fill.unwrap_or(defaults.fill),
            gaps: parsed.gaps.unwrap_or(defaults.gaps),
            fill_rule: parsed.fill_rule.unwrap_or(defaults.fill_rule),
        })
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the outer, middle and inner diameter ratios
    pub fn with_diameters(mut self, d1: f64, d2: f64, d3: f64) -> Self {
        self.d1 = d1;
        self.d2 = d2;
        self.d3 = d3;
        self
    }

    pub fn with_teeth(mut self, teeth: u32) -> Self {
        self.teeth = teeth;
        self
    }

    pub fn with_splay(mut self, splay: f64) -> Self {
        self.splay = splay;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_gaps(mut self, gaps: GapStyle) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Angular segment allotted to each tooth, in degrees
    pub fn angle_per_tooth(&self) -> f64 {
        360.0 / self.teeth as f64
    }

    /// Half the angular width of a tooth's flat top, in degrees
    ///
    /// A quarter of the segment, so tooth and gap each take about half.
    pub fn tooth_angle(&self) -> f64 {
        self.angle_per_tooth() / 4.0
    }

    /// Check every geometric invariant, reporting the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            (ConfigField::Size, self.size),
            (ConfigField::D1, self.d1),
            (ConfigField::D2, self.d2),
            (ConfigField::D3, self.d3),
            (ConfigField::Splay, self.splay),
        ];
        if let Some((field, _)) = numeric.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::non_finite(*field));
        }

        if self.size <= 0.0 {
            return Err(ConfigError::NonPositiveSize { size: self.size });
        }

        for (field, value) in [(ConfigField::D1, self.d1), (ConfigField::D2, self.d2)] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::ratio_out_of_range(field, value));
            }
        }
        if self.d3 < 0.0 || self.d3 > 1.0 {
            return Err(ConfigError::ratio_out_of_range(ConfigField::D3, self.d3));
        }

        if self.d1 <= self.d2 {
            return Err(ConfigError::OuterNotLargerThanMiddle {
                d1: self.d1,
                d2: self.d2,
            });
        }
        if self.d2 < self.d3 {
            return Err(ConfigError::MiddleSmallerThanInner {
                d2: self.d2,
                d3: self.d3,
            });
        }

        if self.teeth < 3 {
            return Err(ConfigError::TooFewTeeth { teeth: self.teeth });
        }

        let tooth_angle = self.tooth_angle();
        if self.splay < 0.0 || self.splay >= tooth_angle {
            return Err(ConfigError::splay_out_of_range(self.splay, tooth_angle));
        }

        Ok(())
    }
}
