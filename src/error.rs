//! Error types for icon configuration validation

use std::fmt;

use thiserror::Error;

/// Field of [`IconConfig`](crate::IconConfig) that a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Size,
    D1,
    D2,
    D3,
    Teeth,
    Splay,
}

impl ConfigField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Size => "size",
            ConfigField::D1 => "d1",
            ConfigField::D2 => "d2",
            ConfigField::D3 => "d3",
            ConfigField::Teeth => "teeth",
            ConfigField::Splay => "splay",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration that violates a geometric invariant
///
/// Raised before any geometry is built, so no partial path is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NonFinite { field: ConfigField },

    #[error("size must be positive, got {size}")]
    NonPositiveSize { size: f64 },

    /// A diameter ratio outside its allowed interval
    #[error("{field} = {value} is out of range: {}", Self::ratio_invariant(.field))]
    RatioOutOfRange { field: ConfigField, value: f64 },

    /// Teeth cannot rise above the middle circle
    #[error("outer diameter d1 = {d1} must be larger than middle diameter d2 = {d2}")]
    OuterNotLargerThanMiddle { d1: f64, d2: f64 },

    #[error("middle diameter d2 = {d2} must not be smaller than inner diameter d3 = {d3}")]
    MiddleSmallerThanInner { d2: f64, d3: f64 },

    #[error("a cog needs at least 3 teeth, got {teeth}")]
    TooFewTeeth { teeth: u32 },

    /// Splay would collapse or invert the tooth flanks
    #[error("splay = {splay}° must satisfy 0 <= splay < tooth angle ({tooth_angle}°)")]
    SplayOutOfRange { splay: f64, tooth_angle: f64 },
}

impl ConfigError {
    pub fn non_finite(field: ConfigField) -> Self {
        Self::NonFinite { field }
    }

    pub fn ratio_out_of_range(field: ConfigField, value: f64) -> Self {
        Self::RatioOutOfRange { field, value }
    }

    pub fn splay_out_of_range(splay: f64, tooth_angle: f64) -> Self {
        Self::SplayOutOfRange { splay, tooth_angle }
    }

    /// The offending field
    pub fn field(&self) -> ConfigField {
        match self {
            Self::NonFinite { field } | Self::RatioOutOfRange { field, .. } => *field,
            Self::NonPositiveSize { .. } => ConfigField::Size,
            Self::OuterNotLargerThanMiddle { .. } => ConfigField::D1,
            Self::MiddleSmallerThanInner { .. } => ConfigField::D3,
            Self::TooFewTeeth { .. } => ConfigField::Teeth,
            Self::SplayOutOfRange { .. } => ConfigField::Splay,
        }
    }

    /// The violated invariant, in compact notation
    pub fn invariant(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "finite",
            Self::NonPositiveSize { .. } => "size > 0",
            Self::RatioOutOfRange { field, .. } => Self::ratio_invariant(field),
            Self::OuterNotLargerThanMiddle { .. } => "d1 > d2",
            Self::MiddleSmallerThanInner { .. } => "d2 >= d3",
            Self::TooFewTeeth { .. } => "teeth >= 3",
            Self::SplayOutOfRange { .. } => "0 <= splay < tooth angle",
        }
    }

    fn ratio_invariant(field: &ConfigField) -> &'static str {
        match field {
            // d3 = 0 means no hole
            ConfigField::D3 => "0 <= d3 <= 1",
            _ => "0 < d <= 1",
        }
    }
}
