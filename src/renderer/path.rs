//! Path commands and their serialization to SVG path data
//!
//! Converts a [`PathData`] command list into the `d` attribute string.

use crate::geometry::kernel::{snap_small, Point, SNAP_EPSILON};

/// Decimal digits used when no precision is given
pub const DEFAULT_PRECISION: usize = 3;

/// Largest precision honoured; larger requests are clamped to it
pub const MAX_PRECISION: usize = 15;

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        radius: f64,
        end: Point,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close the current sub-path
    Close,
}

impl PathCommand {
    /// Circular arc shorter than a half turn
    pub fn arc(radius: f64, end: Point, sweep: bool) -> Self {
        PathCommand::ArcTo {
            radius,
            end,
            large_arc: false,
            sweep,
        }
    }

    /// Point the pen is at after this command, if it moves the pen
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ArcTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::Close => 'Z',
        }
    }
}

/// An ordered command sequence starting with a `MoveTo`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Append all commands of another path
    pub fn extend(&mut self, other: PathData) {
        self.commands.extend(other.commands);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sub-paths (one per `MoveTo`)
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Last point the pen reaches, ignoring `Close`
    pub fn end_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| c.end_point())
    }

    /// Serialize with [`DEFAULT_PRECISION`]
    pub fn to_svg_d(&self) -> String {
        serialize(self)
    }
}

/// Serialize path data with the default precision
pub fn serialize(path: &PathData) -> String {
    serialize_with_precision(path, DEFAULT_PRECISION)
}

/// Serialize path data to a `d` attribute string
///
/// Every token is separated by a single space, e.g. `M 10 0 L 20 0 Z`.
pub fn serialize_with_precision(path: &PathData, precision: usize) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(path.len() * 3);

    for cmd in &path.commands {
        tokens.push(cmd.letter().to_string());
        match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                tokens.push(format_number(p.x, precision));
                tokens.push(format_number(p.y, precision));
            }
            PathCommand::ArcTo {
                radius,
                end,
                large_arc,
                sweep,
            } => {
                // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                let r = format_number(*radius, precision);
                tokens.push(r.clone());
                tokens.push(r);
                tokens.push("0".to_string());
                tokens.push(flag(*large_arc).to_string());
                tokens.push(flag(*sweep).to_string());
                tokens.push(format_number(end.x, precision));
                tokens.push(format_number(end.y, precision));
            }
            PathCommand::Close => {}
        }
    }

    tokens.join(" ")
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Format a number with at most `precision` decimals and no exponent
///
/// Trailing zeros are trimmed and negative zero is printed as `0`.
/// `precision` is clamped to [`MAX_PRECISION`].
pub fn format_number(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let snapped = snap_small(value, SNAP_EPSILON);
    let scale = 10f64.powi(precision as i32);
    let scaled = snapped * scale;
    // Values this large have no fractional part left to round
    let mut rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        snapped
    };
    if rounded == 0.0 {
        rounded = 0.0;
    }

    let mut s = format!("{:.*}", precision, rounded);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
