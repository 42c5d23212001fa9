//! Angle and radius to Cartesian conversion
//!
//! Coordinates follow the screen convention: the origin is the top-left
//! corner of the icon and y grows downward. Angles are in degrees, 0° points
//! right and positive angles turn clockwise on screen.

/// Top-left corner of the icon's local coordinate space
pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

/// Rotation applied to every tooth so that tooth 0 is centered at the top
pub const ROTATION_OFFSET_DEG: f64 = -90.0;

/// Magnitude below which values are treated as exactly zero
pub const SNAP_EPSILON: f64 = 1e-10;

/// A 2D point in the icon's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Wrap an angle into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Point at `angle_deg` on the circle of `radius` around `center`
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = to_radians(angle_deg);
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

/// Collapse values smaller than `epsilon` in magnitude to zero
///
/// Path data has no exponent syntax, so residues like `3.06e-15` from
/// `cos(90°)` must never reach the formatter.
pub fn snap_small(value: f64, epsilon: f64) -> f64 {
    if value.abs() < epsilon {
        0.0
    } else {
        value
    }
}
