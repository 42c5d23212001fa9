//! Tooth keypoints
//!
//! Each tooth is described by four points: two on the outer circle bounding
//! its flat top, and two on the middle circle where its flanks meet the body.

use crate::config::IconConfig;

use super::kernel::{normalize_degrees, point_on_circle, Point, ROTATION_OFFSET_DEG};

/// Radii of the three concentric circles and their shared center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radii {
    pub center: Point,
    pub outer: f64,
    pub middle: f64,
    pub inner: f64,
}

impl Radii {
    pub fn for_config(config: &IconConfig) -> Self {
        let c = config.size / 2.0;
        Self {
            center: Point::new(c, c),
            outer: config.size * config.d1 / 2.0,
            middle: config.size * config.d2 / 2.0,
            inner: config.size * config.d3 / 2.0,
        }
    }
}

/// Half-angular widths of a tooth at its tip and at its root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothAngles {
    pub per_tooth: f64,
    /// `ta`: half-width of the flat top
    pub tooth_angle: f64,
    /// `tw`: half-width where the flanks meet the middle circle
    pub tooth_width: f64,
}

impl ToothAngles {
    /// `tw = ta - splay`; with zero splay the flanks are radial
    pub fn for_config(config: &IconConfig) -> Self {
        let tooth_angle = config.tooth_angle();
        Self {
            per_tooth: config.angle_per_tooth(),
            tooth_angle,
            tooth_width: tooth_angle - config.splay,
        }
    }

    /// True when the root is narrower than the tip
    pub fn is_splayed(&self) -> bool {
        self.tooth_width < self.tooth_angle
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothKeypoints {
    pub index: u32,
    /// Angle of the tooth's axis, including the rotation offset
    pub base_angle: f64,
    pub outer_leading: Point,
    pub outer_trailing: Point,
    pub inner_leading: Point,
    pub inner_trailing: Point,
    /// Point on the outer circle on the tooth's axis
    pub center: Point,
}

impl ToothKeypoints {
    /// Tooth axis direction in `[0, 360)`
    pub fn heading(&self) -> f64 {
        normalize_degrees(self.base_angle)
    }
}

/// Compute keypoints for every tooth, in index order
///
/// The configuration must already be validated.
pub fn build_teeth(config: &IconConfig) -> Vec<ToothKeypoints> {
    let radii = Radii::for_config(config);
    let angles = ToothAngles::for_config(config);
    let ta = angles.tooth_angle;
    let tw = angles.tooth_width;

    (0..config.teeth)
        .map(|i| {
            let base_angle = i as f64 * angles.per_tooth + ROTATION_OFFSET_DEG;
            ToothKeypoints {
                index: i,
                base_angle,
                outer_leading: point_on_circle(radii.center, radii.outer, base_angle - ta),
                outer_trailing: point_on_circle(radii.center, radii.outer, base_angle + ta),
                inner_leading: point_on_circle(radii.center, radii.middle, base_angle - tw),
                inner_trailing: point_on_circle(radii.center, radii.middle, base_angle + tw),
                center: point_on_circle(radii.center, radii.outer, base_angle),
            }
        })
        .collect()
}
