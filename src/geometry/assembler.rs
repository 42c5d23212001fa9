//! Orders tooth keypoints and the hole into path commands

use crate::config::{GapStyle, IconConfig};
use crate::renderer::path::{PathCommand, PathData};

use super::kernel::Point;
use super::teeth::{Radii, ToothKeypoints};

/// Outline followed by the hole sub-path when `d3 > 0`
pub fn assemble(teeth: &[ToothKeypoints], config: &IconConfig) -> PathData {
    let mut path = assemble_outline(teeth, config);
    if let Some(hole) = assemble_hole(config) {
        path.extend(hole);
    }
    path
}

/// Closed outline of the toothed body
///
/// Starts on tooth 0's outer-leading point and walks clockwise: flat top,
/// trailing flank, gap along the middle circle, then the next tooth's
/// leading flank. The last gap leads back to tooth 0 so the final point
/// equals the start point.
pub fn assemble_outline(teeth: &[ToothKeypoints], config: &IconConfig) -> PathData {
    let mut path = PathData::new();
    let Some(first) = teeth.first() else {
        return path;
    };
    let middle = Radii::for_config(config).middle;

    path.push(PathCommand::MoveTo(first.outer_leading));
    for (i, tooth) in teeth.iter().enumerate() {
        let next = &teeth[(i + 1) % teeth.len()];

        path.push(PathCommand::LineTo(tooth.outer_trailing));
        path.push(PathCommand::LineTo(tooth.inner_trailing));
        path.push(gap(config.gaps, middle, next.inner_leading));
        path.push(PathCommand::LineTo(next.outer_leading));
    }
    path.push(PathCommand::Close);

    path
}

fn gap(style: GapStyle, middle: f64, to: Point) -> PathCommand {
    match style {
        GapStyle::Chord => PathCommand::LineTo(to),
        // Gaps span less than a half turn, so the short clockwise arc is right
        GapStyle::Arc => PathCommand::arc(middle, to, true),
    }
}

/// Hole as two half circles, wound counter-clockwise
///
/// Winding opposite to the outline cuts the hole under both fill rules.
pub fn assemble_hole(config: &IconConfig) -> Option<PathData> {
    let radii = Radii::for_config(config);
    if radii.inner <= 0.0 {
        return None;
    }

    let c = radii.center;
    let top = Point::new(c.x, c.y - radii.inner);
    let bottom = Point::new(c.x, c.y + radii.inner);

    let mut path = PathData::new();
    path.push(PathCommand::MoveTo(top));
    path.push(PathCommand::arc(radii.inner, bottom, false));
    path.push(PathCommand::arc(radii.inner, top, false));
    path.push(PathCommand::Close);
    Some(path)
}

/// Closed polygon through the tip center of every tooth
///
/// Previews tooth placement before any tooth shape is applied.
pub fn assemble_polygon(teeth: &[ToothKeypoints]) -> PathData {
    let mut path = PathData::new();
    let mut centers = teeth.iter().map(|t| t.center);
    let Some(first) = centers.next() else {
        return path;
    };

    path.push(PathCommand::MoveTo(first));
    path.extend(PathData {
        commands: centers.map(PathCommand::LineTo).collect(),
    });
    path.push(PathCommand::Close);
    path
}
