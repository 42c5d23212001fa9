//! Cog geometry
//!
//! Data flows one way: the kernel converts angles to points, `teeth` derives
//! per-tooth keypoints, and `assembler` orders them into path commands.

pub mod assembler;
pub mod kernel;
pub mod teeth;

pub use assembler::{assemble, assemble_hole, assemble_outline, assemble_polygon};
pub use kernel::{normalize_degrees, point_on_circle, snap_small, to_radians, Point};
pub use teeth::{build_teeth, Radii, ToothAngles, ToothKeypoints};
