//! Geometric properties of generated cog outlines
//!
//! These tests only look at the serialized path data, the way a consumer
//! embedding it in a document would.

mod common;

use cog_icon::geometry::ToothAngles;
use cog_icon::{generate, ConfigError, ConfigField, GapStyle, IconConfig};

use common::{flat_top_count, is_plain_path_data, pen_positions};

fn scenario() -> IconConfig {
    IconConfig::new()
        .with_size(100.0)
        .with_diameters(1.0, 0.7, 0.3)
        .with_teeth(8)
        .with_splay(4.0)
        .with_fill("currentcolor")
}

fn sample_configs() -> Vec<IconConfig> {
    let mut configs = Vec::new();
    for size in [1.0, 16.0, 24.0, 100.0, 1000.0] {
        for teeth in [3, 5, 8, 12, 24, 60] {
            for gaps in [GapStyle::Chord, GapStyle::Arc] {
                let base = IconConfig::new()
                    .with_size(size)
                    .with_teeth(teeth)
                    .with_gaps(gaps);
                let ta = base.tooth_angle();
                for splay in [0.0, ta * 0.5, ta * 0.99] {
                    configs.push(base.clone().with_splay(splay));
                }
            }
        }
    }
    configs
}

#[test]
fn test_generate_is_deterministic() {
    for config in sample_configs() {
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_outline_is_closed() {
    for config in sample_configs() {
        let paths = generate(&config).unwrap();
        assert!(paths.outline.ends_with(" Z"));

        let positions = pen_positions(&paths.outline);
        let (first_letter, x0, y0) = positions[0];
        let (_, xn, yn) = *positions.last().unwrap();
        assert_eq!(first_letter, 'M');
        assert_eq!((x0, y0), (xn, yn), "outline not closed for {:?}", config);
    }
}

#[test]
fn test_no_scientific_notation() {
    let mut configs = sample_configs();
    configs.push(IconConfig::new().with_size(1e-3));
    configs.push(IconConfig::new().with_size(1e9));

    for config in configs {
        let d = generate(&config).unwrap().combined();
        assert!(is_plain_path_data(&d), "{d} for {:?}", config);
    }
}

#[test]
fn test_sizes_near_f64_max_stay_plain() {
    for size in [1e300, 1e306, 1e307] {
        let config = IconConfig::new().with_size(size);
        let d = generate(&config).unwrap().combined();
        assert!(!d.contains("inf") && !d.contains("NaN"));
        assert!(is_plain_path_data(&d), "{:?}", config);
    }
}

#[test]
fn test_one_flat_top_per_tooth() {
    for config in sample_configs().into_iter().filter(|c| c.size >= 16.0) {
        let paths = generate(&config).unwrap();
        assert_eq!(
            flat_top_count(&paths.outline, &config),
            config.teeth as usize,
            "{:?}",
            config
        );
    }
}

#[test]
fn test_splay_monotonically_narrows_root() {
    let base = scenario();
    let ta = base.tooth_angle();
    let mut previous = f64::INFINITY;
    let mut splay = 0.0;
    while splay < ta {
        let config = base.clone().with_splay(splay);
        assert!(generate(&config).is_ok());
        let tw = ToothAngles::for_config(&config).tooth_width;
        assert!(tw < previous);
        assert!(tw > 0.0);
        previous = tw;
        splay += 0.5;
    }

    let err = generate(&base.clone().with_splay(ta)).unwrap_err();
    assert!(matches!(err, ConfigError::SplayOutOfRange { .. }));
    assert_eq!(err.field(), ConfigField::Splay);
}

#[test]
fn test_rejects_two_teeth() {
    let err = generate(&scenario().with_teeth(2)).unwrap_err();
    assert_eq!(err, ConfigError::TooFewTeeth { teeth: 2 });
}

#[test]
fn test_rejects_outer_smaller_than_middle() {
    let err = generate(&scenario().with_diameters(0.3, 0.5, 0.2)).unwrap_err();
    assert!(matches!(err, ConfigError::OuterNotLargerThanMiddle { .. }));
}

#[test]
fn test_rejects_non_positive_size() {
    for size in [0.0, -10.0] {
        let err = generate(&scenario().with_size(size)).unwrap_err();
        assert_eq!(err.field(), ConfigField::Size);
    }
}

#[test]
fn test_concrete_scenario() {
    let config = scenario();
    let paths = generate(&config).unwrap();

    assert!(paths.outline.starts_with('M'));

    // First point is the leading corner of the top tooth
    let (_, x, y) = pen_positions(&paths.outline)[0];
    let half_top = 50.0 * (config.tooth_angle().to_radians()).sin();
    assert!((x - (50.0 - half_top)).abs() < 1e-3, "x = {x}");
    assert!(y < 1.0, "y = {y}");

    assert_eq!(flat_top_count(&paths.outline, &config), 8);
    assert_eq!(
        paths.hole.as_deref(),
        Some("M 50 35 A 15 15 0 0 0 50 65 A 15 15 0 0 0 50 35 Z")
    );
}

#[test]
fn test_arc_gaps_use_middle_radius() {
    let config = scenario().with_gaps(GapStyle::Arc);
    let paths = generate(&config).unwrap();
    assert_eq!(paths.outline.matches("A 35 35 0 0 1 ").count(), 8);
    assert!(!paths.outline.contains("A 35 35 0 1"));
}

#[test]
fn test_hole_may_touch_middle_circle() {
    let config = scenario().with_diameters(1.0, 0.5, 0.5);
    let paths = generate(&config).unwrap();
    assert_eq!(
        paths.hole.as_deref(),
        Some("M 50 25 A 25 25 0 0 0 50 75 A 25 25 0 0 0 50 25 Z")
    );
    assert_eq!(flat_top_count(&paths.outline, &config), 8);
}

#[test]
fn test_outer_circle_inside_icon() {
    let config = scenario().with_diameters(0.8, 0.5, 0.2);
    let paths = generate(&config).unwrap();

    // Every point stays within the outer circle of radius 40
    for (_, x, y) in pen_positions(&paths.outline) {
        assert!((x - 50.0).hypot(y - 50.0) <= 40.0 + 1e-3, "({x}, {y})");
    }
    assert_eq!(flat_top_count(&paths.outline, &config), 8);
    assert_eq!(
        paths.hole.as_deref(),
        Some("M 50 40 A 10 10 0 0 0 50 60 A 10 10 0 0 0 50 40 Z")
    );
}
