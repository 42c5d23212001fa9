//! Property-based checks of generated outlines over random configurations.

mod common;

use proptest::prelude::*;

use cog_icon::{generate, generate_with_precision, GapStyle, IconConfig};

use common::{flat_top_count, is_plain_path_data, pen_positions};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Diameter ratios with `d1 > d2 >= d3 >= 0`, including the edge cases
/// `d3 == 0` (no hole) and `d3 == d2` (hole touching the middle circle).
fn arb_diameters() -> impl Strategy<Value = (f64, f64, f64)> {
    (
        0.2f64..=1.0,
        0.05f64..0.95,
        prop_oneof![Just(0.0), Just(1.0), 0.0f64..1.0],
    )
        .prop_map(|(d1, middle, inner)| {
            let d2 = d1 * middle;
            (d1, d2, d2 * inner)
        })
}

fn arb_gaps() -> impl Strategy<Value = GapStyle> {
    prop_oneof![Just(GapStyle::Chord), Just(GapStyle::Arc)]
}

/// Valid configuration; splay is drawn as a fraction of the tooth angle.
fn arb_config() -> impl Strategy<Value = IconConfig> {
    (
        1.0f64..1000.0,
        arb_diameters(),
        3u32..64,
        0.0f64..0.99,
        arb_gaps(),
    )
        .prop_map(|(size, (d1, d2, d3), teeth, splay, gaps)| {
            let base = IconConfig::new()
                .with_size(size)
                .with_diameters(d1, d2, d3)
                .with_teeth(teeth)
                .with_gaps(gaps);
            let ta = base.tooth_angle();
            base.with_splay(ta * splay)
        })
}

// ---------------------------------------------------------------------------
// 1. Generation is deterministic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn generation_is_deterministic(config in arb_config()) {
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// 2. Outline returns to its starting point and ends with Z
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn outline_is_closed(config in arb_config()) {
        let paths = generate(&config).unwrap();
        prop_assert!(paths.outline.ends_with(" Z"));

        let positions = pen_positions(&paths.outline);
        let (letter, x0, y0) = positions[0];
        let (_, xn, yn) = positions[positions.len() - 1];
        prop_assert_eq!(letter, 'M');
        prop_assert_eq!((x0, y0), (xn, yn));
    }
}

// ---------------------------------------------------------------------------
// 3. Every token is a command or a fixed-point number
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn tokens_are_plain(config in arb_config(), precision in 0usize..20) {
        let d = generate_with_precision(&config, precision).unwrap().combined();
        prop_assert!(is_plain_path_data(&d), "{}", d);
    }

    #[test]
    fn huge_sizes_are_plain(size in 1e290f64..1e307) {
        let d = generate(&IconConfig::new().with_size(size)).unwrap().combined();
        prop_assert!(is_plain_path_data(&d), "{}", d);
    }
}

// ---------------------------------------------------------------------------
// 4. One flat top per tooth
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn one_flat_top_per_tooth(config in arb_config()) {
        let paths = generate(&config).unwrap();
        prop_assert_eq!(flat_top_count(&paths.outline, &config), config.teeth as usize);
    }
}

// ---------------------------------------------------------------------------
// 5. A hole is emitted exactly when d3 is positive
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn hole_present_iff_inner_diameter(config in arb_config()) {
        let paths = generate(&config).unwrap();
        prop_assert_eq!(paths.hole.is_some(), config.d3 > 0.0);
        if let Some(hole) = &paths.hole {
            prop_assert!(hole.starts_with("M "));
            prop_assert!(hole.ends_with(" Z"));
            prop_assert_eq!(hole.matches(" A ").count(), 2);
        }
    }
}
