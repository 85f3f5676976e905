//! Integration tests for the striped canvas and its white footer.

mod common;

use std::collections::HashSet;

use common::*;
use stripegen::build_canvas;
use stripegen::canvas::STRIPE_WIDTH;

#[test]
fn test_canvas_dimensions() {
    let canvas = build_canvas(&test_palette());
    assert_eq!(canvas.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert_eq!(canvas.dimensions(), (1000, 500));
}

#[test]
fn test_stripes_follow_palette() {
    let palette = test_palette();
    let canvas = build_canvas(&palette);

    for (i, color) in palette.colors().iter().enumerate() {
        let left = i as u32 * STRIPE_WIDTH;
        let right = left + STRIPE_WIDTH - 1;
        for y in [0, 210, FOOTER_TOP - 1] {
            assert_eq!(canvas.get_pixel(left, y), color, "stripe {} left edge, row {}", i, y);
            assert_eq!(canvas.get_pixel(right, y), color, "stripe {} right edge, row {}", i, y);
        }
    }
}

#[test]
fn test_stripe_boundaries() {
    let palette = test_palette();
    let colors = palette.colors();

    assert_eq!(palette.color_at(0), colors[0]);
    assert_eq!(palette.color_at(199), colors[0]);
    assert_eq!(palette.color_at(200), colors[1]);
    assert_eq!(palette.color_at(799), colors[3]);
    assert_eq!(palette.color_at(800), colors[4]);
    assert_eq!(palette.color_at(999), colors[4]);
}

#[test]
fn test_footer_is_white() {
    let canvas = build_canvas(&seeded_palette(1));

    for y in FOOTER_TOP..CANVAS_HEIGHT {
        for x in 0..CANVAS_WIDTH {
            assert_eq!(*canvas.get_pixel(x, y), WHITE, "footer pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_palette_is_opaque() {
    for seed in 0..20 {
        let palette = seeded_palette(seed);
        assert!(palette.colors().iter().all(|c| c[3] == 255), "seed {}", seed);
    }
}

#[test]
fn test_seeded_palette_is_reproducible() {
    assert_eq!(seeded_palette(42), seeded_palette(42));
    assert_ne!(seeded_palette(42), seeded_palette(43));
}

#[test]
fn test_stripe_color_variation() {
    // A collision across all five stripes is possible in principle, so
    // require variation in every run but tolerate nothing less than 2 colors.
    for seed in 0..10 {
        let canvas = build_canvas(&seeded_palette(seed));
        let colors: HashSet<_> = STRIPE_SAMPLES
            .iter()
            .map(|&x| *canvas.get_pixel(x, 200))
            .collect();
        assert!(colors.len() >= 2, "expected color variation in stripes (seed {})", seed);
    }
}
