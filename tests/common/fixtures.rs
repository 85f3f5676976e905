use image::Rgba;
use stripegen::Palette;
use stripegen::pipeline::palette_rng;
use time::{Date, Month, OffsetDateTime};

/// Sample x of each stripe, one per column
pub const STRIPE_SAMPLES: [u32; 5] = [100, 300, 500, 700, 900];

/// A palette with five known, distinct colors
pub fn test_palette() -> Palette {
    Palette::from_colors([
        Rgba([255, 0, 0, 255]),
        Rgba([0, 255, 0, 255]),
        Rgba([0, 0, 255, 255]),
        Rgba([255, 255, 0, 255]),
        Rgba([0, 255, 255, 255]),
    ])
}

pub fn seeded_palette(seed: u64) -> Palette {
    Palette::random(&mut palette_rng(Some(seed)))
}

/// Title words as the CLI would hand them over
pub fn title(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// 2024-03-05 07:08:09 UTC
pub fn fixed_time() -> OffsetDateTime {
    Date::from_calendar_date(2024, Month::March, 5)
        .and_then(|d| d.with_hms(7, 8, 9))
        .expect("valid test timestamp")
        .assume_utc()
}
