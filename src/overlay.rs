use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use imageproc::drawing::draw_text_mut;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::canvas::{BLACK, Canvas};
use crate::error::{Error, Result};

static FONT_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSansMono.ttf");

/// Font size in points
pub const FONT_SIZE: f32 = 32.0;
pub const FONT_DPI: f32 = 72.0;

/// Caption used when no title words were given
pub const NO_TITLE: &str = "[no title]";

/// Pen positions in 26.6 fixed point (1/64 px)
const PEN_X: i32 = 1000;
const TIMESTAMP_BASELINE: i32 = 29000;
const CAPTION_BASELINE: i32 = 31000;

fn fixed_to_px(value: i32) -> f32 {
    value as f32 / 64.0
}

/// The two lines drawn into the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub timestamp: String,
    pub caption: String,
}

impl TextOverlay {
    pub fn new(generated_at: OffsetDateTime, title: &[String]) -> Result<Self> {
        Ok(Self {
            timestamp: timestamp_label(generated_at)?,
            caption: caption_from_words(title),
        })
    }
}

/// Join title words with single spaces, or fall back to the placeholder
pub fn caption_from_words(words: &[String]) -> String {
    if words.is_empty() {
        NO_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

/// "Generated: YYYY-MM-DD HH:MM:SS"
pub fn timestamp_label(at: OffsetDateTime) -> Result<String> {
    let formatted =
        at.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))?;
    Ok(format!("Generated: {}", formatted))
}

/// Current local time, or UTC if the local offset can't be determined
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        log::warn!("Local UTC offset unavailable ({}), using UTC", e);
        OffsetDateTime::now_utc()
    })
}

/// Parse the embedded monospace face
pub fn load_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_DATA).map_err(|e| Error::Font(e.to_string()))
}

/// Scale that renders `size` points at `dpi` as an em square.
///
/// ab_glyph scales by ascent-to-descent height, so the em size is
/// converted through the font's own metrics.
pub fn em_scale(font: &impl Font, size: f32, dpi: f32) -> PxScale {
    let px_per_em = size * dpi / 72.0;
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(px_per_em * font.height_unscaled() / units_per_em),
        None => PxScale::from(px_per_em),
    }
}

/// Draw `text` with its baseline at `baseline_y`, starting at `x`
fn draw_line(
    canvas: &mut Canvas,
    font: &FontRef,
    scale: PxScale,
    x: f32,
    baseline_y: f32,
    text: &str,
) {
    // draw_text_mut positions by the top of the line box
    let ascent = font.as_scaled(scale).ascent();
    let top = (baseline_y - ascent).round() as i32;
    draw_text_mut(canvas, BLACK, x.round() as i32, top, scale, font, text);
}

/// Render the timestamp and caption lines onto the canvas
pub fn overlay_text(canvas: &mut Canvas, overlay: &TextOverlay) -> Result<()> {
    let font = load_font()?;
    let scale = em_scale(&font, FONT_SIZE, FONT_DPI);
    let x = fixed_to_px(PEN_X);

    draw_line(canvas, &font, scale, x, fixed_to_px(TIMESTAMP_BASELINE), &overlay.timestamp);
    draw_line(canvas, &font, scale, x, fixed_to_px(CAPTION_BASELINE), &overlay.caption);

    Ok(())
}
