use image::{Rgba, RgbaImage};
use rand::Rng;

/// The in-memory image every pipeline step draws onto
pub type Canvas = RgbaImage;

pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 500;

pub const STRIPE_COUNT: usize = 5;
pub const STRIPE_WIDTH: u32 = CANVAS_WIDTH / STRIPE_COUNT as u32;

/// First row of the footer band; everything above it is striped
pub const FOOTER_TOP: u32 = 420;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Stripe colors, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Rgba<u8>; STRIPE_COUNT]);

impl Palette {
    /// Draw each channel of each stripe independently; alpha stays opaque.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            Rgba([
                rng.gen_range(0..=u8::MAX),
                rng.gen_range(0..=u8::MAX),
                rng.gen_range(0..=u8::MAX),
                255,
            ])
        }))
    }

    pub fn from_colors(colors: [Rgba<u8>; STRIPE_COUNT]) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Rgba<u8>; STRIPE_COUNT] {
        &self.0
    }

    /// Color of the stripe covering column `x`
    pub fn color_at(&self, x: u32) -> Rgba<u8> {
        self.0[(x / STRIPE_WIDTH) as usize]
    }
}

/// Allocate a blank opaque-white canvas
pub fn blank_canvas() -> Canvas {
    RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE)
}

/// Paint the stripe region (rows above the footer) from the palette
pub fn paint_stripes(canvas: &mut Canvas, palette: &Palette) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if y < FOOTER_TOP {
            *pixel = palette.color_at(x);
        }
    }
}

/// Paint the footer band white
pub fn paint_footer(canvas: &mut Canvas) {
    for (_, y, pixel) in canvas.enumerate_pixels_mut() {
        if y >= FOOTER_TOP {
            *pixel = WHITE;
        }
    }
}

/// Build the striped canvas with its white footer, without any text
pub fn build_canvas(palette: &Palette) -> Canvas {
    let mut canvas = blank_canvas();
    paint_stripes(&mut canvas, palette);
    paint_footer(&mut canvas);
    canvas
}
