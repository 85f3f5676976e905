mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from stripegen for tests
pub use stripegen::canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, FOOTER_TOP, WHITE};
pub use stripegen::{Canvas, OutputFormat, Palette, TextOverlay};
