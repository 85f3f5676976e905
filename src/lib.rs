pub mod canvas;
pub mod config;
pub mod error;
pub mod output;
pub mod overlay;
pub mod pipeline;

pub use canvas::{Canvas, Palette, build_canvas};
pub use config::{GeneratorConfig, OutputFormat};
pub use error::{Error, Result};
pub use output::{normalize_filename, write_image};
pub use overlay::{TextOverlay, caption_from_words, overlay_text};
pub use pipeline::{
    Pipeline, PipelineStep, build_standard_pipeline, generate_image,
    render, run_with_config,
};
