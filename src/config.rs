use std::path::PathBuf;

use crate::output::normalize_filename;

/// Encoding used for the written image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Parse a `--type` value. Only "png" (any case) selects PNG; every other
    /// value falls back to JPEG.
    pub fn from_type(file_type: &str) -> Self {
        if file_type.eq_ignore_ascii_case("png") {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Everything a single generator run needs, resolved up front
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub format: OutputFormat,

    /// Output path after extension normalization
    pub output: PathBuf,

    /// Caption words, joined with spaces when drawn
    pub title: Vec<String>,

    /// Fixed palette seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Build a config from raw CLI-style inputs, normalizing the output path
    /// to match the requested type.
    pub fn new(file_type: &str, output: &str, title: Vec<String>) -> Self {
        Self {
            format: OutputFormat::from_type(file_type),
            output: PathBuf::from(normalize_filename(file_type, output)),
            title,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new("jpg", "out.jpg", Vec::new())
    }
}
