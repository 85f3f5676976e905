use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::canvas::{self, Canvas, Palette};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::output;
use crate::overlay::{self, TextOverlay};

/// Trait that all canvas steps must implement
pub trait PipelineStep: Send + Sync {
    /// Mutate the canvas in place
    fn process(&self, canvas: &mut Canvas) -> Result<()>;

    /// Human-readable name for this step (used in debug logging)
    fn name(&self) -> &str;
}

/// Fill the stripe region from a palette
pub struct StripeStep {
    pub palette: Palette,
}

impl PipelineStep for StripeStep {
    fn process(&self, canvas: &mut Canvas) -> Result<()> {
        canvas::paint_stripes(canvas, &self.palette);
        Ok(())
    }

    fn name(&self) -> &str {
        "Stripes"
    }
}

/// Fill the footer band white
pub struct FooterStep;

impl PipelineStep for FooterStep {
    fn process(&self, canvas: &mut Canvas) -> Result<()> {
        canvas::paint_footer(canvas);
        Ok(())
    }

    fn name(&self) -> &str {
        "Footer"
    }
}

/// Draw the timestamp and caption lines
pub struct TextOverlayStep {
    pub overlay: TextOverlay,
}

impl PipelineStep for TextOverlayStep {
    fn process(&self, canvas: &mut Canvas) -> Result<()> {
        log::debug!("  timestamp: {:?}", self.overlay.timestamp);
        log::debug!("  caption: {:?}", self.overlay.caption);
        overlay::overlay_text(canvas, &self.overlay)
    }

    fn name(&self) -> &str {
        "Text Overlay"
    }
}

/// Composable canvas pipeline
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step, in order, on an existing canvas
    pub fn run_on(&self, canvas: &mut Canvas) -> Result<()> {
        for (idx, step) in self.steps.iter().enumerate() {
            log::debug!("Running step {}: {}", idx + 1, step.name());
            step.process(canvas)?;
        }
        Ok(())
    }

    /// Run the pipeline on a freshly allocated canvas
    pub fn run(&self) -> Result<Canvas> {
        let mut canvas = canvas::blank_canvas();
        self.run_on(&mut canvas)?;
        Ok(canvas)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the standard pipeline: stripes, footer, then text
pub fn build_standard_pipeline(palette: Palette, overlay: TextOverlay) -> Pipeline {
    Pipeline::new()
        .add_step(Arc::new(StripeStep { palette }))
        .add_step(Arc::new(FooterStep))
        .add_step(Arc::new(TextOverlayStep { overlay }))
}

/// Generate a finished image: random stripes, white footer and text overlay
pub fn generate_image<R: Rng + ?Sized>(
    title: &[String],
    rng: &mut R,
    generated_at: OffsetDateTime,
) -> Result<Canvas> {
    let palette = Palette::random(rng);
    let overlay = TextOverlay::new(generated_at, title)?;
    build_standard_pipeline(palette, overlay).run()
}

/// Palette RNG for a run: seeded when requested, otherwise from OS entropy
pub fn palette_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Render the image described by `config` without writing it
pub fn render(config: &GeneratorConfig) -> Result<Canvas> {
    let mut rng = palette_rng(config.seed);
    let palette = Palette::random(&mut rng);
    let overlay = TextOverlay::new(overlay::now(), &config.title)?;
    log::debug!("Palette: {:?}", palette.colors());

    build_standard_pipeline(palette, overlay).run()
}

/// Render an image per `config` and write it to `config.output`.
/// Returns the path written.
pub fn run_with_config(config: &GeneratorConfig) -> Result<PathBuf> {
    let canvas = render(config)?;
    output::write_image(&canvas, &config.output, config.format)?;
    Ok(config.output.clone())
}
