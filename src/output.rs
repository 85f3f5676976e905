use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::canvas::Canvas;
use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// JPEG quality used for every JPEG written
pub const JPEG_QUALITY: u8 = 100;

/// Give `output` the extension matching `file_type`.
///
/// For PNG the first ".jpg" anywhere in the path becomes ".png" before the
/// suffix check. For JPEG, ".jpg" and ".jpeg" are both accepted as-is.
pub fn normalize_filename(file_type: &str, output: &str) -> String {
    match OutputFormat::from_type(file_type) {
        OutputFormat::Png => {
            let replaced = output.replacen(".jpg", ".png", 1);
            if replaced.ends_with(".png") {
                replaced
            } else {
                format!("{}.png", replaced)
            }
        }
        OutputFormat::Jpeg => {
            if output.ends_with(".jpg") || output.ends_with(".jpeg") {
                output.to_string()
            } else {
                format!("{}.jpg", output)
            }
        }
    }
}

/// Encode the canvas into `writer` using the given format
pub fn encode<W: Write>(canvas: &Canvas, writer: W, format: OutputFormat) -> Result<()> {
    let (width, height) = canvas.dimensions();
    match format {
        OutputFormat::Png => {
            PngEncoder::new(writer).write_image(
                canvas.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        OutputFormat::Jpeg => {
            // JPEG carries no alpha; the canvas is always opaque
            let rgb: RgbImage = canvas.convert();
            JpegEncoder::new_with_quality(writer, JPEG_QUALITY)
                .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        }
    }
    Ok(())
}

/// Write the canvas to `path`, truncating any existing file
pub fn write_image(canvas: &Canvas, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    encode(canvas, &mut writer, format).map_err(|e| match e {
        Error::Encode(image::ImageError::IoError(source)) => Error::io(path, source),
        other => other,
    })?;

    writer.flush().map_err(|e| Error::io(path, e))?;
    log::debug!("Wrote {} image to {}", format.extension(), path.display());
    Ok(())
}
