//! Raster handling for the scribble digit pad.
//!
//! Surfaces are RGBA8 tensors in HWC layout (`[height, width, 4]`). This crate
//! decodes uploads, composes them onto the square canvas and turns a canvas
//! into the 784-value feature vector the classifier consumes.

pub mod error;
pub mod features;
pub mod normalize;
pub mod surface;

pub use error::ImageError;
pub use features::{FEATURE_LEN, FEATURE_SIDE, FeatureVector};
pub use normalize::normalize;
pub use surface::RasterSurface;

use crates_image::imageops::{self, FilterType};
use crates_image::RgbaImage;
use surface::dimension;

fn decode_image_inner(data: &[u8]) -> Result<RasterSurface, ImageError> {
    let img = crates_image::load_from_memory(data)?;
    RasterSurface::from_rgba_image(img.to_rgba8())
}

/// Decodes uploaded image bytes into an RGBA surface.
///
/// The format is auto-detected by the `image` crate; every pixel layout is
/// converted to RGBA8. The CPU-bound decoding work runs on tokio's blocking
/// thread pool.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub async fn decode_image(data: &[u8]) -> Result<RasterSurface, ImageError> {
    let owned = data.to_vec();
    tokio::task::spawn_blocking(move || decode_image_inner(&owned))
        .await
        .map_err(|e| ImageError::Decode(e.to_string()))?
}

/// Draws `image` onto a cleared `canvas_size` square canvas.
///
/// The image is scaled by `min(canvas / width, canvas / height)` so it never
/// stretches, then centered. Uncovered canvas stays transparent black.
///
/// # Errors
///
/// Returns `ImageError::InvalidSurface` if the image or canvas has a zero dimension.
pub fn compose(image: &RasterSurface, canvas_size: usize) -> Result<RasterSurface, ImageError> {
    if image.width() == 0 || image.height() == 0 || canvas_size == 0 {
        return Err(ImageError::InvalidSurface(format!(
            "cannot draw {}x{} image onto {canvas_size}x{canvas_size} canvas",
            image.width(),
            image.height()
        )));
    }

    let canvas_side = dimension(canvas_size)?;
    let scale = (canvas_size as f64 / image.width() as f64)
        .min(canvas_size as f64 / image.height() as f64);
    let scaled_w = ((image.width() as f64 * scale).round() as u32).clamp(1, canvas_side);
    let scaled_h = ((image.height() as f64 * scale).round() as u32).clamp(1, canvas_side);

    let source = image.to_rgba_image()?;
    let scaled = imageops::resize(&source, scaled_w, scaled_h, FilterType::Triangle);

    let mut canvas = RgbaImage::new(canvas_side, canvas_side);
    let x = (canvas_side - scaled_w) / 2;
    let y = (canvas_side - scaled_h) / 2;
    imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);

    RasterSurface::from_rgba_image(canvas)
}
