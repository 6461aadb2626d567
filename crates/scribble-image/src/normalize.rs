use crate::features::{FEATURE_SIDE, FeatureVector};
use crate::{ImageError, RasterSurface};
use crates_image::imageops::{self, FilterType};

/// Downsample a surface to 28x28 and flatten it into classifier input.
///
/// The surface is resampled with a triangle (bilinear) filter without any
/// aspect correction; uploads are already composed onto the square canvas.
/// Each output pixel becomes `(R + G + B) / 3 / 255`. Alpha is ignored, so
/// transparent pixels read as black.
///
/// # Errors
///
/// Returns `ImageError::InvalidSurface` if the surface has a zero dimension
/// or its pixel buffer cannot be read.
pub fn normalize(surface: &RasterSurface) -> Result<FeatureVector, ImageError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidSurface(format!(
            "surface dimensions must be non-zero, got {width}x{height}"
        )));
    }

    let source = surface.to_rgba_image()?;
    let side = FEATURE_SIDE as u32;
    let small = imageops::resize(&source, side, side, FilterType::Triangle);

    let values = small
        .pixels()
        .map(|pixel| {
            let [r, g, b, _] = pixel.0;
            let gray = (r as f64 + g as f64 + b as f64) / 3.0;
            gray / 255.0
        })
        .collect();

    FeatureVector::new(values)
}
