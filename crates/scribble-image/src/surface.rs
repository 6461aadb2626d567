use crate::ImageError;
use crates_image::RgbaImage;
use scribble_base::Tensor;

pub const CHANNELS: usize = 4;

/// RGBA8 pixel grid in HWC layout: `[height, width, 4]`.
///
/// Fully transparent black is the cleared state, matching a freshly cleared
/// drawing canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    pixels: Tensor<u8>,
}

impl RasterSurface {
    /// Wrap a raw RGBA buffer. Zero-sized surfaces are allowed here and
    /// rejected by the operations that need pixels.
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, ImageError> {
        let pixels = Tensor::new(vec![height, width, CHANNELS], rgba).map_err(|e| {
            ImageError::InvalidSurface(format!("{width}x{height} RGBA buffer: {e}"))
        })?;
        Ok(Self { pixels })
    }

    pub fn blank(width: usize, height: usize) -> Result<Self, ImageError> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, ImageError> {
        let count = width
            .checked_mul(height)
            .ok_or(ImageError::Tensor(scribble_base::TensorError::ShapeOverflow))?;
        Self::new(width, height, rgba.repeat(count))
    }

    pub fn width(&self) -> usize {
        self.pixels.shape[1]
    }

    pub fn height(&self) -> usize {
        self.pixels.shape[0]
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y * self.width() + x) * CHANNELS;
        let p = &self.pixels.data[i..i + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Returns false if the coordinate is outside the surface.
    pub fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        let i = (y * self.width() + x) * CHANNELS;
        self.pixels.data[i..i + CHANNELS].copy_from_slice(&rgba);
        true
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.data.fill(0);
    }

    pub(crate) fn to_rgba_image(&self) -> Result<RgbaImage, ImageError> {
        let (width, height) = (dimension(self.width())?, dimension(self.height())?);
        RgbaImage::from_raw(width, height, self.pixels.data.clone()).ok_or_else(|| {
            ImageError::InvalidSurface(format!("cannot read {width}x{height} pixel buffer"))
        })
    }

    pub(crate) fn from_rgba_image(image: RgbaImage) -> Result<Self, ImageError> {
        let (width, height) = image.dimensions();
        Self::new(width as usize, height as usize, image.into_raw())
    }
}

pub(crate) fn dimension(value: usize) -> Result<u32, ImageError> {
    u32::try_from(value)
        .map_err(|_| ImageError::InvalidSurface(format!("dimension {value} exceeds u32")))
}
