use crate::ImageError;
use scribble_base::Tensor;

/// Side of the square grid the classifier expects.
pub const FEATURE_SIDE: usize = 28;
pub const FEATURE_LEN: usize = FEATURE_SIDE * FEATURE_SIDE;

/// 784 grayscale intensities in [0, 1], row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Tensor<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Result<Self, ImageError> {
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(ImageError::InvalidFeatures(format!(
                "value {v} at index {i} is outside [0, 1]"
            )));
        }
        let values = Tensor::new(vec![FEATURE_LEN], values)?;
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values.data
    }

    /// Always `FEATURE_LEN`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= FEATURE_SIDE || col >= FEATURE_SIDE {
            return None;
        }
        Some(self.values.data[row * FEATURE_SIDE + col])
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.values.data.iter().map(|&v| v as f32).collect()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values.into_data()
    }
}
