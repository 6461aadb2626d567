use crate::InferError;

pub const DIGIT_CLASSES: usize = 10;

/// Class probabilities indexed by digit 0-9.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityDistribution {
    probs: [f32; DIGIT_CLASSES],
}

impl ProbabilityDistribution {
    /// Validates shape and values. Entries must be finite and non-negative;
    /// the sum is not enforced since providers only approximate 1.
    pub fn new(values: &[f32]) -> Result<Self, InferError> {
        let probs: [f32; DIGIT_CLASSES] = values.try_into().map_err(|_| {
            InferError::Model(format!(
                "expected {DIGIT_CLASSES} class probabilities, got {}",
                values.len()
            ))
        })?;
        if let Some((digit, p)) = probs
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(InferError::Model(format!(
                "invalid probability {p} for digit {digit}"
            )));
        }
        Ok(Self { probs })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.probs
    }

    pub fn get(&self, digit: usize) -> Option<f32> {
        self.probs.get(digit).copied()
    }

    /// Most likely digit. Ties resolve to the lowest digit.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (digit, &p) in self.probs.iter().enumerate().skip(1) {
            if p > self.probs[best] {
                best = digit;
            }
        }
        best
    }

    pub fn total(&self) -> f32 {
        self.probs.iter().sum()
    }
}
