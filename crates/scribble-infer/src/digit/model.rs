use super::DigitNetConfig;
use candle_core::{D, Module, Result, Tensor};
use candle_nn::{Linear, VarBuilder, linear};

/// Dense network: linear layers with ReLU between them and softmax on top.
#[derive(Debug, Clone)]
pub(crate) struct DigitNet {
    layers: Vec<Linear>,
}

impl DigitNet {
    pub(crate) fn load(vb: VarBuilder, config: &DigitNetConfig) -> Result<Self> {
        let layers = config
            .layer_dims()
            .into_iter()
            .enumerate()
            .map(|(i, (input, output))| linear(input, output, vb.pp(format!("layers.{i}"))))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { layers })
    }
}

impl Module for DigitNet {
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let last = self.layers.len().saturating_sub(1);
        let mut xs = xs.clone();
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs)?;
            if i < last {
                xs = xs.relu()?;
            }
        }
        candle_nn::ops::softmax(&xs, D::Minus1)
    }
}
