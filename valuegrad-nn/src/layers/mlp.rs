use crate::error::NnError;
use crate::init::Init;
use crate::layers::activation::Activation;
use crate::layers::layer::Layer;
use crate::module::{prefixed, Module};
use rand::Rng;
use valuegrad_core::{Graph, Value};

/// A stack of tanh layers of sizes `[nin] + nouts`.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// # Errors
    /// `InvalidArchitecture` if `nin` is zero, `nouts` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nouts.is_empty() {
            return Err(NnError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .map(|pair| {
                Layer::new(graph, pair[0], pair[1], Activation::Tanh, init, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = Mlp { layers };
        log::debug!(
            "Built MLP {:?} with {} parameters",
            sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                prefixed(&format!("layers.{}", i), l.named_parameters())
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
