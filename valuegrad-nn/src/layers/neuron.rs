use crate::error::NnError;
use crate::init::Init;
use crate::layers::activation::Activation;
use crate::module::Module;
use rand::Rng;
use valuegrad_core::ops::{add_op, mul_op};
use valuegrad_core::{Graph, Value};

/// A single unit computing `activation(Σ wᵢ·xᵢ + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, labelled `w0..`, and a bias `b`,
    /// all drawn from `init`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nin` is zero, `InvalidInit` if `init` cannot be sampled.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nin == 0 {
            return Err(NnError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = init
            .sample_n(nin, rng)?
            .into_iter()
            .enumerate()
            .map(|(i, w)| graph.leaf_with_label(w, format!("w{}", i)))
            .collect();
        let bias = graph.leaf_with_label(init.sample(rng)?, "b");
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Output of the neuron for one input vector.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = add_op(&act, mul_op(w, x)?)?;
        }
        act.set_label("wx+b");
        self.activation.apply(&act)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
