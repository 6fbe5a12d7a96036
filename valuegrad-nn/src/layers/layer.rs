use crate::error::NnError;
use crate::init::Init;
use crate::layers::activation::Activation;
use crate::layers::neuron::Neuron;
use crate::module::{prefixed, Module};
use rand::Rng;
use valuegrad_core::{Graph, Value};

/// `nout` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nout == 0 {
            return Err(NnError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                prefixed(&format!("neurons.{}", i), n.named_parameters())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes_and_names() -> Result<(), NnError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let layer = Layer::new(&graph, 2, 3, Activation::Tanh, Init::default(), &mut rng)?;
        assert_eq!(layer.nin(), 2);
        assert_eq!(layer.nout(), 3);
        assert_eq!(layer.num_parameters(), 9);

        let names: Vec<String> = layer
            .named_parameters()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        let first = ["neurons.0.w0", "neurons.0.w1", "neurons.0.b"];
        assert_eq!(&names[..3], &first);
        assert_eq!(names[8], "neurons.2.b");

        let x = graph.leaves(&[0.1, -0.2]);
        let out = layer.forward(&x)?;
        assert_eq!(out.len(), 3);
        for (o, n) in out.iter().zip(layer.neurons()) {
            assert_eq!(o.data(), n.activate(&x)?.data());
        }
        Ok(())
    }

    #[test]
    fn test_parameters_follow_neuron_order() -> Result<(), NnError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let activation = Activation::Identity;
        let layer = Layer::new(&graph, 1, 2, activation, Init::default(), &mut rng)?;
        let params = layer.parameters();
        assert!(params[0].same_node(&layer.neurons()[0].weights()[0]));
        assert!(params[1].same_node(layer.neurons()[0].bias()));
        assert!(params[2].same_node(&layer.neurons()[1].weights()[0]));
        Ok(())
    }

    #[test]
    fn test_empty_layer_rejected() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let result = Layer::new(&graph, 2, 0, Activation::Tanh, Init::default(), &mut rng);
        assert!(matches!(result, Err(NnError::InvalidArchitecture(_))));
    }
}
