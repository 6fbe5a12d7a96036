use crate::error::NnError;
use std::fmt::Debug;
use valuegrad_core::Value;

/// The base trait for neurons, layers and networks.
///
/// Parameters are leaf values of the graph the module was built on; the
/// handles returned here share their node with the module, so an optimizer
/// updating them updates the module.
pub trait Module: Debug {
    /// Maps the inputs to the module's outputs by appending nodes to the graph.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError>;

    /// All parameters with hierarchical names (e.g. `"layers.0.neurons.1.w2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// All parameters, in the same order as [`Module::named_parameters`].
    fn parameters(&self) -> Vec<Value> {
        self.named_parameters()
            .into_iter()
            .map(|(_, value)| value)
            .collect()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes each name with `prefix.`, used by containers for their children.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}
