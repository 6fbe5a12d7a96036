use crate::error::NnError;
use valuegrad_core::ops::tanh_op;
use valuegrad_core::Value;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// Passes the weighted sum through unchanged.
    Identity,
}

impl Activation {
    pub fn apply(&self, input: &Value) -> Result<Value, NnError> {
        match self {
            Activation::Tanh => Ok(tanh_op(input)?),
            Activation::Identity => Ok(input.clone()),
        }
    }
}
