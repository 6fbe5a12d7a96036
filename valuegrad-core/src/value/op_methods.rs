use crate::ops::{exp_op, pow_op, tanh_op};
use crate::value::Value;

impl Value {
    /// Raises this value to a constant power.
    ///
    /// # Panics
    /// Panics if the node is stale. `pow_op` is the fallible form, and also the
    /// one that reports a non-numeric exponent.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent).unwrap_or_else(|e| panic!("Value power operation failed: {}", e))
    }

    /// Hyperbolic tangent of this value.
    pub fn tanh(&self) -> Value {
        tanh_op(self).unwrap_or_else(|e| panic!("Value tanh operation failed: {}", e))
    }

    /// `e` raised to this value.
    pub fn exp(&self) -> Value {
        exp_op(self).unwrap_or_else(|e| panic!("Value exp operation failed: {}", e))
    }
}
