use crate::error::AutogradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Divides two scalars, recorded as `a * b^-1`.
///
/// A literal divisor is inverted before promotion. Division by zero is not
/// checked; it yields IEEE infinities or NaN that propagate through later
/// forward and backward computations.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    a.try_read(|_| ())?;
    match b.into() {
        Operand::Scalar(x) => mul_op(a, x.powi(-1)),
        Operand::Node(b) => {
            if !b.graph().ptr_eq(a.graph()) {
                return Err(AutogradError::GraphMismatch {
                    operation: "div".to_string(),
                });
            }
            let b_inv = pow_op(&b, -1.0)?;
            mul_op(a, b_inv)
        }
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
