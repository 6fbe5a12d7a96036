use crate::error::AutogradError;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Subtracts two scalars, recorded as `a + (-b)`.
///
/// A literal `b` is negated before promotion, so `x - 1.0` records `x + (-1)`.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    a.try_read(|_| ())?;
    match b.into() {
        Operand::Scalar(x) => add_op(a, -x),
        Operand::Node(b) => {
            if !b.graph().ptr_eq(a.graph()) {
                return Err(AutogradError::GraphMismatch {
                    operation: "sub".to_string(),
                });
            }
            let neg_b = neg_op(&b)?;
            add_op(a, neg_b)
        }
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
