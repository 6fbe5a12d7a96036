use crate::error::AutogradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negates a scalar, recorded as `a * -1`.
pub fn neg_op(a: &Value) -> Result<Value, AutogradError> {
    mul_op(a, -1.0)
}
