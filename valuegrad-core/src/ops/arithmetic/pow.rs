use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::Operands;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Raises a scalar to a constant real power: `base^exponent`.
///
/// The exponent must be a number. Passing a `Value` node returns
/// `AutogradError::InvalidOperandKind`; differentiating with respect to the
/// exponent is not supported.
///
/// Backward: `base` receives `exponent * base^(exponent - 1) * grad`, added to
/// whatever it already holds.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, AutogradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(p) => p,
        node @ Operand::Node(_) => {
            return Err(AutogradError::InvalidOperandKind {
                operation: "pow".to_string(),
                found: node.kind_name().to_string(),
            })
        }
    };
    let base_val = base.try_data()?;
    Ok(base.graph().push(
        base_val.powf(exponent),
        Operands::unary(base.id()),
        BackwardOp::Pow {
            base: base_val,
            exponent,
        },
    ))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
