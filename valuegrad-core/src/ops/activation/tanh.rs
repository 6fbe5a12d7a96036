use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::Operands;
use crate::value::Value;

/// Hyperbolic tangent: `t = (e^(2x) - 1) / (e^(2x) + 1)`.
///
/// Evaluated with `f64::tanh`, which saturates to ±1 instead of producing
/// `inf / inf` for large inputs.
///
/// Backward: `a` receives `(1 - t²) * grad`, with `t` captured from the output.
pub fn tanh_op(a: &Value) -> Result<Value, AutogradError> {
    let t = a.try_data()?.tanh();
    Ok(a
        .graph()
        .push(t, Operands::unary(a.id()), BackwardOp::Tanh { output: t }))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
