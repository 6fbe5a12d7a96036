use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::Operands;
use crate::value::Value;

/// Natural exponential `e^a`.
///
/// The rule lives on the output node and captures the output value:
/// `a` receives `e^a * grad`.
pub fn exp_op(a: &Value) -> Result<Value, AutogradError> {
    let out = a.try_data()?.exp();
    Ok(a.graph().push(
        out,
        Operands::unary(a.id()),
        BackwardOp::Exp { output: out },
    ))
}
