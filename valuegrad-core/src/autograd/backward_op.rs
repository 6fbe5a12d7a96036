use std::fmt;

/// Local-gradient rule of the operation that produced a node.
///
/// Each variant captures, at construction time, exactly the numbers its derivative
/// needs: operand values for `Mul` and `Pow`, the output value for `Tanh` and `Exp`.
/// The backward pass evaluates the rule by matching on the variant; nothing in the
/// graph holds a closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Inputs and parameters. Propagates nothing.
    Leaf,
    Add,
    Mul { lhs: f64, rhs: f64 },
    /// `base` is the operand's value; `exponent` is the constant power.
    Pow { base: f64, exponent: f64 },
    Tanh { output: f64 },
    Exp { output: f64 },
}

impl BackwardOp {
    /// Number of operands this rule propagates to.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Pow { .. } | BackwardOp::Tanh { .. } | BackwardOp::Exp { .. } => 1,
            BackwardOp::Add | BackwardOp::Mul { .. } => 2,
        }
    }

    /// Applies the chain rule for this operation.
    ///
    /// Takes ∂root/∂output (`grad_output`) and returns the contribution to
    /// ∂root/∂operand for each operand. Slot `i` of the result belongs to operand
    /// `i` of the node; slots past `arity()` are zero. Callers add the
    /// contributions into the operands' accumulators, they never overwrite them.
    pub fn backward(&self, grad_output: f64) -> [f64; 2] {
        match *self {
            BackwardOp::Leaf => [0.0, 0.0],
            BackwardOp::Add => [grad_output, grad_output],
            BackwardOp::Mul { lhs, rhs } => [rhs * grad_output, lhs * grad_output],
            BackwardOp::Pow { base, exponent } => {
                [exponent * base.powf(exponent - 1.0) * grad_output, 0.0]
            }
            BackwardOp::Tanh { output } => [(1.0 - output * output) * grad_output, 0.0],
            BackwardOp::Exp { output } => [output * grad_output, 0.0],
        }
    }
}

/// The operation tag shown in diagnostics and graph exports.
impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul { .. } => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "**{}", exponent),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
            BackwardOp::Exp { .. } => write!(f, "exp"),
        }
    }
}
