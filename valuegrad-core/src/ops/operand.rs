use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::value::Value;

/// The second argument of a binary operation: an existing node or a bare literal.
///
/// Literals are promoted to leaf nodes in the graph of the first operand. Such a
/// constant leaf still gets a gradient slot, nobody reads it.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Scalar(f64),
}

impl Operand {
    /// Short description used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Node(_) => "a Value node",
            Operand::Scalar(_) => "a real-number constant",
        }
    }

    /// Turns the operand into a live node of `graph`, promoting literals.
    pub(crate) fn into_value(self, graph: &Graph, operation: &str) -> Result<Value, AutogradError> {
        match self {
            Operand::Node(value) => {
                if !value.graph().ptr_eq(graph) {
                    return Err(AutogradError::GraphMismatch {
                        operation: operation.to_string(),
                    });
                }
                value.try_read(|_| ())?;
                Ok(value)
            }
            Operand::Scalar(x) => Ok(graph.leaf(x)),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Scalar(x as f64)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(x as f64)
    }
}
