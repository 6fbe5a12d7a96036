// src/value/traits.rs

use crate::error::AutogradError;
use crate::ops::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Clone for Value {
    /// Shallow clone: the new handle refers to the same node.
    fn clone(&self) -> Self {
        Value {
            graph: self.graph.clone(),
            id: self.id,
            epoch: self.epoch,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.try_read(|node| {
            (
                node.value,
                node.grad,
                node.backward_op.to_string(),
                node.label.clone(),
            )
        });
        match summary {
            Ok((data, grad, op, label)) => {
                write!(
                    f,
                    "Value(id={}, data={}, grad={}, op={:?}",
                    self.id,
                    data,
                    grad,
                    op
                )?;
                if let Some(label) = label {
                    write!(f, ", label={:?}", label)?;
                }
                write!(f, ")")
            }
            Err(_) => write!(f, "Value(id={}, <stale>)", self.id),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_data() {
            Ok(data) => write!(f, "Value(data={})", data),
            Err(_) => write!(f, "Value(<stale>)"),
        }
    }
}

/// Operators cannot return `Result`; misuse (mixing graphs, stale handles) panics
/// with the error message. Use the `*_op` functions to handle it instead.
fn unwrap_op(result: Result<Value, AutogradError>) -> Value {
    result.unwrap_or_else(|e| panic!("Value operation failed: {}", e))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                unwrap_op($op_fn(&self, rhs))
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                unwrap_op($op_fn(&self, rhs))
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                unwrap_op($op_fn(self, rhs))
            }
        }

        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                unwrap_op($op_fn(self, rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                unwrap_op($op_fn(&self, rhs))
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                unwrap_op($op_fn(self, rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

// --- Literal on the left ---

/// `c + x`
fn radd(lhs: f64, rhs: &Value) -> Value {
    unwrap_op(add_op(rhs, lhs))
}

/// `c * x`
fn rmul(lhs: f64, rhs: &Value) -> Value {
    unwrap_op(mul_op(rhs, lhs))
}

/// `c - x`, recorded as `(-x) + c`
fn rsub(lhs: f64, rhs: &Value) -> Value {
    unwrap_op(neg_op(rhs).and_then(|neg| add_op(&neg, lhs)))
}

/// `c / x`, recorded as `x^-1 * c`
fn rdiv(lhs: f64, rhs: &Value) -> Value {
    unwrap_op(pow_op(rhs, -1.0).and_then(|inv| mul_op(&inv, lhs)))
}

macro_rules! impl_reflected_op {
    ($trait:ident, $method:ident, $fn:ident) => {
        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $fn(self, &rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $fn(self, rhs)
            }
        }
    };
}

impl_reflected_op!(Add, add, radd);
impl_reflected_op!(Sub, sub, rsub);
impl_reflected_op!(Mul, mul, rmul);
impl_reflected_op!(Div, div, rdiv);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        unwrap_op(neg_op(&self))
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        unwrap_op(neg_op(self))
    }
}
