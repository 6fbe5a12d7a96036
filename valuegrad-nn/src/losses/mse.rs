use crate::error::NnError;
use std::fmt;
use std::str::FromStr;
use valuegrad_core::ops::{add_op, div_op, mul_op, sub_op};
use valuegrad_core::{Operand, Value};

/// How the squared errors are combined into one loss value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(NnError::UnsupportedReduction(s.to_string())),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Sum => write!(f, "sum"),
            Reduction::Mean => write!(f, "mean"),
        }
    }
}

/// Squared error `Σ (pᵢ - tᵢ)²` between predictions and targets, optionally
/// divided by the number of pairs.
///
/// Targets may be plain numbers or values of the same graph; numbers are
/// promoted to constant leaves.
///
/// # Errors
/// `EmptyInput` with no predictions, `LengthMismatch` when the lengths differ,
/// and the autograd errors of the underlying operations.
pub fn mse_loss<T>(
    predictions: &[Value],
    targets: &[T],
    reduction: Reduction,
) -> Result<Value, NnError>
where
    T: Clone + Into<Operand>,
{
    if predictions.is_empty() {
        return Err(NnError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.len() != targets.len() {
        return Err(NnError::LengthMismatch {
            operation: "mse_loss".to_string(),
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }

    let squared = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| {
            let diff = sub_op(p, t.clone())?;
            mul_op(&diff, &diff)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut total = squared[0].clone();
    for term in &squared[1..] {
        total = add_op(&total, term)?;
    }

    let loss = match reduction {
        Reduction::Sum => total,
        Reduction::Mean => div_op(&total, predictions.len() as f64)?,
    };
    loss.set_label("loss");
    Ok(loss)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
