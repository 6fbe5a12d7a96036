use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Engine error during gradient check: {0}")]
    Autograd(AutogradError),
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::Autograd(err)
    }
}

/// Evaluates `func` on a fresh graph whose leaves hold `inputs`.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Vec<Value>, Value), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, AutogradError>,
{
    let graph = Graph::with_capacity(inputs.len() * 4);
    let leaves = graph.leaves(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((leaves, output))
}

/// Centered finite-difference estimate of ∂func/∂inputᵢ for every input.
pub fn numerical_grad<F>(func: F, inputs: &[f64], epsilon: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, AutogradError>,
{
    let mut grads = Vec::with_capacity(inputs.len());
    for i in 0..inputs.len() {
        let mut inputs_plus = inputs.to_vec();
        inputs_plus[i] += epsilon;
        let loss_plus = evaluate(&func, &inputs_plus)?.1.try_data()?;

        let mut inputs_minus = inputs.to_vec();
        inputs_minus[i] -= epsilon;
        let loss_minus = evaluate(&func, &inputs_minus)?.1.try_data()?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        grads.push(numerical);
    }
    Ok(grads)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`. It is
/// called once on the unperturbed inputs, followed by a backward pass, and twice
/// per input on graphs where that input is shifted by `±epsilon`.
///
/// A gradient passes when its absolute difference to the estimate is within
/// `tolerance`, or its relative difference is.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, AutogradError>,
{
    // --- 1. Forward and backward on the unperturbed inputs ---
    let (leaves, output) = evaluate(&func, inputs)?;
    output
        .try_backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- 2. Finite differences ---
    let numerical_grads = numerical_grad(&func, inputs, epsilon)?;

    // --- 3. Compare ---
    for (i, (&analytical_grad, &numerical_grad)) in analytical_grads
        .iter()
        .zip(numerical_grads.iter())
        .enumerate()
    {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        let close = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
