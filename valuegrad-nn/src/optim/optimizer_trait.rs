use crate::error::NnError;

/// Trait for optimization algorithms.
///
/// An optimizer owns handles to the parameters it updates and reads their
/// accumulated gradients on each step.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self) -> Result<(), NnError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Call it before each backward pass, gradients accumulate otherwise.
    fn zero_grad(&self) -> Result<(), NnError>;
}
