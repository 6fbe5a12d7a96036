use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    let y = pow_op(&x, 2)?;
    assert_eq!(y.data(), 9.0);
    assert_eq!(y.operation_tag(), "**2");

    let z = pow_op(&x, 0.5)?;
    assert_relative_eq!(z.data(), 1.7320508075688772, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = pow_op(&x, 3.0)?;
    y.backward();
    assert_relative_eq!(x.grad(), 12.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_accumulates_when_input_reused() -> Result<(), AutogradError> {
    // y = x^2 + 3x: the power rule must add to the contribution of the product.
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let sq = pow_op(&x, 2.0)?;
    let y = &sq + &x * 3.0;
    y.backward();
    assert_relative_eq!(x.grad(), 7.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_rejects_node_exponent() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let p = graph.leaf(3.0);
    let result = pow_op(&x, &p);
    assert_eq!(
        result.unwrap_err(),
        AutogradError::InvalidOperandKind {
            operation: "pow".to_string(),
            found: "a Value node".to_string(),
        }
    );
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_pow_negative_exponent_grad_check() {
    let func = |x: &[Value]| pow_op(&x[0], -2.0);
    assert_eq!(check_grad(func, &[1.3], 1e-4, 1e-4), Ok(()));
}

#[test]
fn test_pow_fractional_grad_check() {
    let func = |x: &[Value]| pow_op(&x[0], 1.5);
    assert_eq!(check_grad(func, &[2.2], 1e-4, 1e-4), Ok(()));
}
