use super::*;
use crate::ops::pow_op;
use approx::assert_relative_eq;

#[test]
fn test_check_grad_polynomial() {
    let func = |x: &[Value]| -> Result<Value, AutogradError> {
        // f(a, b) = a^3 * b - b / a
        let a3 = pow_op(&x[0], 3.0)?;
        Ok(&a3 * &x[1] - &x[1] / &x[0])
    };
    assert_eq!(check_grad(func, &[1.5, -0.7], 1e-4, 1e-4), Ok(()));
}

#[test]
fn test_check_grad_activations() {
    let func = |x: &[Value]| -> Result<Value, AutogradError> {
        Ok((&x[0] * &x[1]).tanh() + x[2].exp() * &x[0])
    };
    assert_eq!(check_grad(func, &[0.3, -1.2, 0.8], 1e-4, 1e-4), Ok(()));
}

#[test]
fn test_check_grad_detects_detached_input() {
    // The second factor copies x's value into a fresh leaf, hiding it from backward.
    let func = |x: &[Value]| -> Result<Value, AutogradError> {
        let graph = x[0].graph();
        let detached = graph.leaf(x[0].data());
        Ok(&x[0] * &detached)
    };
    match check_grad(func, &[2.0], 1e-4, 1e-4) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_relative_eq!(analytical_grad, 2.0, epsilon = 1e-9);
            assert_relative_eq!(numerical_grad, 4.0, epsilon = 1e-6);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_forward_error() {
    let func = |x: &[Value]| -> Result<Value, AutogradError> { pow_op(&x[0], &x[1]) };
    let result = check_grad(func, &[2.0, 3.0], 1e-4, 1e-4);
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPassError(
            AutogradError::InvalidOperandKind { .. }
        ))
    ));
}

#[test]
fn test_numerical_grad_non_finite() {
    // 1/x around 0 blows up.
    let func = |x: &[Value]| -> Result<Value, AutogradError> { pow_op(&x[0], -1.0) };
    let result = numerical_grad(func, &[0.0], 0.0);
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNaNOrInfinite {
            input_index: 0,
            ..
        })
    ));
}

#[test]
fn test_numerical_grad_values() {
    let func = |x: &[Value]| -> Result<Value, AutogradError> { Ok(&x[0] * &x[0] + &x[1] * 3.0) };
    let grads = numerical_grad(func, &[2.0, 5.0], 1e-4).unwrap();
    assert_relative_eq!(grads[0], 4.0, epsilon = 1e-6);
    assert_relative_eq!(grads[1], 3.0, epsilon = 1e-6);
}
