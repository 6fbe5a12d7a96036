use crate::value::Value;

/// Checks that `actual` holds `expected_data` within `tolerance`.
/// Panics with the node, the values and the difference otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected_data).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            data,
            expected_data,
            diff,
            tolerance
        );
    }
}

/// Checks the accumulated gradient of each value against `expected_grads`.
pub fn check_grads_near(values: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected_grads.len(), "Gradient count mismatch");

    for (i, (value, expected)) in values.iter().zip(expected_grads.iter()).enumerate() {
        let grad = value.grad();
        let diff = (grad - *expected).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tol={:?}",
                i,
                grad,
                expected,
                diff,
                tolerance
            );
        }
    }
}
