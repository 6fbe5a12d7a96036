use valuegrad_core::{Graph, Value};

// Each integration test binary compiles this module on its own, so helpers
// unused by one binary would warn.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `d = a * b + c` and returns `(a, b, c, d)`.
#[allow(dead_code)]
pub(crate) fn linear_expression(
    graph: &Graph,
    a: f64,
    b: f64,
    c: f64,
) -> (Value, Value, Value, Value) {
    let a = graph.leaf_with_label(a, "a");
    let b = graph.leaf_with_label(b, "b");
    let c = graph.leaf_with_label(c, "c");
    let d = &a * &b + &c;
    d.set_label("d");
    (a, b, c, d)
}
