// Each integration test binary compiles this module on its own.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four-sample regression task: three inputs, one target in {-1, 1}.
#[allow(dead_code)]
pub(crate) fn tiny_dataset() -> (Vec<[f64; 3]>, Vec<f64>) {
    let xs = vec![
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
