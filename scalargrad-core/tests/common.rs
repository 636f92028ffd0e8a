use scalargrad_core::{Graph, Value};

// Shared by several integration test crates; each one only uses part of it.
#[allow(dead_code)]
pub fn leaves<'g>(graph: &'g Graph<f64>, values: &[f64]) -> Vec<Value<'g, f64>> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Four samples of three features with +/-1 targets.
#[allow(dead_code)]
pub fn toy_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, -3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// Lets `RUST_LOG=debug cargo test` show the engine's logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
