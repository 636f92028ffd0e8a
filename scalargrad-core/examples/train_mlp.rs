//! # Training a small multi-layer perceptron
//!
//! Fits a `3 -> 4 -> 4 -> 1` tanh network to four labelled points with plain
//! gradient descent on the summed squared error, then prints the predictions.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use scalargrad_core::nn::{Init, Mlp, Module};
use scalargrad_core::train::{fit, TrainConfig};
use scalargrad_core::{Graph, ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let xs = vec![
        vec![2.0, -3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];

    let config = TrainConfig::new()
        .epochs(500)
        .learning_rate(0.01)
        .log_every(50)
        .seed(1337);
    let mlp: Mlp<f64> = Mlp::new(3, &[4, 4, 1], &Init::default(), &mut config.rng())?;
    println!("model has {} parameters", mlp.num_parameters());

    let report = fit(&mlp, &xs, &ys, &config)?;
    if let (Some(first), Some(last)) = (report.loss_history.first(), report.final_loss()) {
        println!("loss: {:.6} -> {:.6}", first, last);
    }

    let graph: Graph<f64> = Graph::new();
    for (x, y) in xs.iter().zip(&ys) {
        let inputs: Vec<Value<'_, f64>> = x.iter().map(|&v| graph.leaf(v)).collect();
        let prediction = mlp.forward(&graph, &inputs)?;
        println!("{:?} -> {:+.4} (target {:+})", x, prediction[0].value(), y);
    }
    Ok(())
}
