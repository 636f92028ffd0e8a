use scalargrad_core::nn::{Init, Mlp, Module, MseLoss, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::train::{fit, TrainConfig};
use scalargrad_core::{Graph, ScalarGradError};

mod common;
use common::{init_logger, leaves, toy_dataset};

#[test]
fn test_fit_lowers_the_loss() -> Result<(), ScalarGradError> {
    init_logger();
    let (xs, ys) = toy_dataset();
    let config = TrainConfig::new().epochs(100).learning_rate(0.05).log_every(25);
    let mlp: Mlp<f64> = Mlp::new(3, &[4, 4, 1], &Init::default(), &mut config.rng())?;

    let report = fit(&mlp, &xs, &ys, &config)?;
    let first = report.loss_history[0];
    let last = report.final_loss().expect("at least one epoch");
    assert!(last < first, "loss went from {} to {}", first, last);

    let graph: Graph<f64> = Graph::new();
    for x in &xs {
        let prediction = mlp.forward(&graph, &leaves(&graph, x))?[0];
        assert!((-1.0..=1.0).contains(&prediction.value()));
    }
    Ok(())
}

#[test]
fn test_manual_loop_matches_fit() -> Result<(), ScalarGradError> {
    let (xs, ys) = toy_dataset();
    let config = TrainConfig::new().epochs(10).learning_rate(0.05).log_every(0);

    let fitted: Mlp<f64> = Mlp::new(3, &[4, 4, 1], &Init::default(), &mut config.rng())?;
    let report = fit(&fitted, &xs, &ys, &config)?;

    let manual: Mlp<f64> = Mlp::new(3, &[4, 4, 1], &Init::default(), &mut config.rng())?;
    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(manual.parameters(), 0.05)?;
    let mut history = Vec::new();
    for _ in 0..config.epochs {
        let graph: Graph<f64> = Graph::new();
        let mut predictions = Vec::new();
        for x in &xs {
            predictions.extend(manual.forward(&graph, &leaves(&graph, x))?);
        }
        let loss = loss_fn.calculate(&predictions, &ys)?;
        optimizer.zero_grad();
        loss.backward();
        manual.pull_grads(&graph)?;
        optimizer.step()?;
        history.push(loss.value());
    }

    assert_eq!(history, report.loss_history);
    let fitted_data: Vec<f64> = fitted.parameters().iter().map(|p| p.data()).collect();
    let manual_data: Vec<f64> = manual.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(fitted_data, manual_data);
    Ok(())
}
