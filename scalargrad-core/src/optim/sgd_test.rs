#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::ScalarGradError;
    use crate::nn::parameter::Parameter;
    use crate::optim::optimizer_trait::Optimizer;
    use crate::optim::sgd::Sgd;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sgd_rejects_bad_learning_rate() {
        let p = Parameter::new(1.0);
        assert!(Sgd::new([&p], 0.0).is_err());
        assert!(Sgd::new([&p], -0.1).is_err());
        assert!(Sgd::new([&p], f64::INFINITY).is_err());

        let mut sgd = Sgd::new([&p], 0.1).unwrap();
        assert!(matches!(sgd.set_lr(f64::NAN), Err(ScalarGradError::InvalidConfig(_))));
        assert_eq!(sgd.lr(), 0.1);
        sgd.set_lr(0.2).unwrap();
        assert_eq!(sgd.lr(), 0.2);
    }

    #[test]
    fn test_sgd_step() -> Result<(), ScalarGradError> {
        let w = Parameter::new(2.0);
        let b = Parameter::new(-1.0);
        let graph: Graph<f64> = Graph::new();
        // loss = (w * 3 + b)^2 = 25
        let loss = (w.bind(&graph) * 3.0 + b.bind(&graph)).pow(2.0);
        loss.backward();
        w.pull_grad(&graph)?;
        b.pull_grad(&graph)?;
        assert_eq!(w.grad(), 30.0);
        assert_eq!(b.grad(), 10.0);

        let mut sgd = Sgd::new([&w, &b], 0.01)?;
        assert_eq!(sgd.params().len(), 2);
        sgd.step()?;
        assert_relative_eq!(w.data(), 1.7, epsilon = 1e-12);
        assert_relative_eq!(b.data(), -1.1, epsilon = 1e-12);
        // Stepping does not consume the gradient.
        assert_eq!(w.grad(), 30.0);
        Ok(())
    }

    #[test]
    fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
        let w = Parameter::new(2.0);
        let graph: Graph<f64> = Graph::new();
        (w.bind(&graph) * 4.0).backward();
        w.pull_grad(&graph)?;
        let mut sgd = Sgd::new([&w], 0.5)?;
        sgd.zero_grad();
        assert_eq!(w.grad(), 0.0);
        sgd.step()?;
        assert_eq!(w.data(), 2.0);
        Ok(())
    }

    #[test]
    fn test_sgd_minimizes_quadratic() -> Result<(), ScalarGradError> {
        let x = Parameter::new(5.0);
        let mut sgd = Sgd::new([&x], 0.1)?;
        for _ in 0..100 {
            let graph: Graph<f64> = Graph::new();
            let loss = (x.bind(&graph) - 3.0).pow(2.0);
            sgd.zero_grad();
            loss.backward();
            x.pull_grad(&graph)?;
            sgd.step()?;
        }
        assert_abs_diff_eq!(x.data(), 3.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_sgd_applies_non_finite_gradients() -> Result<(), ScalarGradError> {
        let x = Parameter::new(0.0);
        let graph: Graph<f64> = Graph::new();
        x.bind(&graph).pow(-1.0).backward();
        x.pull_grad(&graph)?;
        let mut sgd = Sgd::new([&x], 0.1)?;
        sgd.step()?;
        assert!(!x.data().is_finite());
        Ok(())
    }
}
