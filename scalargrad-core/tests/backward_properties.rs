use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::utils::testing::check_grads_near;
use scalargrad_core::{Graph, Op, ScalarGradError};

mod common;
use common::{init_logger, leaves};

#[test]
fn test_sum_of_same_leaf() {
    init_logger();
    let graph: Graph<f64> = Graph::new();
    let x = graph.leaf(3.0);
    (x + x).backward();
    assert_eq!(x.grad(), 2.0);
}

#[test]
fn test_product_gradients() {
    let graph: Graph<f64> = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(5.0);
    let z = a * b;
    z.backward();
    assert_eq!(z.value(), 10.0);
    check_grads_near(&[a, b], &[5.0, 2.0], 0.0);
}

#[test]
fn test_tanh_at_origin() {
    let graph: Graph<f64> = Graph::new();
    let x = graph.leaf(0.0);
    let y = x.tanh();
    y.backward();
    assert_eq!(y.value(), 0.0);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_square_gradient() {
    let graph: Graph<f64> = Graph::new();
    let a = graph.leaf(3.0);
    a.pow(2.0).backward();
    assert_eq!(a.grad(), 6.0);
}

#[test]
fn test_weighted_sum_gradients() {
    let graph: Graph<f64> = Graph::new();
    let x1 = graph.leaf(2.0).with_label("x1");
    let x2 = graph.leaf(0.0).with_label("x2");
    let w1 = graph.leaf(-3.0).with_label("w1");
    let w2 = graph.leaf(1.0).with_label("w2");
    let b = graph.leaf(6.881_373_587_019_543_2).with_label("b");
    let n = (x1 * w1 + x2 * w2 + b).with_label("n");
    n.backward();
    assert_eq!(n.grad(), 1.0);
    check_grads_near(&[x1, w1, x2, w2, b], &[-3.0, 2.0, 1.0, 0.0, 1.0], 0.0);
}

#[test]
fn test_accumulation_across_passes() {
    let graph: Graph<f64> = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(-2.0);
    let m = a * b;
    let t = m.tanh();
    let out = t + a;
    out.backward();
    let once = [a.grad(), b.grad()];
    let s = 1.0 - t.value().powi(2);
    assert_relative_eq!(once[0], 1.0 + s * b.value(), epsilon = 1e-12);
    assert_relative_eq!(once[1], s * a.value(), epsilon = 1e-12);

    // Only the root is re-seeded: t keeps its first-pass gradient and receives
    // another 1, m goes from s to 3s and hands 3s back to its operands.
    out.backward();
    assert_eq!(out.grad(), 1.0);
    assert_eq!(t.grad(), 2.0);
    assert_relative_eq!(m.grad(), 3.0 * s, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 2.0 + 4.0 * s * b.value(), epsilon = 1e-12);
    assert_relative_eq!(b.grad(), 4.0 * s * a.value(), epsilon = 1e-12);

    graph.zero_grad();
    out.backward();
    assert_eq!([a.grad(), b.grad()], once);
}

#[test]
fn test_accumulation_doubles_on_single_operation() {
    let graph: Graph<f64> = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(-2.0);
    let out = a * b;
    out.backward();
    out.backward();
    check_grads_near(&[a, b], &[-4.0, 3.0], 0.0);
}

#[test]
fn test_ieee_domain_errors() {
    let graph: Graph<f64> = Graph::new();
    let zero = graph.leaf(0.0);
    assert_eq!(zero.pow(-1.0).value(), f64::INFINITY);
    assert_eq!((graph.leaf(1.0) / zero).value(), f64::INFINITY);
    assert!((zero / zero).value().is_nan());
}

#[test]
fn test_graph_level_errors() {
    let graph: Graph<f64> = Graph::new();
    let other: Graph<f64> = Graph::new();
    let foreign = other.leaf(1.0);
    assert!(matches!(
        graph.backward(foreign.id()),
        Err(ScalarGradError::ForeignNode { .. })
    ));
    assert!(graph.handle(foreign.id()).is_err());
}

#[test]
fn test_every_operation_against_finite_differences() {
    let cases: Vec<(&str, Vec<f64>)> = vec![
        ("add", vec![0.3, -0.7]),
        ("mul", vec![1.2, 0.4]),
        ("pow", vec![1.7]),
        ("neg", vec![0.9]),
        ("sub", vec![0.2, 1.1]),
        ("div", vec![0.8, 1.9]),
        ("tanh", vec![0.35]),
        ("exp", vec![-0.6]),
    ];
    for (name, inputs) in cases {
        let result = match name {
            "add" => check_grad(|x| Ok(x[0] + x[1]), &inputs, 1e-6, 1e-6),
            "mul" => check_grad(|x| Ok(x[0] * x[1]), &inputs, 1e-6, 1e-6),
            "pow" => check_grad(|x| Ok(x[0].pow(2.5)), &inputs, 1e-6, 1e-6),
            "neg" => check_grad(|x| Ok(-x[0]), &inputs, 1e-6, 1e-6),
            "sub" => check_grad(|x| Ok(x[0] - x[1]), &inputs, 1e-6, 1e-6),
            "div" => check_grad(|x| Ok(x[0] / x[1]), &inputs, 1e-6, 1e-6),
            "tanh" => check_grad(|x| Ok(x[0].tanh()), &inputs, 1e-6, 1e-6),
            _ => check_grad(|x| Ok(x[0].exp()), &inputs, 1e-6, 1e-6),
        };
        assert!(result.is_ok(), "{}: {:?}", name, result);
    }
}

#[test]
fn test_grad_check_reports_wrong_input_count() {
    let result = check_grad(
        |x| {
            if x.len() != 2 {
                return Err(ScalarGradError::InputSizeMismatch {
                    expected: 2,
                    actual: x.len(),
                    operation: "test".to_string(),
                });
            }
            Ok(x[0] * x[1])
        },
        &[1.0],
        1e-6,
        1e-6,
    );
    assert!(result.is_err());
    assert!(check_grad(|x| Ok(x[0]), &[1.0], 0.0, 1e-6).is_err());
}

#[test]
fn test_composite_expression_structure() {
    let graph: Graph<f64> = Graph::new();
    let xs = leaves(&graph, &[1.0, 2.0, 3.0]);
    let y = (xs[0] * xs[1]).exp() + xs[2].tanh();
    let order = y.topological_order();
    assert_eq!(order.last(), Some(&y.id()));
    assert!(matches!(y.op(), Op::Add(..)));
    let trace = y.trace();
    assert_eq!(trace.nodes.len(), order.len());
    assert_eq!(trace.edges.len(), 6);
}
