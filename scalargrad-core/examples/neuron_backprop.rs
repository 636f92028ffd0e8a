//! # Backpropagation through a single neuron
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` by hand, with tanh written out as
//! `(e^2n - 1) / (e^2n + 1)`, runs the backward pass and prints every gradient
//! followed by the graph in Graphviz format.
//!
//! ## Running
//! `cargo run --example neuron_backprop > neuron.dot && dot -Tsvg neuron.dot -o neuron.svg`
//!
//! Set `RUST_LOG=trace` to follow the backward pass node by node.

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let graph: Graph<f64> = Graph::new();
    let x1 = graph.leaf(2.0).with_label("x1");
    let x2 = graph.leaf(0.0).with_label("x2");
    let w1 = graph.leaf(-3.0).with_label("w1");
    let w2 = graph.leaf(1.0).with_label("w2");
    let b = graph.leaf(6.881_373_587_019_543_2).with_label("b");

    let x1w1 = (x1 * w1).with_label("x1*w1");
    let x2w2 = (x2 * w2).with_label("x2*w2");
    let x1w1x2w2 = (x1w1 + x2w2).with_label("x1*w1 + x2*w2");
    let n = (x1w1x2w2 + b).with_label("n");

    let e = (2.0 * n).exp().with_label("e");
    let o = ((e - 1.0) / (e + 1.0)).with_label("o");
    o.backward();

    eprintln!("o = {:.4} ({} nodes)", o.value(), graph.len());
    for v in [x1, w1, x2, w2, b, n] {
        eprintln!(
            "d o / d {:<2} = {:.4}",
            v.label().unwrap_or_default(),
            v.grad()
        );
    }

    print!("{}", graph.trace(o.id())?.to_dot());
    Ok(())
}
