use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Weak;

/// The leaf standing for a parameter in one graph.
struct Binding {
    node: NodeId,
    graph: Weak<()>,
}

/// A learnable scalar of a [`Module`](crate::nn::Module).
///
/// Graph nodes never change value, so a parameter keeps its current value outside
/// any graph. Each forward pass binds it into the graph being built as a leaf;
/// after the backward pass the leaf's gradient is pulled back into the parameter,
/// where an optimizer reads it and updates the value for the next pass.
pub struct Parameter<T = f64> {
    name: Option<String>,
    data: Cell<T>,
    grad: Cell<T>,
    bindings: RefCell<Vec<Binding>>,
}

impl<T: Float> Parameter<T> {
    /// Creates an unnamed parameter.
    pub fn new(data: T) -> Self {
        Parameter {
            name: None,
            data: Cell::new(data),
            grad: Cell::new(T::zero()),
            bindings: RefCell::new(Vec::new()),
        }
    }

    /// Creates a parameter whose leaves are labelled `name`.
    pub fn named(data: T, name: impl Into<String>) -> Self {
        Parameter {
            name: Some(name.into()),
            ..Self::new(data)
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data(&self) -> T {
        self.data.get()
    }

    pub fn set_data(&self, data: T) {
        self.data.set(data);
    }

    /// Gradient copied by the last [`pull_grad`](Parameter::pull_grad).
    pub fn grad(&self) -> T {
        self.grad.get()
    }

    pub fn zero_grad(&self) {
        self.grad.set(T::zero());
    }

    /// Returns the leaf standing for this parameter in `graph`.
    ///
    /// The first call on a graph pushes a leaf holding the current value; later
    /// calls on the same graph return that same leaf, so every use of the
    /// parameter during one forward pass accumulates into a single gradient.
    /// The parameter keeps one leaf per live graph; bindings to dropped graphs
    /// are forgotten.
    pub fn bind<'g>(&self, graph: &'g Graph<T>) -> Value<'g, T> {
        if let Some(id) = self.binding_in(graph) {
            if let Ok(leaf) = graph.handle(id) {
                return leaf;
            }
        }
        let leaf = graph.leaf(self.data.get());
        if let Some(name) = &self.name {
            leaf.set_label(name.as_str());
        }
        let mut bindings = self.bindings.borrow_mut();
        bindings.retain(|b| b.graph.strong_count() > 0 && b.node.graph() != graph.id());
        bindings.push(Binding {
            node: leaf.id(),
            graph: graph.liveness(),
        });
        leaf
    }

    /// Copies the gradient of this parameter's leaf in `graph` and returns it.
    pub fn pull_grad(&self, graph: &Graph<T>) -> Result<T, ScalarGradError> {
        let id = self
            .binding_in(graph)
            .ok_or_else(|| ScalarGradError::ParameterNotBound {
                name: self.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
            })?;
        let grad = graph.grad_of(id)?;
        self.grad.set(grad);
        Ok(grad)
    }

    fn binding_in(&self, graph: &Graph<T>) -> Option<NodeId> {
        self.bindings
            .borrow()
            .iter()
            .find(|b| b.node.graph() == graph.id())
            .map(|b| b.node)
    }

    #[cfg(test)]
    pub(crate) fn bindings_len(&self) -> usize {
        self.bindings.borrow().len()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("data", &self.data.get())
            .field("grad", &self.grad.get())
            .finish()
    }
}
