use super::Value;
use num_traits::Float;
use std::fmt;

impl<'g, T: Float + fmt::Debug> fmt::Debug for Value<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(id={}, graph={}, value={:?}, grad={:?}, op={:?}, label={:?})",
            self.id.index(),
            self.id.graph(),
            self.value(),
            self.grad(),
            self.op().tag(),
            self.label()
        )
    }
}

impl<'g, T: Float + fmt::Display> fmt::Display for Value<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.value())
    }
}
