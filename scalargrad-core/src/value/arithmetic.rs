use super::Value;
use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<'g, T: Float> Add for Value<'g, T> {
    type Output = Value<'g, T>;
    fn add(self, rhs: Self) -> Self::Output {
        self.lift(add_op(self.graph, self.id, rhs.id))
    }
}

impl<'g, T: Float> Sub for Value<'g, T> {
    type Output = Value<'g, T>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.lift(sub_op(self.graph, self.id, rhs.id))
    }
}

impl<'g, T: Float> Mul for Value<'g, T> {
    type Output = Value<'g, T>;
    fn mul(self, rhs: Self) -> Self::Output {
        self.lift(mul_op(self.graph, self.id, rhs.id))
    }
}

impl<'g, T: Float> Div for Value<'g, T> {
    type Output = Value<'g, T>;
    fn div(self, rhs: Self) -> Self::Output {
        self.lift(div_op(self.graph, self.id, rhs.id))
    }
}

impl<'g, T: Float> Neg for Value<'g, T> {
    type Output = Value<'g, T>;
    fn neg(self) -> Self::Output {
        self.lift(neg_op(self.graph, self.id))
    }
}

// --- Literal on the right: promoted to a leaf of the left operand's graph ---

impl<'g, T: Float> Add<T> for Value<'g, T> {
    type Output = Value<'g, T>;
    fn add(self, c: T) -> Self::Output {
        self + self.graph.leaf(c)
    }
}

impl<'g, T: Float> Sub<T> for Value<'g, T> {
    type Output = Value<'g, T>;
    fn sub(self, c: T) -> Self::Output {
        self - self.graph.leaf(c)
    }
}

impl<'g, T: Float> Mul<T> for Value<'g, T> {
    type Output = Value<'g, T>;
    fn mul(self, c: T) -> Self::Output {
        self * self.graph.leaf(c)
    }
}

impl<'g, T: Float> Div<T> for Value<'g, T> {
    type Output = Value<'g, T>;
    fn div(self, c: T) -> Self::Output {
        self / self.graph.leaf(c)
    }
}

// --- Literal on the left (`2.0 * x`): coherence rules require one impl per float type ---

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<'g> Add<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;
                fn add(self, rhs: Value<'g, $t>) -> Self::Output {
                    rhs.graph.leaf(self) + rhs
                }
            }

            impl<'g> Sub<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;
                fn sub(self, rhs: Value<'g, $t>) -> Self::Output {
                    rhs.graph.leaf(self) - rhs
                }
            }

            impl<'g> Mul<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;
                fn mul(self, rhs: Value<'g, $t>) -> Self::Output {
                    rhs.graph.leaf(self) * rhs
                }
            }

            impl<'g> Div<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;
                fn div(self, rhs: Value<'g, $t>) -> Self::Output {
                    rhs.graph.leaf(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
