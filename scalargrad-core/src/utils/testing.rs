use crate::value::Value;
use num_traits::Float;
use std::fmt::Debug;

/// Checks that a scalar is within `tolerance` of the expected one.
/// Panics with both numbers otherwise.
pub fn check_scalar_near<T: Float + Debug>(actual: T, expected: T, tolerance: T) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of several values at once.
/// Panics on a length mismatch or on the first gradient out of tolerance.
pub fn check_grads_near<T: Float + Debug>(values: &[Value<'_, T>], expected: &[T], tolerance: T) {
    assert_eq!(
        values.len(),
        expected.len(),
        "Gradient count mismatch"
    );
    for (i, (value, &e)) in values.iter().zip(expected).enumerate() {
        let actual = value.grad();
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} (label {:?}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                value.label(),
                actual,
                e,
                diff,
                tolerance
            );
        }
    }
}
