use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^(-x)).
///
/// Strictly inside (0, 1) for any finite input, with sigmoid(0) = 0.5.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid, expressed in output space: y * (1 - y).
///
/// `y` must itself be a sigmoid output; the engine caches activations, not
/// pre-activation sums, so the derivative is taken with respect to the
/// activated value. Ranges over [0, 0.25], maximal at y = 0.5 and zero at
/// y = 0 and y = 1.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
