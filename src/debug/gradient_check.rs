use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::activations::Activation;
use crate::parallel::{backward_activation, forward_activation};
use crate::types::Float;

/// Compare the analytical backward pass with central finite differences.
///
/// For every output position `c`, the backward pass is run with a unit
/// upstream gradient at `c`; the result must match
/// `(f(x + ε e_k)[c] - f(x - ε e_k)[c]) / 2ε` for every input position `k`.
/// Returns the largest absolute difference over all samples and positions.
///
/// Inputs should stay away from kinks (ReLU and friends at zero).
pub fn check_activation_gradients(activation: &Activation, input: ArrayView2<Float>, epsilon: Float) -> Float {
    let dim = input.dim();
    let width = dim.1;

    let mut output = Array2::zeros(dim);
    forward_activation(output.view_mut(), input, activation);

    let mut shifted_outputs = Vec::with_capacity(width);
    for k in 0..width {
        let mut plus = input.to_owned();
        plus.column_mut(k).mapv_inplace(|v| v + epsilon);
        let mut minus = input.to_owned();
        minus.column_mut(k).mapv_inplace(|v| v - epsilon);

        let mut out_plus = Array2::zeros(dim);
        let mut out_minus = Array2::zeros(dim);
        forward_activation(out_plus.view_mut(), plus.view(), activation);
        forward_activation(out_minus.view_mut(), minus.view(), activation);
        shifted_outputs.push((out_plus, out_minus));
    }

    let mut max_error: Float = 0.0;
    for c in 0..width {
        let mut upstream = Array2::<Float>::zeros(dim);
        upstream.column_mut(c).fill(1.0);

        let mut analytical = Array2::zeros(dim);
        backward_activation(upstream.view(), output.view(), analytical.view_mut(), activation);

        for (k, (out_plus, out_minus)) in shifted_outputs.iter().enumerate() {
            for s in 0..dim.0 {
                let numerical = (out_plus[[s, c]] - out_minus[[s, c]]) / (2.0 * epsilon);
                max_error = max_error.max((numerical - analytical[[s, k]]).abs());
            }
        }
    }

    debug!("gradient check for {}: max error {:e}", activation, max_error);
    max_error
}
