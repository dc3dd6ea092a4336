use ndarray::{Array1, ArrayView1, ArrayViewMut1};

use crate::types::Float;

/// Numerically stable softmax over one sample vector.
///
/// Every evaluation subtracts the largest element before exponentiating so
/// large inputs cannot overflow: `[1000, 1000, 1000]` maps to thirds.
pub struct Softmax;

impl Softmax {
    /// Largest element of the sample (the shift `α`).
    pub fn max(input: ArrayView1<Float>) -> Float {
        input.iter().copied().fold(Float::NEG_INFINITY, Float::max)
    }

    /// Softmax output at `index` only.
    pub fn at(input: ArrayView1<Float>, index: usize) -> Float {
        let alpha = Self::max(input);
        let numer = (input[index] - alpha).exp();
        let denom: Float = input.iter().map(|&x| (x - alpha).exp()).sum();
        numer / denom
    }

    /// Softmax of the whole sample written into `output`.
    ///
    /// Matches [`Softmax::at`] for every index; `α` and the denominator are
    /// computed once instead of once per position.
    pub fn apply(input: ArrayView1<Float>, mut output: ArrayViewMut1<Float>) {
        let alpha = Self::max(input);
        output.zip_mut_with(&input, |y, &x| *y = (x - alpha).exp());
        let denom: Float = output.iter().sum();
        output.mapv_inplace(|numer| numer / denom);
    }

    /// Diagonal derivative `y(1 - y)`.
    pub fn derivative(y: Float) -> Float {
        y * (1.0 - y)
    }

    /// Jacobian row `index` of softmax, given the forward outputs `y`.
    ///
    /// Entry `index` is `y[index](1 - y[index])`, every other entry `j` is
    /// `-y[j] * y[index]`.
    pub fn jacobian_row_into(output: ArrayView1<Float>, index: usize, mut row: ArrayViewMut1<Float>) {
        let y_index = output[index];
        for (j, (dst, &y_j)) in row.iter_mut().zip(output.iter()).enumerate() {
            *dst = if j == index {
                Self::derivative(y_index)
            } else {
                -y_j * y_index
            };
        }
    }

    pub fn jacobian_row(output: ArrayView1<Float>, index: usize) -> Array1<Float> {
        let mut row = Array1::zeros(output.len());
        Self::jacobian_row_into(output, index, row.view_mut());
        row
    }
}
