//! Parallel batch application of activation functions
//!
//! The forward and backward routines here drive any [`Activation`] over a
//! whole batch. Samples are independent, so rows are distributed across the
//! rayon pool through ndarray's parallel `Zip`; each task owns exactly one
//! output row and only reads the matching input rows.
//!
//! Batches are 2-D arrays with one row per sample. Output batches must be
//! pre-sized by the caller: these routines fill them and never resize.

use log::{debug, trace};
use ndarray::{Array1, ArrayView2, ArrayViewMut2, Axis, Zip};

use crate::activations::Activation;
use crate::error::{ActivationError, Result};
use crate::types::Float;

/// Forward pass: `output[s][i] = activation.f(input[s], i)` for every sample.
///
/// An empty input batch is a no-op. Panics if `output` is not shaped like
/// `input`; see [`try_forward_activation`] for a checked version.
pub fn forward_activation(
    output: ArrayViewMut2<Float>,
    input: ArrayView2<Float>,
    activation: &Activation,
) {
    if input.nrows() == 0 {
        debug!("forward_activation: empty batch, nothing to do");
        return;
    }
    assert_eq!(
        output.dim(),
        input.dim(),
        "forward_activation: output batch must be pre-sized to the input shape"
    );
    apply_forward(output, input, activation);
}

/// Checked forward pass. Returns `DimensionMismatch` instead of panicking.
pub fn try_forward_activation(
    output: ArrayViewMut2<Float>,
    input: ArrayView2<Float>,
    activation: &Activation,
) -> Result<()> {
    if input.nrows() == 0 {
        debug!("try_forward_activation: empty batch, nothing to do");
        return Ok(());
    }
    if output.dim() != input.dim() {
        return Err(ActivationError::shape_mismatch("output batch", input.dim(), output.dim()));
    }
    apply_forward(output, input, activation);
    Ok(())
}

/// Backward pass through the activation.
///
/// For diagonal activations each gradient is
/// `upstream[s][c] * activation.df(forward_output[s][c])`. Otherwise it is
/// the dot product of `upstream[s]` with Jacobian row `c` of the sample.
///
/// An empty batch is a no-op. Panics when the three batches disagree on
/// shape; see [`try_backward_activation`] for a checked version.
pub fn backward_activation(
    upstream: ArrayView2<Float>,
    forward_output: ArrayView2<Float>,
    output_gradient: ArrayViewMut2<Float>,
    activation: &Activation,
) {
    if forward_output.nrows() == 0 {
        debug!("backward_activation: empty batch, nothing to do");
        return;
    }
    assert_eq!(
        upstream.dim(),
        forward_output.dim(),
        "backward_activation: upstream gradient must match the forward output shape"
    );
    assert_eq!(
        output_gradient.dim(),
        forward_output.dim(),
        "backward_activation: output gradient must be pre-sized to the forward output shape"
    );
    apply_backward(upstream, forward_output, output_gradient, activation);
}

/// Checked backward pass. Returns `DimensionMismatch` instead of panicking.
pub fn try_backward_activation(
    upstream: ArrayView2<Float>,
    forward_output: ArrayView2<Float>,
    output_gradient: ArrayViewMut2<Float>,
    activation: &Activation,
) -> Result<()> {
    if forward_output.nrows() == 0 {
        debug!("try_backward_activation: empty batch, nothing to do");
        return Ok(());
    }
    if upstream.dim() != forward_output.dim() {
        return Err(ActivationError::shape_mismatch(
            "upstream gradient",
            forward_output.dim(),
            upstream.dim(),
        ));
    }
    if output_gradient.dim() != forward_output.dim() {
        return Err(ActivationError::shape_mismatch(
            "output gradient",
            forward_output.dim(),
            output_gradient.dim(),
        ));
    }
    apply_backward(upstream, forward_output, output_gradient, activation);
    Ok(())
}

fn apply_forward(mut output: ArrayViewMut2<Float>, input: ArrayView2<Float>, activation: &Activation) {
    trace!(
        "forward {}: {} samples of width {}",
        activation,
        input.nrows(),
        input.ncols()
    );

    Zip::from(output.axis_iter_mut(Axis(0)))
        .and(input.axis_iter(Axis(0)))
        .par_for_each(|out_row, in_row| activation.f_vector(in_row, out_row));
}

fn apply_backward(
    upstream: ArrayView2<Float>,
    forward_output: ArrayView2<Float>,
    mut output_gradient: ArrayViewMut2<Float>,
    activation: &Activation,
) {
    trace!(
        "backward {}: {} samples of width {}",
        activation,
        forward_output.nrows(),
        forward_output.ncols()
    );

    let rows = Zip::from(output_gradient.axis_iter_mut(Axis(0)))
        .and(upstream.axis_iter(Axis(0)))
        .and(forward_output.axis_iter(Axis(0)));

    if activation.one_hot() {
        rows.par_for_each(|mut grad, up, out| {
            Zip::from(&mut grad)
                .and(&up)
                .and(&out)
                .for_each(|g, &u, &y| *g = u * activation.df(y));
        });
    } else {
        debug!("backward {}: using dense Jacobian rows", activation);
        rows.par_for_each(|mut grad, up, out| {
            let mut jacobian_row = Array1::zeros(out.len());
            for (c, g) in grad.iter_mut().enumerate() {
                activation.jacobian_row_into(out, c, jacobian_row.view_mut());
                *g = up.dot(&jacobian_row);
            }
        });
    }
}
