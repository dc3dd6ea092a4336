//! Label encoding for output layers.
//!
//! Training targets for classification are built from the output
//! activation's [`Activation::scale`]: every entry starts at the low end of
//! the range and the entry for the true class is set to the high end.

use ndarray::{Array1, Array2};

use crate::activations::Activation;
use crate::error::{ActivationError, Result};
use crate::types::Float;

/// Target vector of length `width` for class `label`.
pub fn label_to_target(label: usize, width: usize, activation: &Activation) -> Result<Array1<Float>> {
    if label >= width {
        return Err(ActivationError::InvalidLabel { label, width });
    }
    let (low, high) = activation.scale();
    let mut target = Array1::from_elem(width, low);
    target[label] = high;
    Ok(target)
}

/// Target batch with one row per label.
pub fn labels_to_targets(labels: &[usize], width: usize, activation: &Activation) -> Result<Array2<Float>> {
    let mut targets = Array2::zeros((labels.len(), width));
    for (mut row, &label) in targets.rows_mut().into_iter().zip(labels) {
        row.assign(&label_to_target(label, width, activation)?);
    }
    Ok(targets)
}
