use log::warn;
use ndarray::ArrayView2;

use crate::types::Float;

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
}

/// Check a batch of activations or gradients for non-finite values
pub fn check_batch(batch: ArrayView2<Float>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let mut nan_count = 0;
    let mut inf_count = 0;

    for &value in batch.iter() {
        if value.is_nan() {
            nan_count += 1;
        } else if value.is_infinite() {
            inf_count += 1;
        }
    }

    if nan_count > 0 {
        issues.push(NumericalIssue::NaN { count: nan_count });
        warn!("Found {} NaN values in batch of shape {:?}", nan_count, batch.dim());
    }
    if inf_count > 0 {
        issues.push(NumericalIssue::Infinity { count: inf_count });
        warn!("Found {} infinite values in batch of shape {:?}", inf_count, batch.dim());
    }

    issues
}

/// Check if values are in a reasonable range
pub fn check_value_range(batch: ArrayView2<Float>, min_val: Float, max_val: Float) -> bool {
    batch.iter().all(|&x| x >= min_val && x <= max_val)
}
