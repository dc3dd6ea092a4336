//! # Nonlin - Activation Functions for Neural Networks
//!
//! Nonlin provides the activation layer of a neural-network toolkit: a closed
//! set of element-wise and vector-wise nonlinearities and the batch routines
//! that apply them, forward and backward, across every sample of a batch.
//!
//! ## Key Features
//!
//! - **Activations**: Identity, Sigmoid, ReLU, LeakyReLU, ELU, Tanh, rescaled Tanh and Softmax
//! - **Output-based derivatives**: Gradients computed from stored forward outputs
//! - **Stable Softmax**: Max-shifted exponentials, safe for large inputs
//! - **Parallel batches**: Samples processed concurrently on the rayon pool
//! - **Configurable precision**: `f32` scalars by default, `f64` behind a feature
//!
//! ## Quick Start
//!
//! ```rust
//! use nonlin::activations::Activation;
//! use nonlin::parallel::{backward_activation, forward_activation};
//! use ndarray::{array, Array2};
//!
//! let input = array![[0.0, 2.0], [-1.0, 1.0]];
//! let sigmoid = Activation::Sigmoid;
//!
//! let mut output = Array2::zeros(input.dim());
//! forward_activation(output.view_mut(), input.view(), &sigmoid);
//!
//! let upstream = Array2::ones(input.dim());
//! let mut gradient = Array2::zeros(input.dim());
//! backward_activation(upstream.view(), output.view(), gradient.view_mut(), &sigmoid);
//! assert!((gradient[[0, 0]] - 0.25).abs() < 1e-6);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions and their derivatives
//! - [`parallel`] - Forward and backward application over batches
//! - [`targets`] - Label encoding from an activation's target range
//! - [`debug`] - Numerical and gradient checks
//! - [`error`] - Error types and result handling
//! - [`types`] - Scalar, sample vector and batch types

pub mod activations;
pub mod debug;
pub mod error;
pub mod parallel;
pub mod targets;
pub mod types;

pub use activations::Activation;
pub use error::{ActivationError, Result};
pub use parallel::{backward_activation, forward_activation};
pub use types::{Batch, Float, SampleVector};

#[cfg(test)]
mod tests;
