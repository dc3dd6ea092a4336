//! # Activation Functions Module
//!
//! This module provides the nonlinearities applied at the output of a layer,
//! together with their derivatives for backpropagation.
//!
//! ## Available Activations
//!
//! - **Identity**: `x` - No transformation
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **ReLU** (Rectified Linear Unit): `max(0, x)`
//! - **LeakyReLU**: ReLU with a `0.01` slope for negative inputs
//! - **ELU** (Exponential Linear Unit): `e^x - 1` for negative inputs
//! - **Tanh**: Hyperbolic tangent - Outputs between -1 and 1
//! - **TanhRescaled**: `e^x / (e^x + e^(-x))` - Tanh squeezed into (0, 1)
//! - **Softmax**: Normalized exponentials over the whole sample
//!
//! ## Derivatives
//!
//! Every derivative is expressed in terms of the activation's *output* `y`
//! rather than its input, so the backward pass only needs the values kept
//! from the forward pass.
//!
//! All activations except softmax are element-wise: output `i` depends only
//! on input `i`, and the Jacobian is diagonal ([`Activation::one_hot`] is
//! `true`). Softmax couples every output to every input and needs full
//! Jacobian rows.
//!
//! ## Usage Example
//!
//! ```rust
//! use nonlin::activations::Activation;
//! use ndarray::array;
//!
//! let input = array![1.0, 2.0, 3.0];
//! let softmax = Activation::Softmax;
//!
//! let p0 = softmax.f(input.view(), 0);
//! assert!(p0 > 0.0 && p0 < 1.0);
//! assert!(!softmax.one_hot());
//!
//! let relu: Activation = "relu".parse().unwrap();
//! assert_eq!(relu.f(input.view(), 2), 3.0);
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **Hidden Layers**: ReLU, LeakyReLU or ELU
//! - **Output Layer**:
//!   - Binary classification: Sigmoid
//!   - Multi-class classification: Softmax
//!   - Regression: Identity
//!
//! [`Activation::scale`] gives the target range to encode labels with when
//! the activation sits on the output layer (see [`crate::targets`]).

pub mod functions;
pub mod softmax;

pub use functions::{Activation, LEAKY_RELU_SLOPE};
pub use softmax::Softmax;
