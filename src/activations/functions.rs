use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use serde::{Deserialize, Serialize};

use super::softmax::Softmax;
use crate::error::ActivationError;
use crate::types::Float;

/// Slope applied to negative inputs by [`Activation::LeakyRelu`].
pub const LEAKY_RELU_SLOPE: Float = 0.01;

/// An enumeration of the activation functions a layer can apply.
///
/// Variants are stateless tags, so one value can be shared freely across
/// threads and calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[serde(alias = "linear")]
    Identity,
    Sigmoid,
    #[default]
    #[serde(alias = "rectified_linear")]
    Relu,
    LeakyRelu,
    Elu,
    Softmax,
    #[serde(alias = "tan_h")]
    Tanh,
    #[serde(alias = "tan_hp1m2")]
    TanhRescaled,
}

impl Activation {
    /// Every activation variant.
    pub const ALL: [Activation; 8] = [
        Activation::Identity,
        Activation::Sigmoid,
        Activation::Relu,
        Activation::LeakyRelu,
        Activation::Elu,
        Activation::Softmax,
        Activation::Tanh,
        Activation::TanhRescaled,
    ];

    /// Forward value at `index` of the sample `input`.
    ///
    /// Element-wise variants only read `input[index]`; softmax reads the
    /// whole sample. `index` must be in bounds.
    pub fn f(&self, input: ArrayView1<Float>, index: usize) -> Float {
        let x = input[index];
        match self {
            Activation::Identity => x,
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Relu => x.max(0.0),
            Activation::LeakyRelu => {
                if x > 0.0 { x } else { LEAKY_RELU_SLOPE * x }
            }
            Activation::Elu => {
                if x < 0.0 { x.exp_m1() } else { x }
            }
            Activation::Softmax => Softmax::at(input, index),
            Activation::Tanh => x.tanh(),
            // e^x / (e^x + e^-x), rewritten so large |x| cannot overflow
            Activation::TanhRescaled => 1.0 / (1.0 + (-2.0 * x).exp()),
        }
    }

    /// Forward values for every position of one sample.
    ///
    /// `output` must already have the length of `input`.
    pub fn f_vector(&self, input: ArrayView1<Float>, mut output: ArrayViewMut1<Float>) {
        match self {
            Activation::Softmax => Softmax::apply(input, output),
            _ => {
                for (i, y) in output.iter_mut().enumerate() {
                    *y = self.f(input, i);
                }
            }
        }
    }

    /// Derivative with respect to the pre-activation, in terms of the
    /// output `y = f(x)`.
    pub fn df(&self, y: Float) -> Float {
        match self {
            Activation::Identity => 1.0,
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Relu => {
                if y > 0.0 { 1.0 } else { 0.0 }
            }
            Activation::LeakyRelu => {
                if y > 0.0 { 1.0 } else { LEAKY_RELU_SLOPE }
            }
            Activation::Elu => {
                if y > 0.0 { 1.0 } else { 1.0 + y }
            }
            Activation::Softmax => Softmax::derivative(y),
            Activation::Tanh => 1.0 - y * y,
            Activation::TanhRescaled => 2.0 * y * (1.0 - y),
        }
    }

    /// Jacobian row `index`: derivatives of output `index` with respect to
    /// every input of the sample, given the forward outputs.
    pub fn jacobian_row(&self, output: ArrayView1<Float>, index: usize) -> Array1<Float> {
        let mut row = Array1::zeros(output.len());
        self.jacobian_row_into(output, index, row.view_mut());
        row
    }

    /// Like [`Activation::jacobian_row`], writing into a pre-sized buffer.
    pub fn jacobian_row_into(
        &self,
        output: ArrayView1<Float>,
        index: usize,
        mut row: ArrayViewMut1<Float>,
    ) {
        match self {
            Activation::Softmax => Softmax::jacobian_row_into(output, index, row),
            _ => {
                row.fill(0.0);
                row[index] = self.df(output[index]);
            }
        }
    }

    /// Whether the Jacobian is diagonal, letting the backward pass multiply
    /// element-wise instead of taking a dot product per position.
    pub fn one_hot(&self) -> bool {
        !matches!(self, Activation::Softmax)
    }

    /// Target output range `(low, high)` for encoding labels when this
    /// activation is used at the output layer.
    pub fn scale(&self) -> (Float, Float) {
        match self {
            Activation::Softmax => (0.0, 1.0),
            Activation::Tanh => (-0.8, 0.8),
            _ => (0.1, 0.9),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "identity",
            Activation::Sigmoid => "sigmoid",
            Activation::Relu => "relu",
            Activation::LeakyRelu => "leaky_relu",
            Activation::Elu => "elu",
            Activation::Softmax => "softmax",
            Activation::Tanh => "tanh",
            Activation::TanhRescaled => "tanh_rescaled",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "linear" => Ok(Activation::Identity),
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" | "rectified_linear" => Ok(Activation::Relu),
            "leaky_relu" => Ok(Activation::LeakyRelu),
            "elu" => Ok(Activation::Elu),
            "softmax" => Ok(Activation::Softmax),
            "tanh" | "tan_h" => Ok(Activation::Tanh),
            "tanh_rescaled" | "tan_hp1m2" => Ok(Activation::TanhRescaled),
            _ => Err(ActivationError::unknown_activation(s)),
        }
    }
}
