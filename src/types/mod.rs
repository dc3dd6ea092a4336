//! Numeric primitives shared by the whole crate.
//!
//! The scalar precision is a build-wide choice: `f32` by default, `f64` with
//! the `f64` cargo feature. Every sample vector and batch uses the same scalar.

use ndarray::{Array1, Array2};

/// Scalar type used by every activation and batch routine.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// Scalar type used by every activation and batch routine.
#[cfg(feature = "f64")]
pub type Float = f64;

/// One sample's activations at a layer. Length is the layer width.
pub type SampleVector = Array1<Float>;

/// A batch of samples, one row per sample. All rows share the layer width.
pub type Batch = Array2<Float>;
