pub mod gradient_check;
pub mod numerical_check;

pub use gradient_check::check_activation_gradients;
pub use numerical_check::{check_batch, check_value_range, NumericalIssue};
