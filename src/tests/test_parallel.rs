use ndarray::{array, Array2};
use crate::activations::Activation;
use crate::error::ActivationError;
use crate::parallel::{
    backward_activation, forward_activation, try_backward_activation, try_forward_activation,
};
use crate::types::Float;

const TOL: Float = 1e-6;

#[test]
fn test_forward_batch() {
    let input = array![[-1.0, 0.0, 2.0], [3.0, -4.0, 0.5]];
    let mut output = Array2::zeros(input.dim());
    forward_activation(output.view_mut(), input.view(), &Activation::Relu);
    assert_eq!(output, array![[0.0, 0.0, 2.0], [3.0, 0.0, 0.5]]);
}

#[test]
fn test_forward_batch_matches_per_index() {
    let input = array![[0.1, -0.7, 1.9, 3.3], [-2.0, 0.0, 0.4, 1.0], [5.0, 5.0, -5.0, 0.2]];
    for activation in Activation::ALL {
        let mut output = Array2::zeros(input.dim());
        forward_activation(output.view_mut(), input.view(), &activation);
        for (s, row) in input.rows().into_iter().enumerate() {
            for i in 0..row.len() {
                assert!((output[[s, i]] - activation.f(row, i)).abs() < TOL, "{}", activation);
            }
        }
    }
}

#[test]
fn test_forward_softmax_rows_sum_to_one() {
    let input = array![[1.0, 2.0, 3.0], [1000.0, 1000.0, 1000.0], [-50.0, 0.0, 50.0]];
    let mut output = Array2::zeros(input.dim());
    forward_activation(output.view_mut(), input.view(), &Activation::Softmax);
    for row in output.rows() {
        assert!((row.sum() - 1.0).abs() < TOL);
        assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }
    for &p in output.row(1).iter() {
        assert!((p - 1.0 / 3.0).abs() < TOL);
    }
}

#[test]
fn test_forward_is_deterministic() {
    let input = array![[0.3, -0.2, 0.9], [1.5, 2.5, -3.5]];
    for activation in Activation::ALL {
        let mut first = Array2::zeros(input.dim());
        let mut second = Array2::zeros(input.dim());
        forward_activation(first.view_mut(), input.view(), &activation);
        forward_activation(second.view_mut(), input.view(), &activation);
        assert_eq!(first, second);
    }
}

#[test]
fn test_forward_empty_batch_leaves_output_untouched() {
    let input: Array2<Float> = Array2::zeros((0, 3));
    let mut output = Array2::from_elem((2, 3), 7.0);
    forward_activation(output.view_mut(), input.view(), &Activation::Softmax);
    assert_eq!(output, Array2::from_elem((2, 3), 7.0));
    assert!(try_forward_activation(output.view_mut(), input.view(), &Activation::Sigmoid).is_ok());
    assert_eq!(output, Array2::from_elem((2, 3), 7.0));
}

#[test]
fn test_backward_sigmoid() {
    let forward_output = array![[0.5, 0.25]];
    let upstream = array![[1.0, 1.0]];
    let mut gradient = Array2::zeros((1, 2));
    backward_activation(upstream.view(), forward_output.view(), gradient.view_mut(), &Activation::Sigmoid);
    assert!((gradient[[0, 0]] - 0.25).abs() < TOL);
    assert!((gradient[[0, 1]] - 0.1875).abs() < TOL);
}

#[test]
fn test_backward_softmax() {
    let forward_output = array![[0.2, 0.8]];
    let upstream = array![[1.0, 0.0]];
    let mut gradient = Array2::zeros((1, 2));
    backward_activation(upstream.view(), forward_output.view(), gradient.view_mut(), &Activation::Softmax);
    assert!((gradient[[0, 0]] - 0.16).abs() < TOL);
    assert!((gradient[[0, 1]] - (-0.16)).abs() < TOL);
}

#[test]
fn test_backward_scales_upstream() {
    let forward_output = array![[0.5, 2.0], [-0.5, 0.0]];
    let upstream = array![[2.0, -3.0], [4.0, 5.0]];
    let mut gradient = Array2::zeros((2, 2));
    backward_activation(upstream.view(), forward_output.view(), gradient.view_mut(), &Activation::Relu);
    assert_eq!(gradient, array![[2.0, -3.0], [0.0, 0.0]]);
}

#[test]
fn test_backward_dense_matches_jacobian() {
    let input = array![[0.5, -1.0, 2.0], [3.0, 3.0, -3.0]];
    let mut output = Array2::zeros(input.dim());
    forward_activation(output.view_mut(), input.view(), &Activation::Softmax);

    let upstream = array![[0.3, -0.6, 1.2], [1.0, 0.0, -1.0]];
    let mut gradient = Array2::zeros(input.dim());
    backward_activation(upstream.view(), output.view(), gradient.view_mut(), &Activation::Softmax);

    for s in 0..input.nrows() {
        for c in 0..input.ncols() {
            let row = Activation::Softmax.jacobian_row(output.row(s), c);
            let expected = upstream.row(s).dot(&row);
            assert!((gradient[[s, c]] - expected).abs() < TOL);
        }
    }
}

#[test]
fn test_backward_empty_batch() {
    let empty: Array2<Float> = Array2::zeros((0, 4));
    let mut gradient = Array2::from_elem((1, 4), 3.0);
    backward_activation(empty.view(), empty.view(), gradient.view_mut(), &Activation::Softmax);
    assert_eq!(gradient, Array2::from_elem((1, 4), 3.0));
}

#[test]
#[should_panic(expected = "pre-sized")]
fn test_forward_shape_mismatch_panics() {
    let input = array![[1.0, 2.0]];
    let mut output = Array2::zeros((1, 3));
    forward_activation(output.view_mut(), input.view(), &Activation::Relu);
}

#[test]
#[should_panic(expected = "upstream gradient")]
fn test_backward_shape_mismatch_panics() {
    let forward_output = array![[0.1, 0.2]];
    let upstream = array![[1.0, 1.0, 1.0]];
    let mut gradient = Array2::zeros((1, 2));
    backward_activation(upstream.view(), forward_output.view(), gradient.view_mut(), &Activation::Relu);
}

#[test]
fn test_try_forward_reports_mismatch() {
    let input = array![[1.0, 2.0], [3.0, 4.0]];
    let mut output = Array2::zeros((2, 3));
    let err = try_forward_activation(output.view_mut(), input.view(), &Activation::Tanh).unwrap_err();
    assert!(matches!(err, ActivationError::DimensionMismatch { .. }));
    assert_eq!(output, Array2::<Float>::zeros((2, 3)));
}

#[test]
fn test_try_backward_reports_mismatch() {
    let forward_output = array![[0.1, 0.2]];
    let upstream = array![[1.0, 1.0]];
    let mut gradient = Array2::zeros((2, 2));
    let result = try_backward_activation(upstream.view(), forward_output.view(), gradient.view_mut(), &Activation::Sigmoid);
    match result {
        Err(ActivationError::DimensionMismatch { expected, actual }) => {
            assert!(expected.contains("output gradient"));
            assert_eq!(actual, "(2, 2)");
        }
        other => panic!("expected dimension mismatch, got {:?}", other),
    }
}

#[test]
fn test_try_variants_match_unchecked() {
    let input = array![[0.4, -0.4, 1.6]];
    let mut checked = Array2::zeros(input.dim());
    let mut unchecked = Array2::zeros(input.dim());
    try_forward_activation(checked.view_mut(), input.view(), &Activation::Elu).unwrap();
    forward_activation(unchecked.view_mut(), input.view(), &Activation::Elu);
    assert_eq!(checked, unchecked);

    let upstream = array![[1.0, 2.0, 3.0]];
    let mut checked_grad = Array2::zeros(input.dim());
    let mut unchecked_grad = Array2::zeros(input.dim());
    try_backward_activation(upstream.view(), checked.view(), checked_grad.view_mut(), &Activation::Elu).unwrap();
    backward_activation(upstream.view(), unchecked.view(), unchecked_grad.view_mut(), &Activation::Elu);
    assert_eq!(checked_grad, unchecked_grad);
}

#[test]
fn test_large_batch_in_parallel() {
    let input = Array2::from_shape_fn((512, 16), |(s, i)| (s as Float * 0.01) - (i as Float * 0.3));
    let mut output = Array2::zeros(input.dim());
    forward_activation(output.view_mut(), input.view(), &Activation::Softmax);
    for row in output.rows() {
        assert!((row.sum() - 1.0).abs() < 1e-5);
    }
}
