use emovid_base::{Tensor, TensorError};

#[test]
fn test_new_accepts_matching_length() {
    let t = Tensor::new(vec![2, 2, 3], vec![0u8; 12]).unwrap();
    assert_eq!(t.shape, vec![2, 2, 3]);
    assert_eq!(t.len(), 12);
    assert_eq!(t.ndim(), 3);
}

#[test]
fn test_new_rejects_length_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0f32; 5]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::LengthMismatch {
            expected: 6,
            got: 5
        }
    );
}

#[test]
fn test_new_rejects_shape_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 3], vec![]);
    assert_eq!(result.unwrap_err(), TensorError::DimOverflow);
}

#[test]
fn test_zeros() {
    let t = Tensor::<f32>::zeros(vec![1, 3, 4]).unwrap();
    assert_eq!(t.shape, vec![1, 3, 4]);
    assert!(t.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_empty_tensor() {
    let t = Tensor::<u8>::new(vec![0, 3], vec![]).unwrap();
    assert!(t.is_empty());
}
