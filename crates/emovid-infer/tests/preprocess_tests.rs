use emovid_base::Tensor;
use emovid_infer::{InferError, NORM_MEAN, NORM_STD, TARGET_SIZE, preprocess};

#[test]
fn test_output_is_nchw_with_batch_dimension() {
    let image = Tensor::<u8>::zeros(vec![480, 640, 3]).unwrap();
    let out = preprocess(&image).unwrap();
    assert_eq!(out.shape, vec![1, 3, TARGET_SIZE, TARGET_SIZE]);
}

#[test]
fn test_uniform_image_normalizes_per_channel() {
    // A solid mid-gray frame: every output value of channel c must be
    // (128/255 - mean[c]) / std[c] regardless of resize.
    let image = Tensor::new(vec![100, 160, 3], vec![128u8; 100 * 160 * 3]).unwrap();
    let out = preprocess(&image).unwrap();

    let plane = TARGET_SIZE * TARGET_SIZE;
    for ch in 0..3 {
        let expected = (128.0 / 255.0 - NORM_MEAN[ch]) / NORM_STD[ch];
        for &v in &out.data[ch * plane..(ch + 1) * plane] {
            assert!((v - expected).abs() < 1e-5, "channel {ch}: {v} vs {expected}");
        }
    }
}

#[test]
fn test_identity_size_input() {
    let image =
        Tensor::new(vec![TARGET_SIZE, TARGET_SIZE, 3], vec![255u8; TARGET_SIZE * TARGET_SIZE * 3])
            .unwrap();
    let out = preprocess(&image).unwrap();
    let expected = (1.0 - NORM_MEAN[0]) / NORM_STD[0];
    assert!((out.data[0] - expected).abs() < 1e-5);
}

#[test]
fn test_rejects_wrong_rank() {
    let image = Tensor::<u8>::zeros(vec![10, 10]).unwrap();
    assert!(matches!(
        preprocess(&image),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_rejects_wrong_channel_count() {
    let image = Tensor::<u8>::zeros(vec![10, 10, 4]).unwrap();
    assert!(matches!(
        preprocess(&image),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_rejects_empty_image() {
    let image = Tensor::<u8>::zeros(vec![0, 10, 3]).unwrap();
    assert!(matches!(
        preprocess(&image),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_deterministic() {
    let data: Vec<u8> = (0..30 * 40 * 3).map(|i| (i % 251) as u8).collect();
    let image = Tensor::new(vec![30, 40, 3], data).unwrap();
    let a = preprocess(&image).unwrap();
    let b = preprocess(&image).unwrap();
    assert_eq!(a.data, b.data);
}
