use crate::InferError;
use emovid_base::Tensor;

/// Side length of the square model input.
pub const TARGET_SIZE: usize = 224;

/// Per-channel normalization constants from the training transform
/// (ImageNet statistics).
pub const NORM_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const NORM_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Preprocess an RGB frame for emotion classification.
///
/// Takes a `[H, W, 3]` u8 tensor, resizes it bilinearly to 224x224,
/// rescales to `[0, 1]`, and normalizes each channel with `NORM_MEAN` /
/// `NORM_STD`. Returns a `[1, 3, 224, 224]` NCHW tensor with the
/// singleton batch dimension included.
///
/// This must match the transform used at training time byte for byte in
/// spirit: a different resize filter or different constants does not fail,
/// it just quietly degrades accuracy. There is no runtime check possible
/// without ground truth, so treat any edit here as a model change.
pub fn preprocess(image: &Tensor<u8>) -> Result<Tensor<f32>, InferError> {
    if image.shape.len() != 3 || image.shape[2] != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", image.shape),
        });
    }
    let (h, w) = (image.shape[0], image.shape[1]);
    if h == 0 || w == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty image".to_string(),
            got: format!("{h}x{w}"),
        });
    }

    let scale_y = h as f32 / TARGET_SIZE as f32;
    let scale_x = w as f32 / TARGET_SIZE as f32;

    let mut nchw = vec![0.0f32; 3 * TARGET_SIZE * TARGET_SIZE];

    for out_y in 0..TARGET_SIZE {
        // Pixel-center mapping, the usual bilinear convention.
        let src_y = ((out_y as f32 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (src_y.floor() as usize).min(h - 1);
        let y1 = (y0 + 1).min(h - 1);
        let fy = src_y - y0 as f32;

        for out_x in 0..TARGET_SIZE {
            let src_x = ((out_x as f32 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (src_x.floor() as usize).min(w - 1);
            let x1 = (x0 + 1).min(w - 1);
            let fx = src_x - x0 as f32;

            for ch in 0..3 {
                let p00 = image.data[(y0 * w + x0) * 3 + ch] as f32;
                let p01 = image.data[(y0 * w + x1) * 3 + ch] as f32;
                let p10 = image.data[(y1 * w + x0) * 3 + ch] as f32;
                let p11 = image.data[(y1 * w + x1) * 3 + ch] as f32;

                let top = p00 + (p01 - p00) * fx;
                let bottom = p10 + (p11 - p10) * fx;
                let value = top + (bottom - top) * fy;

                let dst = ch * TARGET_SIZE * TARGET_SIZE + out_y * TARGET_SIZE + out_x;
                nchw[dst] = (value / 255.0 - NORM_MEAN[ch]) / NORM_STD[ch];
            }
        }
    }

    Ok(Tensor::new(vec![1, 3, TARGET_SIZE, TARGET_SIZE], nchw)?)
}
