use emovid_base::Tensor;

/// One decoded frame, tagged with the channel order the decoder produced.
///
/// Pixel data is a `Tensor<u8>` with shape `[height, width, 3]`. OpenCV
/// decodes to BGR; the inference side wants RGB.
#[derive(Debug, Clone)]
pub enum VideoFrame {
    Bgr(Tensor<u8>),
    Rgb(Tensor<u8>),
}

impl VideoFrame {
    pub fn pixels(&self) -> &Tensor<u8> {
        match self {
            VideoFrame::Bgr(t) | VideoFrame::Rgb(t) => t,
        }
    }

    pub fn height(&self) -> usize {
        self.pixels().shape.first().copied().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.pixels().shape.get(1).copied().unwrap_or(0)
    }

    /// Consume the frame and return RGB pixel data, swapping the blue and
    /// red channels when the source was BGR.
    pub fn into_rgb(self) -> Tensor<u8> {
        match self {
            VideoFrame::Rgb(t) => t,
            VideoFrame::Bgr(mut t) => {
                for px in t.data.chunks_exact_mut(3) {
                    px.swap(0, 2);
                }
                t
            }
        }
    }
}
