use crate::{FrameStream, VideoError, VideoFrame};
use emovid_base::Tensor;
use log::{debug, info, warn};
use opencv::{prelude::*, videoio};
use std::path::Path;

/// `FrameStream` over a video file, decoded by OpenCV.
///
/// `CAP_ANY` lets OpenCV pick the platform backend (FFmpeg/GStreamer on
/// Linux, AVFoundation on macOS, Media Foundation on Windows).
pub struct VideoFileStream {
    capture: videoio::VideoCapture,
    closed: bool,
}

impl VideoFileStream {
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| VideoError::Open(format!("path is not valid UTF-8: {}", path.display())))?;

        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)
            .map_err(|e| VideoError::Open(format!("{}: {e}", path.display())))?;

        let opened = capture
            .is_opened()
            .map_err(|e| VideoError::Open(e.to_string()))?;
        if !opened {
            return Err(VideoError::Open(format!(
                "failed to open video file: {}",
                path.display()
            )));
        }

        let fps = capture.get(videoio::CAP_PROP_FPS).unwrap_or(0.0);
        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH).unwrap_or(0.0);
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0);
        info!(
            "opened {} ({}x{} @ {:.2} fps)",
            path.display(),
            width as u32,
            height as u32,
            fps
        );

        Ok(Self {
            capture,
            closed: false,
        })
    }
}

impl FrameStream for VideoFileStream {
    fn read_frame(&mut self) -> Result<Option<VideoFrame>, VideoError> {
        if self.closed {
            return Err(VideoError::Stream("stream is closed".to_string()));
        }

        let mut mat = Mat::default();
        let got = self
            .capture
            .read(&mut mat)
            .map_err(|e| VideoError::Decode(e.to_string()))?;
        if !got || mat.empty() {
            debug!("end of stream");
            return Ok(None);
        }

        if !mat.is_continuous() {
            return Err(VideoError::Decode("frame buffer is not continuous".to_string()));
        }

        let height = mat.rows() as usize;
        let width = mat.cols() as usize;
        let bytes = mat
            .data_bytes()
            .map_err(|e| VideoError::Decode(e.to_string()))?;
        if bytes.len() != height * width * 3 {
            return Err(VideoError::Decode(format!(
                "expected {}x{}x3 BGR frame, got {} bytes",
                height,
                width,
                bytes.len()
            )));
        }

        let pixels = Tensor::new(vec![height, width, 3], bytes.to_vec())?;
        Ok(Some(VideoFrame::Bgr(pixels)))
    }

    fn current_timestamp_ms(&self) -> Result<f64, VideoError> {
        self.capture
            .get(videoio::CAP_PROP_POS_MSEC)
            .map_err(|e| VideoError::Stream(e.to_string()))
    }

    fn close(&mut self) -> Result<(), VideoError> {
        if !self.closed {
            self.capture
                .release()
                .map_err(|e| VideoError::Stream(e.to_string()))?;
            self.closed = true;
        }
        Ok(())
    }
}

impl Drop for VideoFileStream {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = self.capture.release() {
                warn!("failed to release video capture: {e}");
            }
        }
    }
}
