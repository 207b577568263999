use crate::{VideoError, VideoFrame};

/// Sequential, forward-only source of decoded frames.
///
/// `read_frame` returning `Ok(None)` is the normal end-of-stream signal,
/// not an error. Implementations own their underlying handle and must
/// release it in `close` and on drop.
pub trait FrameStream {
    /// Decode and return the next frame, or `None` at end of stream.
    fn read_frame(&mut self) -> Result<Option<VideoFrame>, VideoError>;

    /// Presentation timestamp, in milliseconds, the stream currently
    /// reports. Meaningful right after a successful `read_frame`.
    fn current_timestamp_ms(&self) -> Result<f64, VideoError>;

    /// Release the underlying handle. Idempotent.
    fn close(&mut self) -> Result<(), VideoError>;
}
