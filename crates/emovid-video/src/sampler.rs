use crate::{FrameStream, VideoError, VideoFrame};
use log::debug;

/// Stride, in frames, between frames selected for inference.
pub const DEFAULT_SAMPLING_INTERVAL: u64 = 10;

/// One selected frame with the timestamp the stream reported for it.
#[derive(Debug)]
pub struct SampledFrame {
    /// Zero-based index of this frame within the source stream.
    pub index: u64,
    /// Presentation timestamp in milliseconds.
    pub timestamp_ms: f64,
    pub frame: VideoFrame,
}

/// Pulls frames from a stream and keeps every Nth one.
///
/// Maintains a zero-based frame counter; a frame is selected when
/// `counter % interval == 0`, so indices 0, N, 2N, ... are kept. The
/// timestamp is read from the stream at selection time. End of stream
/// closes the underlying handle and yields `None`; a stream with no
/// frames at all yields `None` on the first call.
pub struct FrameSampler<S> {
    stream: S,
    interval: u64,
    counter: u64,
}

impl<S: FrameStream> FrameSampler<S> {
    pub fn new(stream: S, interval: u64) -> Result<Self, VideoError> {
        if interval == 0 {
            return Err(VideoError::Config(
                "sampling interval must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            stream,
            interval,
            counter: 0,
        })
    }

    /// Advance to the next selected frame, or `None` at end of stream.
    ///
    /// Any decode failure mid-stream propagates as an error and aborts
    /// the pass; the stream handle is still released via drop.
    pub fn next_sample(&mut self) -> Result<Option<SampledFrame>, VideoError> {
        loop {
            let Some(frame) = self.stream.read_frame()? else {
                debug!("stream exhausted after {} frames", self.counter);
                self.stream.close()?;
                return Ok(None);
            };

            let index = self.counter;
            self.counter += 1;

            if index % self.interval == 0 {
                let timestamp_ms = self.stream.current_timestamp_ms()?;
                return Ok(Some(SampledFrame {
                    index,
                    timestamp_ms,
                    frame,
                }));
            }
        }
    }

    /// Total frames read from the stream so far, selected or not.
    pub fn frames_seen(&self) -> u64 {
        self.counter
    }
}
