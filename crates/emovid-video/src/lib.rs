pub mod error;
pub mod file_stream;
pub mod frame;
pub mod sampler;
pub mod stream;

pub use error::VideoError;
pub use file_stream::VideoFileStream;
pub use frame::VideoFrame;
pub use sampler::{DEFAULT_SAMPLING_INTERVAL, FrameSampler, SampledFrame};
pub use stream::FrameStream;
