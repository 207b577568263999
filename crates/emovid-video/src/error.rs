use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Open(String),
    Decode(String),
    Stream(String),
    Config(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Open(msg) => write!(f, "open error: {msg}"),
            VideoError::Decode(msg) => write!(f, "decode error: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<emovid_base::TensorError> for VideoError {
    fn from(err: emovid_base::TensorError) -> Self {
        VideoError::Decode(err.to_string())
    }
}
