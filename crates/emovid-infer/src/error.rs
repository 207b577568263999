use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    ShapeMismatch { expected: String, got: String },
    ClassCount { expected: usize, got: usize },
    InvalidInput { name: String, expected_names: Vec<String> },
    UnsupportedDevice(Device),
    Backend(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::ClassCount { expected, got } => write!(
                f,
                "model output width {got} does not match the {expected} emotion labels"
            ),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(
                f,
                "unknown model input '{name}', expected one of {expected_names:?}"
            ),
            InferError::UnsupportedDevice(device) => {
                write!(f, "device not supported by this build: {device}")
            }
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<emovid_base::TensorError> for InferError {
    fn from(err: emovid_base::TensorError) -> Self {
        InferError::Backend(err.to_string())
    }
}
