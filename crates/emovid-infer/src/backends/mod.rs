pub mod onnx;

pub use onnx::OnnxBackend;
