pub mod backend;
pub mod backends;
pub mod device;
pub mod emotion;
pub mod error;
pub mod modelsource;
pub mod session;

pub use backend::Backend;
pub use device::Device;
pub use emotion::{
    EMOTION_LABEL_COUNT, EmotionClassifier, EmotionLabel, NORM_MEAN, NORM_STD, TARGET_SIZE,
    argmax, preprocess,
};
pub use error::InferError;
pub use modelsource::ModelSource;
pub use session::Session;
