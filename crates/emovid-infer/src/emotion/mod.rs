mod classifier;
mod labels;
mod preprocess;

pub use classifier::{EmotionClassifier, argmax};
pub use labels::{EMOTION_LABEL_COUNT, EmotionLabel};
pub use preprocess::{NORM_MEAN, NORM_STD, TARGET_SIZE, preprocess};
