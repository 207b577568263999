use crate::{Backend, InferError, ModelSource};
use emovid_base::Tensor;
use log::debug;

use super::labels::{EMOTION_LABEL_COUNT, EmotionLabel};
use super::preprocess::preprocess;

/// Frame-level emotion classifier over a loaded model session.
///
/// Wraps preprocessing, inference, and index-to-label mapping into a
/// single `classify` call. The session is reused across frames; there is
/// no shared mutable state beyond it, and callers are sequential.
pub struct EmotionClassifier {
    session: Box<dyn crate::Session>,
    input_name: String,
    output_name: String,
}

impl EmotionClassifier {
    /// Load the model through `backend` and prepare it for inference.
    ///
    /// The model must expose exactly one input and one output. The output
    /// width itself is only visible at run time, so a width other than
    /// `EMOTION_LABEL_COUNT` is rejected by the first `classify` call.
    pub fn new(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;

        let input_name = match session.input_names() {
            [name] => name.clone(),
            names => {
                return Err(InferError::ModelLoad(format!(
                    "expected a single model input, got {names:?}"
                )));
            }
        };
        let output_name = match session.output_names() {
            [name] => name.clone(),
            names => {
                return Err(InferError::ModelLoad(format!(
                    "expected a single model output, got {names:?}"
                )));
            }
        };
        debug!("classifier ready (input '{input_name}', output '{output_name}')");

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    /// Classify one RGB frame (`[H, W, 3]` u8).
    ///
    /// Runs the full preprocess → infer → argmax chain and maps the
    /// winning class index onto `EmotionLabel`.
    pub fn classify(&mut self, image: &Tensor<u8>) -> Result<EmotionLabel, InferError> {
        let input = preprocess(image)?;

        let mut outputs = self.session.run(&[(self.input_name.as_str(), input)])?;
        let scores = outputs.remove(&self.output_name).ok_or_else(|| {
            InferError::Backend(format!("model produced no output '{}'", self.output_name))
        })?;

        if scores.len() != EMOTION_LABEL_COUNT {
            return Err(InferError::ClassCount {
                expected: EMOTION_LABEL_COUNT,
                got: scores.len(),
            });
        }

        let index = argmax(&scores.data)
            .ok_or_else(|| InferError::Backend("no finite score in model output".to_string()))?;
        EmotionLabel::from_index(index)
            .ok_or_else(|| InferError::Backend(format!("class index {index} out of range")))
    }
}

/// Index of the highest score.
///
/// Ties resolve to the lowest index: only a strictly greater score
/// displaces the current winner. That rule is local to this function and
/// not assumed to match other numeric backends. NaN scores never win.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ if score.is_nan() => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
