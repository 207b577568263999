use crate::InferError;
use emovid_base::Tensor;
use std::collections::HashMap;

/// A loaded model ready to run. Inference is read-only model state;
/// identical inputs produce identical outputs.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
