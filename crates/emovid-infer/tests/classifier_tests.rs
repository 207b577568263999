use emovid_base::Tensor;
use emovid_infer::{
    Backend, EmotionClassifier, EmotionLabel, InferError, ModelSource, Session, argmax,
};
use std::collections::HashMap;

/// Session that returns a fixed score vector for any input.
struct FixedSession {
    input_names: Vec<String>,
    output_names: Vec<String>,
    scores: Vec<f32>,
}

impl Session for FixedSession {
    fn run(
        &mut self,
        _inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let tensor = Tensor::new(vec![1, self.scores.len()], self.scores.clone()).unwrap();
        Ok(HashMap::from([("logits".to_string(), tensor)]))
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

struct FixedBackend {
    scores: Vec<f32>,
}

impl Backend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load_model(&self, _model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        Ok(Box::new(FixedSession {
            input_names: vec!["input".to_string()],
            output_names: vec!["logits".to_string()],
            scores: self.scores.clone(),
        }))
    }
}

fn test_image() -> Tensor<u8> {
    Tensor::new(vec![4, 4, 3], vec![100u8; 48]).unwrap()
}

#[test]
fn test_classify_maps_argmax_to_label() {
    let backend = FixedBackend {
        scores: vec![0.1, 0.2, 0.0, 3.5, 0.4, 0.3, 0.2, 0.1],
    };
    let mut classifier =
        EmotionClassifier::new(ModelSource::Memory(Vec::new()), &backend).unwrap();
    assert_eq!(
        classifier.classify(&test_image()).unwrap(),
        EmotionLabel::Happiness
    );
}

#[test]
fn test_classify_is_deterministic() {
    let backend = FixedBackend {
        scores: vec![0.0, 0.0, 0.0, 0.0, 0.0, 9.0, 0.0, 0.0],
    };
    let mut classifier =
        EmotionClassifier::new(ModelSource::Memory(Vec::new()), &backend).unwrap();
    let image = test_image();
    let first = classifier.classify(&image).unwrap();
    for _ in 0..5 {
        assert_eq!(classifier.classify(&image).unwrap(), first);
    }
    assert_eq!(first, EmotionLabel::Stress);
}

#[test]
fn test_output_width_mismatch_is_fatal() {
    let backend = FixedBackend {
        scores: vec![0.5, 0.5, 0.5, 0.5, 0.5],
    };
    let mut classifier =
        EmotionClassifier::new(ModelSource::Memory(Vec::new()), &backend).unwrap();
    assert!(matches!(
        classifier.classify(&test_image()),
        Err(InferError::ClassCount {
            expected: 8,
            got: 5
        })
    ));
}

#[test]
fn test_tie_resolves_to_lowest_index() {
    let backend = FixedBackend {
        scores: vec![0.0, 2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0],
    };
    let mut classifier =
        EmotionClassifier::new(ModelSource::Memory(Vec::new()), &backend).unwrap();
    assert_eq!(
        classifier.classify(&test_image()).unwrap(),
        EmotionLabel::Focus
    );
}

#[test]
fn test_argmax_rules() {
    assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), Some(1));
    assert_eq!(argmax(&[-1.0, -5.0]), Some(0));
    assert_eq!(argmax(&[f32::NAN, 1.0]), Some(1));
    assert_eq!(argmax(&[]), None);
}

#[test]
fn test_multi_output_model_is_rejected() {
    struct TwoOutputBackend;
    impl Backend for TwoOutputBackend {
        fn name(&self) -> &str {
            "two-output"
        }
        fn load_model(&self, _model: ModelSource) -> Result<Box<dyn Session>, InferError> {
            Ok(Box::new(FixedSession {
                input_names: vec!["input".to_string()],
                output_names: vec!["a".to_string(), "b".to_string()],
                scores: vec![0.0; 8],
            }))
        }
    }

    let result = EmotionClassifier::new(ModelSource::Memory(Vec::new()), &TwoOutputBackend);
    assert!(matches!(result, Err(InferError::ModelLoad(_))));
}
