use serde::Serialize;
use std::fmt;

/// Number of classes in the trained model's output layer.
pub const EMOTION_LABEL_COUNT: usize = 8;

/// Emotion classes in model output order.
///
/// The variant order is the class-index order of the trained weights.
/// Reordering it without retraining scrambles every prediction, so it
/// never changes independently of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmotionLabel {
    Anger,
    Focus,
    Frustration,
    Happiness,
    Neutral,
    Stress,
    Surprise,
    Unclear,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; EMOTION_LABEL_COUNT] = [
        EmotionLabel::Anger,
        EmotionLabel::Focus,
        EmotionLabel::Frustration,
        EmotionLabel::Happiness,
        EmotionLabel::Neutral,
        EmotionLabel::Stress,
        EmotionLabel::Surprise,
        EmotionLabel::Unclear,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anger => "Anger",
            EmotionLabel::Focus => "Focus",
            EmotionLabel::Frustration => "Frustration",
            EmotionLabel::Happiness => "Happiness",
            EmotionLabel::Neutral => "Neutral",
            EmotionLabel::Stress => "Stress",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Unclear => "Unclear",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
