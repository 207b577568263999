use crate::report::{PredictionRecord, ResultWriter};
use emovid_infer::EmotionClassifier;
use emovid_video::{FrameSampler, FrameStream};
use log::{debug, info};

/// One full pass over the video: sample → preprocess → infer → record.
///
/// Strictly sequential; each selected frame is fully classified before the
/// next frame is read. Ends when the stream is exhausted. Any decode or
/// inference error aborts the pass with no output written.
pub fn run<S: FrameStream>(
    mut sampler: FrameSampler<S>,
    classifier: &mut EmotionClassifier,
) -> anyhow::Result<ResultWriter> {
    let mut results = ResultWriter::new();

    while let Some(sample) = sampler.next_sample()? {
        let rgb = sample.frame.into_rgb();
        let emotion = classifier.classify(&rgb)?;
        debug!(
            "frame {} @ {} ms -> {}",
            sample.index, sample.timestamp_ms, emotion
        );
        results.push(PredictionRecord::new(sample.timestamp_ms, emotion));
    }

    info!(
        "classified {} of {} frames",
        results.len(),
        sampler.frames_seen()
    );
    Ok(results)
}
