mod pipeline;
mod report;

use anyhow::Context;
use clap::Parser;
use emovid_infer::backends::OnnxBackend;
use emovid_infer::{Device, EmotionClassifier, ModelSource};
use emovid_video::{DEFAULT_SAMPLING_INTERVAL, FrameSampler, VideoFileStream};
use log::info;
use std::path::PathBuf;

/// Sample frames from a video, classify each sampled frame's emotion, and
/// write the timestamped sequence to a JSON file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Video file to analyze
    #[arg(short, long)]
    video: PathBuf,

    /// ONNX model weights for the 8-class emotion classifier
    #[arg(short, long)]
    model: PathBuf,

    /// Analyze one frame every N frames
    #[arg(short, long, default_value_t = DEFAULT_SAMPLING_INTERVAL)]
    interval: u64,

    /// Output JSON file
    #[arg(short, long, default_value = "emotions.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    emovid_base::init_stdout_logger();
    let cli = Cli::parse();

    #[cfg(feature = "cuda")]
    let device = Device::Cuda { device_id: 0 };
    #[cfg(not(feature = "cuda"))]
    let device = Device::Cpu;

    info!("loading model {}", cli.model.display());
    let backend = OnnxBackend::new(device);
    let mut classifier = EmotionClassifier::new(ModelSource::File(cli.model.clone()), &backend)
        .with_context(|| format!("loading model {}", cli.model.display()))?;

    let stream = VideoFileStream::open(&cli.video)
        .with_context(|| format!("opening video {}", cli.video.display()))?;
    let sampler = FrameSampler::new(stream, cli.interval)?;

    let results = pipeline::run(sampler, &mut classifier)?;
    let count = results.len();
    results.write_to(&cli.output)?;

    println!(
        "Analysis complete. {count} predictions saved to '{}'",
        cli.output.display()
    );
    Ok(())
}
