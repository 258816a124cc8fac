//! Tone span detector CLI.
//!
//! Scans a WAV file for spans of monotonic audio and prints them as
//! JSON. Usage: `tonespan <audio.wav> [config.json] [time_unit]`.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};

use tonespan::{logging, DetectorConfig, TimeUnit, ToneSpanDetector, WavSource};

fn main() -> Result<ExitCode> {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(audio_path) = args.get(1) else {
        eprintln!("tonespan v{}", tonespan::version());
        eprintln!("Usage: tonespan <audio.wav> [config.json] [seconds|milliseconds]");
        return Ok(ExitCode::from(2));
    };

    let mut config = match args.get(2) {
        Some(path) => DetectorConfig::load(Path::new(path))
            .with_context(|| format!("loading config {}", path))?,
        None => DetectorConfig::default(),
    };

    // Output unit override on top of whatever the config file says.
    if let Some(unit) = args.get(3) {
        config.time_unit = TimeUnit::parse(unit).ok_or_else(|| {
            anyhow!("unknown time unit '{}', expected seconds or milliseconds", unit)
        })?;
    }

    tracing::info!(
        sample_size = config.sample_size,
        tolerance = config.tolerance,
        length_threshold_ms = config.length_threshold_ms,
        time_unit = %config.time_unit,
        "starting scan"
    );

    let detector = ToneSpanDetector::new(config)?;
    let mut source = WavSource::open(Path::new(audio_path))?;
    let spans = detector.scan(&mut source)?;

    tracing::info!(spans = spans.len(), "scan finished");
    println!("{}", serde_json::to_string_pretty(&spans)?);

    Ok(ExitCode::SUCCESS)
}
