//! Mixing and WAV export
//!
//! Provides track mixing, PCM conversion and WAV file output.

use crate::ExportError;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Convert f64 samples (-1.0 to 1.0) to PCM i16
///
/// Samples are clamped to -1.0..=1.0, scaled by `i16::MAX` and truncated
/// toward zero, so the output range is symmetric (-32767..=32767).
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| {
            let clamped = s.clamp(-1.0, 1.0);
            (clamped * i16::MAX as f64) as i16
        })
        .collect()
}

/// Convert PCM i16 samples to f64 (-1.0 to 1.0)
pub fn from_pcm_i16(samples: &[i16]) -> Vec<f64> {
    samples
        .iter()
        .map(|&s| s as f64 / i16::MAX as f64)
        .collect()
}

/// Mix tracks together by averaging them
///
/// The result is as long as the longest track. Every sample is divided by
/// the total track count, and a track stops contributing once it runs out,
/// so the tail past a shorter track is quieter rather than renormalized.
///
/// # Example
/// ```
/// use crossy_sfx::*;
///
/// let low = sine(261.63, 0.1);
/// let high = sine(523.25, 0.1);
/// let chord = mix(&[&low, &high]);
/// assert_eq!(chord.len(), low.len());
/// ```
pub fn mix(tracks: &[&[f64]]) -> Vec<f64> {
    let Some(max_len) = tracks.iter().map(|t| t.len()).max() else {
        return Vec::new();
    };
    let track_count = tracks.len() as f64;

    let mut result = vec![0.0; max_len];
    for track in tracks {
        for (out, &sample) in result.iter_mut().zip(track.iter()) {
            *out += sample / track_count;
        }
    }

    result
}

/// Write samples to a mono 16-bit PCM WAV file
///
/// Any existing file at `path` is overwritten. The parent directory must
/// already exist. The file is closed before this returns, whether or not
/// the write succeeded.
///
/// # Arguments
/// * `path` - Output file path
/// * `samples` - Audio samples in -1.0 to 1.0 range (clamped on output)
/// * `sample_rate` - Sample rate in Hz
pub fn write_wav(path: &Path, samples: &[f64], sample_rate: u32) -> Result<(), ExportError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    for sample in to_pcm_i16(samples) {
        writer.write_sample(sample).map_err(write_err)?;
    }
    writer.finalize().map_err(write_err)?;

    tracing::debug!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate,
        "Wrote WAV file"
    );

    Ok(())
}
