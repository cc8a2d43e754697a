//! Pure tone generation
//!
//! Provides the sine oscillator every sound effect is built from.

use crate::{sample_count, SAMPLE_RATE};
use std::f64::consts::PI;

/// Amplitude used by [`sine`] when none is given
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Generate a sine tone
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude
///
/// # Returns
/// `round(duration * sample_rate)` samples in `-amplitude..=amplitude`
pub fn sine_wave(frequency: f64, duration: f64, sample_rate: u32, amplitude: f64) -> Vec<f64> {
    let num_samples = sample_count(duration, sample_rate);
    let omega = 2.0 * PI * frequency / sample_rate as f64;

    (0..num_samples)
        .map(|i| amplitude * (omega * i as f64).sin())
        .collect()
}

/// Generate a sine tone at [`SAMPLE_RATE`] with [`DEFAULT_AMPLITUDE`]
pub fn sine(frequency: f64, duration: f64) -> Vec<f64> {
    sine_wave(frequency, duration, SAMPLE_RATE, DEFAULT_AMPLITUDE)
}
