//! High-level synthesizer API
//!
//! Builds the game's sound effects out of oscillators, envelopes and the
//! mixer.

use crate::envelope::Envelope;
use crate::export::mix;
use crate::oscillators::sine_wave;
use crate::sample_count;
use std::f64::consts::PI;

/// One term of a harmonic sum: a frequency multiple and its amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Multiple of the fundamental frequency (1.0 = fundamental)
    pub multiple: f64,
    /// Peak amplitude of this partial
    pub amplitude: f64,
}

impl Partial {
    pub const fn new(multiple: f64, amplitude: f64) -> Self {
        Self { multiple, amplitude }
    }
}

/// C major triad (C5, E5, G5) with per-note amplitudes
const CHIME_NOTES: [(f64, f64); 3] = [(523.25, 0.3), (659.25, 0.25), (783.99, 0.2)];
const CHIME_DURATION: f64 = 0.15;

const THUD_START_FREQ: f64 = 300.0;
const THUD_END_FREQ: f64 = 150.0;
const THUD_DURATION: f64 = 0.3;
const THUD_PARTIALS: [Partial; 3] = [
    Partial::new(1.0, 0.5),
    Partial::new(2.0, 0.2),
    Partial::new(3.0, 0.1),
];

/// High-level synthesizer for generating sound effects
///
/// # Example
/// ```
/// use crossy_sfx::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
/// let chime = synth.move_chime();
/// let thud = synth.hit_thud();
/// assert_eq!(chime.len(), 6615);
/// assert_eq!(thud.len(), 13230);
/// ```
pub struct Synth {
    sample_rate: u32,
}

impl Synth {
    /// Create a new synthesizer with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generate a sine tone with envelope
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `amplitude` - Peak amplitude before the envelope
    /// * `envelope` - ADSR envelope to apply
    pub fn tone(
        &self,
        frequency: f64,
        duration: f64,
        amplitude: f64,
        envelope: Envelope,
    ) -> Vec<f64> {
        let mut samples = sine_wave(frequency, duration, self.sample_rate, amplitude);
        envelope.apply(&mut samples, self.sample_rate);
        samples
    }

    /// Generate a harmonic tone whose pitch glides linearly between two frequencies
    ///
    /// At sample `i` of `n` the fundamental is
    /// `start_freq + (end_freq - start_freq) * i / n`. Every partial follows
    /// the gliding fundamental and is evaluated at the absolute time
    /// `i / sample_rate`, so no phase is accumulated between samples.
    ///
    /// # Arguments
    /// * `start_freq` - Starting frequency in Hz
    /// * `end_freq` - Ending frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `partials` - Harmonics to sum at each sample
    /// * `envelope` - ADSR envelope to apply
    pub fn harmonic_sweep(
        &self,
        start_freq: f64,
        end_freq: f64,
        duration: f64,
        partials: &[Partial],
        envelope: Envelope,
    ) -> Vec<f64> {
        let num_samples = sample_count(duration, self.sample_rate);
        let sample_rate = self.sample_rate as f64;

        let mut samples: Vec<f64> = (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let progress = i as f64 / num_samples as f64;
                let freq = start_freq + (end_freq - start_freq) * progress;

                partials
                    .iter()
                    .map(|p| p.amplitude * (2.0 * PI * freq * p.multiple * t).sin())
                    .sum()
            })
            .collect();

        envelope.apply(&mut samples, self.sample_rate);
        samples
    }

    // ========================================================================
    // Game sound effects
    // ========================================================================

    /// Bright chime for a player move
    ///
    /// A C major triad, each note shaped by [`Envelope::chime`] and the
    /// three notes averaged together.
    pub fn move_chime(&self) -> Vec<f64> {
        let notes: Vec<Vec<f64>> = CHIME_NOTES
            .iter()
            .map(|&(freq, amplitude)| {
                self.tone(freq, CHIME_DURATION, amplitude, Envelope::chime())
            })
            .collect();

        let tracks: Vec<&[f64]> = notes.iter().map(Vec::as_slice).collect();
        mix(&tracks)
    }

    /// Soft descending "bonk" for a collision
    ///
    /// A 300Hz to 150Hz glide with second and third harmonics, shaped by
    /// [`Envelope::thud`].
    pub fn hit_thud(&self) -> Vec<f64> {
        self.harmonic_sweep(
            THUD_START_FREQ,
            THUD_END_FREQ,
            THUD_DURATION,
            &THUD_PARTIALS,
            Envelope::thud(),
        )
    }
}
