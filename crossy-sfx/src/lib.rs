//! Procedural sound effects for Crossy Politician
//!
//! Sounds are built from plain trigonometric synthesis: generate a tone,
//! shape it with an ADSR envelope, optionally mix several tones together,
//! and export the result as a mono 16-bit WAV file.
//!
//! # Example
//! ```no_run
//! use crossy_sfx::*;
//!
//! let synth = Synth::new(SAMPLE_RATE);
//!
//! // Render the movement chime
//! let chime = synth.move_chime();
//!
//! // Or build a custom sound from the same pieces
//! let mut tone = sine(440.0, 0.2);
//! Envelope::chime().apply(&mut tone, SAMPLE_RATE);
//! let mixed = mix(&[&chime, &tone]);
//!
//! write_wav(std::path::Path::new("custom.wav"), &mixed, SAMPLE_RATE)?;
//! # Ok::<(), ExportError>(())
//! ```

mod catalog;
mod envelope;
mod error;
mod export;
mod oscillators;
mod synth;

/// Output sample rate (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

// Oscillators
pub use oscillators::{sine, sine_wave, DEFAULT_AMPLITUDE};

// Envelope
pub use envelope::Envelope;

// Synth API
pub use synth::{Partial, Synth};

// Sound catalog
pub use catalog::SoundEffect;

// Mixing and export
pub use error::ExportError;
pub use export::{from_pcm_i16, mix, to_pcm_i16, write_wav};

/// Number of samples covering `duration` seconds at `sample_rate`
///
/// Rounds to the nearest sample. Non-positive or non-finite durations yield
/// zero samples.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    let samples = (duration * sample_rate as f64).round();
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.15, SAMPLE_RATE), 6615);
        assert_eq!(sample_count(0.3, SAMPLE_RATE), 13230);
        assert_eq!(sample_count(1.0, SAMPLE_RATE), SAMPLE_RATE as usize);
    }

    #[test]
    fn test_sample_count_rounds() {
        // Halves round away from zero
        assert_eq!(sample_count(0.375, 4), 2);
        assert_eq!(sample_count(0.625, 4), 3);
        assert_eq!(sample_count(0.25, 3), 1);
    }

    #[test]
    fn test_sample_count_invalid_duration() {
        assert_eq!(sample_count(0.0, SAMPLE_RATE), 0);
        assert_eq!(sample_count(-0.5, SAMPLE_RATE), 0);
        assert_eq!(sample_count(f64::NAN, SAMPLE_RATE), 0);
        assert_eq!(sample_count(f64::INFINITY, SAMPLE_RATE), 0);
    }
}
