//! ADSR envelope generator
//!
//! Provides Attack-Decay-Sustain-Release envelope shaping for sound effects.

/// ADSR Envelope parameters
///
/// Controls the amplitude shape of a sound over time:
/// - Attack: Time to ramp from silence to peak amplitude
/// - Decay: Time to fall from peak to sustain level
/// - Sustain: Amplitude level held during the sustain phase (0.0 to 1.0)
/// - Release: Time to fade from sustain to silence at the end of the sound
///
/// All times are in seconds. Phase lengths are truncated to whole samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Attack time in seconds
    pub attack: f64,
    /// Decay time in seconds
    pub decay: f64,
    /// Sustain level (0.0 to 1.0)
    pub sustain: f64,
    /// Release time in seconds
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.05,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

/// Phase lengths of an envelope, in samples
#[derive(Debug, Clone, Copy)]
struct PhaseSamples {
    attack: usize,
    decay: usize,
    release: usize,
}

impl Envelope {
    /// Create a new envelope with custom parameters
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain: sustain.clamp(0.0, 1.0),
            release,
        }
    }

    /// Short bell envelope used by the move chime
    pub fn chime() -> Self {
        Self {
            attack: 0.005,
            decay: 0.02,
            sustain: 0.3,
            release: 0.1,
        }
    }

    /// Soft collision envelope used by the hit thud
    pub fn thud() -> Self {
        Self {
            attack: 0.005,
            decay: 0.03,
            sustain: 0.4,
            release: 0.15,
        }
    }

    fn phase_samples(&self, sample_rate: u32) -> PhaseSamples {
        let to_samples = |seconds: f64| {
            let samples = seconds * sample_rate as f64;
            if samples.is_finite() && samples > 0.0 {
                samples as usize
            } else {
                0
            }
        };

        PhaseSamples {
            attack: to_samples(self.attack),
            decay: to_samples(self.decay),
            release: to_samples(self.release),
        }
    }

    fn gain(&self, i: usize, total_samples: usize, phases: PhaseSamples) -> f64 {
        if i < phases.attack {
            // Attack: ramp up from 0 to 1
            i as f64 / phases.attack as f64
        } else if i < phases.attack.saturating_add(phases.decay) {
            // Decay: ramp down from 1 to sustain
            let progress = (i - phases.attack) as f64 / phases.decay as f64;
            1.0 - (1.0 - self.sustain) * progress
        } else if total_samples.saturating_sub(i) < phases.release {
            // Release: fade the sustain level out over the last samples
            let progress = total_samples.saturating_sub(i) as f64 / phases.release as f64;
            self.sustain * progress
        } else {
            self.sustain
        }
    }

    /// Gain of the envelope at sample `i` of a sound `total_samples` long
    ///
    /// Attack and decay are measured from the start of the sound; release is
    /// measured back from its end, so only samples past
    /// `total_samples - release` fade out. Phases that round to zero samples
    /// are skipped.
    pub fn gain_at(&self, i: usize, total_samples: usize, sample_rate: u32) -> f64 {
        self.gain(i, total_samples, self.phase_samples(sample_rate))
    }

    /// Apply envelope to samples in place
    ///
    /// # Arguments
    /// * `samples` - Audio samples to shape
    /// * `sample_rate` - Sample rate in Hz
    pub fn apply(&self, samples: &mut [f64], sample_rate: u32) {
        let total_samples = samples.len();
        let phases = self.phase_samples(sample_rate);

        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= self.gain(i, total_samples, phases);
        }
    }

    /// Generate envelope curve as samples
    ///
    /// Useful for visualization or debugging.
    pub fn generate(&self, duration: f64, sample_rate: u32) -> Vec<f64> {
        let mut curve = vec![1.0; crate::sample_count(duration, sample_rate)];
        self.apply(&mut curve, sample_rate);
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_RATE;

    #[test]
    fn test_envelope_default() {
        let env = Envelope::default();
        assert_eq!(env, Envelope::new(0.01, 0.05, 0.7, 0.2));
    }

    #[test]
    fn test_envelope_sustain_clamp() {
        let env = Envelope::new(0.01, 0.01, 1.5, 0.01);
        assert_eq!(env.sustain, 1.0);

        let env = Envelope::new(0.01, 0.01, -0.5, 0.01);
        assert_eq!(env.sustain, 0.0);
    }

    #[test]
    fn test_phase_samples_truncate() {
        let phases = Envelope::chime().phase_samples(SAMPLE_RATE);
        // 0.005 * 44100 = 220.5
        assert_eq!(phases.attack, 220);
        assert_eq!(phases.decay, 882);
        assert_eq!(phases.release, 4410);

        let phases = Envelope::thud().phase_samples(SAMPLE_RATE);
        assert_eq!(phases.attack, 220);
        assert_eq!(phases.decay, 1323);
        assert_eq!(phases.release, 6615);
    }

    #[test]
    fn test_envelope_phases() {
        // 10 Hz makes phase boundaries easy to reason about
        let env = Envelope::new(0.2, 0.2, 0.5, 0.4);
        let curve = env.generate(2.0, 10);
        assert_eq!(curve.len(), 20);

        // Attack: 0, 0.5
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[1], 0.5);
        // Decay: 1.0, 0.75
        assert_eq!(curve[2], 1.0);
        assert_eq!(curve[3], 0.75);
        // Sustain up to and including index total - release
        assert_eq!(curve[4], 0.5);
        assert_eq!(curve[16], 0.5);
        // Release: sustain * (total - i) / release
        assert_eq!(curve[17], 0.375);
        assert_eq!(curve[18], 0.25);
        assert_eq!(curve[19], 0.125);
    }

    #[test]
    fn test_envelope_apply_preserves_length() {
        let mut samples = crate::sine(440.0, 0.15);
        let len = samples.len();
        Envelope::chime().apply(&mut samples, SAMPLE_RATE);
        assert_eq!(samples.len(), len);
    }

    #[test]
    fn test_envelope_never_amplifies() {
        let original = crate::sine_wave(300.0, 0.3, SAMPLE_RATE, 0.8);
        for env in [Envelope::default(), Envelope::chime(), Envelope::thud()] {
            let mut shaped = original.clone();
            env.apply(&mut shaped, SAMPLE_RATE);
            assert!(shaped
                .iter()
                .zip(&original)
                .all(|(s, o)| s.abs() <= o.abs()));
        }
    }

    #[test]
    fn test_envelope_generate_range() {
        let curve = Envelope::thud().generate(0.3, SAMPLE_RATE);
        assert_eq!(curve.len(), 13230);
        assert!(curve.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(curve[0], 0.0);
    }

    #[test]
    fn test_release_longer_than_sound() {
        // Release covers every sample past attack and decay
        let env = Envelope::new(0.1, 0.1, 0.5, 10.0);
        let curve = env.generate(1.0, 10);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[1], 1.0);
        assert_eq!(curve[2], 0.5 * 8.0 / 100.0);
    }

    #[test]
    fn test_zero_length_phases() {
        // Phases shorter than one sample are skipped without dividing by zero
        let env = Envelope::new(0.0, 0.0, 0.6, 0.0);
        let curve = env.generate(0.01, SAMPLE_RATE);
        assert!(curve.iter().all(|&v| v == 0.6));
    }

    #[test]
    fn test_envelope_empty_samples() {
        let env = Envelope::default();
        let mut samples: Vec<f64> = vec![];
        env.apply(&mut samples, SAMPLE_RATE);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_gain_at_matches_apply() {
        let env = Envelope::chime();
        let curve = env.generate(0.15, SAMPLE_RATE);
        for i in [0, 100, 220, 500, 1102, 3000, 2205, 6000, 6614] {
            assert_eq!(curve[i], env.gain_at(i, curve.len(), SAMPLE_RATE));
        }
    }
}
