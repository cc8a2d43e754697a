//! Sound effect catalog
//!
//! Every sound the game ships, with the file it is saved to.

use crate::Synth;
use std::fmt;
use std::str::FromStr;

/// A sound effect the generator can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Chime played when the player moves
    Move,
    /// Thud played when the player is hit
    Hit,
}

impl SoundEffect {
    /// All sounds, in generation order
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Move, SoundEffect::Hit];

    /// ID used on the command line and as the file stem
    pub fn id(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Hit => "hit",
        }
    }

    /// Output file name
    pub fn file_name(self) -> String {
        format!("{}.wav", self.id())
    }

    /// Short description used in progress output
    pub fn description(self) -> &'static str {
        match self {
            Self::Move => "pleasant move sound",
            Self::Hit => "pleasant hit sound",
        }
    }

    /// Render the sound's samples
    pub fn render(self, synth: &Synth) -> Vec<f64> {
        match self {
            Self::Move => synth.move_chime(),
            Self::Hit => synth.hit_thud(),
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SoundEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sound| sound.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|sound| sound.id()).collect();
                format!("unknown sound '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_RATE;

    #[test]
    fn test_ids_and_files() {
        assert_eq!(SoundEffect::Move.id(), "move");
        assert_eq!(SoundEffect::Hit.file_name(), "hit.wav");
        assert_eq!(SoundEffect::Move.to_string(), "move");
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(SoundEffect::ALL, [SoundEffect::Move, SoundEffect::Hit]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("move".parse::<SoundEffect>(), Ok(SoundEffect::Move));
        assert_eq!("HIT".parse::<SoundEffect>(), Ok(SoundEffect::Hit));

        let err = "win".parse::<SoundEffect>().unwrap_err();
        assert!(err.contains("move, hit"));
    }

    #[test]
    fn test_render_matches_synth() {
        let synth = Synth::new(SAMPLE_RATE);
        assert_eq!(SoundEffect::Move.render(&synth), synth.move_chime());
        assert_eq!(SoundEffect::Hit.render(&synth).len(), 13230);
    }
}
