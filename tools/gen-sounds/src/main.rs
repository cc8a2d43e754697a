//! Crossy Politician Sound Generator
//!
//! Generates the game's sound effects:
//! - move.wav (C major chime played on every hop)
//! - hit.wav (descending thud played on collision)
//!
//! Run with no arguments to regenerate both into
//! `crossy-politician/assets/sounds`.

use anyhow::{Context, Result};
use clap::Parser;
use crossy_sfx::{SoundEffect, Synth, SAMPLE_RATE};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "crossy-politician/assets/sounds";

#[derive(Parser, Debug)]
#[command(name = "gen-sounds")]
#[command(about = "Generate Crossy Politician sound effects")]
#[command(version)]
struct Cli {
    /// Directory the WAV files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Only generate the given sound (repeatable: move, hit)
    #[arg(short, long = "sound")]
    sounds: Vec<SoundEffect>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Sounds to generate, in catalog order
    fn selected_sounds(&self) -> Vec<SoundEffect> {
        if self.sounds.is_empty() {
            return SoundEffect::ALL.to_vec();
        }
        SoundEffect::ALL
            .into_iter()
            .filter(|sound| self.sounds.contains(sound))
            .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    generate_sounds(&cli.output_dir, &cli.selected_sounds())?;

    println!("\nAll sounds generated successfully!");
    Ok(())
}

/// Render each sound and write it to `output_dir`, returning the written paths
fn generate_sounds(output_dir: &Path, sounds: &[SoundEffect]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    tracing::debug!("Output -> {}", output_dir.display());

    let synth = Synth::new(SAMPLE_RATE);
    let mut written = Vec::with_capacity(sounds.len());

    for &sound in sounds {
        println!("Generating {}...", sound.description());

        let samples = sound.render(&synth);
        let path = output_dir.join(sound.file_name());
        crossy_sfx::write_wav(&path, &samples, synth.sample_rate())
            .with_context(|| format!("Failed to generate {}", sound.file_name()))?;

        tracing::debug!(
            "{} ({} samples, {:.2}s)",
            path.display(),
            samples.len(),
            samples.len() as f64 / synth.sample_rate() as f64
        );
        println!("✓ Generated {}", sound.file_name());

        written.push(path);
    }

    Ok(written)
}
