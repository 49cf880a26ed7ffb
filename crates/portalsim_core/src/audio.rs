//! Audio collaborator contract and track selection

use std::path::{Path, PathBuf};

use portalsim_math::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

/// Mixer channel a sound effect is played on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundChannel {
    Primary,
}

/// Playback backend
///
/// The simulation only issues requests; mixing and streaming live behind
/// this trait.
pub trait AudioSink {
    /// Replace the current background music
    fn play_music(&mut self, path: &Path);

    /// Play a one-shot effect, optionally positioned at `emitter`
    fn play_sound(&mut self, path: &Path, emitter: Option<Vec3>, channel: SoundChannel);
}

/// Music playlist and effect pools, resolved against the data directory
#[derive(Clone, Debug, Default)]
pub struct Soundtrack {
    pub data_dir: PathBuf,
    pub music: Vec<String>,
    pub fall_sounds: Vec<String>,
}

impl Soundtrack {
    /// Pick a random music track
    pub fn pick_music<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PathBuf> {
        Self::pick(&self.data_dir, &self.music, rng)
    }

    /// Pick a random fall impact sound
    pub fn pick_fall_sound<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PathBuf> {
        Self::pick(&self.data_dir, &self.fall_sounds, rng)
    }

    fn pick<R: Rng + ?Sized>(data_dir: &Path, pool: &[String], rng: &mut R) -> Option<PathBuf> {
        pool.choose(rng).map(|name| data_dir.join(name))
    }
}
