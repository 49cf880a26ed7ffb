//! Audio sink that only logs playback requests

use std::path::Path;

use portalsim_core::{AudioSink, SoundChannel, Vec3};

#[derive(Debug, Default)]
pub struct LogAudio {
    music_requests: usize,
    sound_requests: usize,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn music_requests(&self) -> usize {
        self.music_requests
    }

    pub fn sound_requests(&self) -> usize {
        self.sound_requests
    }
}

impl AudioSink for LogAudio {
    fn play_music(&mut self, path: &Path) {
        self.music_requests += 1;
        log::info!("Music: {}", path.display());
    }

    fn play_sound(&mut self, path: &Path, emitter: Option<Vec3>, channel: SoundChannel) {
        self.sound_requests += 1;
        match emitter {
            Some(at) => log::debug!("Sound {:?}: {} at ({:.2}, {:.2}, {:.2})", channel, path.display(), at.x, at.y, at.z),
            None => log::debug!("Sound {:?}: {}", channel, path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_requests() {
        let mut audio = LogAudio::new();
        audio.play_music(Path::new("data/music/a.ogg"));
        audio.play_sound(Path::new("data/sfx/fall1.ogg"), Some(Vec3::ZERO), SoundChannel::Primary);
        audio.play_sound(Path::new("data/sfx/fall2.ogg"), None, SoundChannel::Primary);

        assert_eq!(audio.music_requests(), 1);
        assert_eq!(audio.sound_requests(), 2);
    }
}
