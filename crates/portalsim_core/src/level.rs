//! Level progression
//!
//! The [`LevelManager`] owns the ordered level list and the scene loader.
//! It decides which map to load on start, on a win and on a reload, swaps
//! the scene in the [`SceneSlot`] and starts a new music track each time a
//! scene loads.
//!
//! # Example
//! ```ignore
//! let mut levels = LevelManager::new(Box::new(RonSceneLoader::new("data")), list.list()?);
//! levels.start(config.map.as_deref(), &mut slot, &mut ctx)?;
//!
//! // On a win trigger, or when the end marker is reached
//! levels.advance(&mut slot, &mut ctx)?;
//! ```

use rand::rngs::StdRng;

use crate::assets::TextureLoader;
use crate::audio::{AudioSink, Soundtrack};
use crate::loader::SceneLoader;
use crate::scene::{Scene, SceneError, SceneSlot};
use crate::validator::MapValidator;

/// Distance to the end marker that counts as finishing the level
pub const END_DISTANCE: f32 = 1.0;

/// Collaborators needed while loading a scene
pub struct LoadContext<'a> {
    pub textures: &'a mut dyn TextureLoader,
    pub audio: &'a mut dyn AudioSink,
    pub rng: &'a mut StdRng,
    pub soundtrack: &'a Soundtrack,
}

pub struct LevelManager {
    loader: Box<dyn SceneLoader>,
    levels: Vec<String>,
    /// Index into `levels`; always valid while `levels` is non-empty
    current: usize,
    current_path: Option<String>,
}

impl LevelManager {
    pub fn new(loader: Box<dyn SceneLoader>, levels: Vec<String>) -> Self {
        Self {
            loader,
            levels,
            current: 0,
            current_path: None,
        }
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn current_level(&self) -> usize {
        self.current
    }

    /// Path of the scene currently loaded
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Load the first scene
    ///
    /// A custom map bypasses the level list. If it does not exist, the
    /// current list entry is loaded instead; any other failure is returned.
    pub fn start(
        &mut self,
        custom_map: Option<&str>,
        slot: &mut SceneSlot,
        ctx: &mut LoadContext<'_>,
    ) -> Result<(), SceneError> {
        if let Some(path) = custom_map {
            match self.load(path, slot, ctx) {
                Ok(()) => {
                    log::info!("Custom map loaded: {}", path);
                    return Ok(());
                }
                Err(SceneError::NotFound(missing)) => {
                    log::warn!("Custom map {} not found, falling back to the level list", missing);
                }
                Err(e) => return Err(e),
            }
        }

        let path = self.levels.get(self.current).cloned().ok_or(SceneError::EmptyLevelList)?;
        self.load(&path, slot, ctx)
    }

    /// Replace the active scene with the map at `path`
    pub fn load(&mut self, path: &str, slot: &mut SceneSlot, ctx: &mut LoadContext<'_>) -> Result<(), SceneError> {
        let loader = &mut self.loader;
        let textures = &mut *ctx.textures;
        let scene = slot.replace(|| loader.load(path, textures))?;
        self.current_path = Some(path.to_string());
        log::info!("Scene '{}' loaded from {}", scene.name, path);

        for problem in MapValidator::validate(scene) {
            log::warn!("{}: {}", path, problem);
        }

        match ctx.soundtrack.pick_music(&mut *ctx.rng) {
            Some(track) => ctx.audio.play_music(&track),
            None => log::debug!("No music configured"),
        }
        Ok(())
    }

    /// Move to the next level (staying on the last one) and load it
    pub fn advance(&mut self, slot: &mut SceneSlot, ctx: &mut LoadContext<'_>) -> Result<(), SceneError> {
        if self.levels.is_empty() {
            return Err(SceneError::EmptyLevelList);
        }
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            log::info!("Advancing to level {}", self.current);
        }

        let path = self.levels[self.current].clone();
        self.load(&path, slot, ctx)
    }

    /// Load the current scene path again
    pub fn reload(&mut self, slot: &mut SceneSlot, ctx: &mut LoadContext<'_>) -> Result<(), SceneError> {
        let path = self.current_path.clone().ok_or(SceneError::NoActiveScene)?;
        log::info!("Reloading {}", path);
        self.load(&path, slot, ctx)
    }

    /// Whether the player is close enough to the end marker
    pub fn reached_end(scene: &Scene) -> bool {
        scene.distance_to_end() < END_DISTANCE
    }
}
