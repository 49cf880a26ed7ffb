//! World simulation system
//!
//! Runs one tick of the game per `update` call, in a fixed order:
//! - Reload key → reload the current map
//! - Dead player → respawn at the start marker
//! - Mouse look and movement → requested velocity
//! - Collision resolution (Y, X, Z) with portal bypass
//! - Hazards and triggers, possibly changing level
//! - Portal teleport
//! - Integration and camera sync
//! - End-of-level check

use std::time::Instant;

use portalsim_core::{
    AudioSink, LevelList, LevelManager, LoadContext, MapListFile, PortalSystem, RonSceneLoader, Scene,
    SceneError, SceneLoader, SceneSlot, ShotOutcome, SoundChannel, Soundtrack, TextureCache, Transition,
    TriggerSystem, Vec3,
};
use portalsim_input::{InputSource, Key};
use portalsim_physics::{look, walk, CollisionResolver, Motion, MoveIntent, PhysicsConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::render::Renderer;
use crate::config::AppConfig;

/// Everything a scene load or a sound effect needs besides the scene itself
struct Services {
    textures: TextureCache,
    audio: Box<dyn AudioSink>,
    rng: StdRng,
    soundtrack: Soundtrack,
}

impl Services {
    fn ctx(&mut self) -> LoadContext<'_> {
        LoadContext {
            textures: &mut self.textures,
            audio: &mut *self.audio,
            rng: &mut self.rng,
            soundtrack: &self.soundtrack,
        }
    }
}

/// Owns the active scene and drives it one tick at a time
pub struct WorldSimulator {
    slot: SceneSlot,
    levels: LevelManager,
    renderer: Box<dyn Renderer>,
    services: Services,
    physics: PhysicsConfig,
    mouse_sensitivity: f32,
    started: Instant,
}

impl WorldSimulator {
    /// Build the simulator from configuration and load the first scene
    ///
    /// Maps are read from `config.paths.data_dir`. A missing map list is only
    /// tolerated when a custom map is configured.
    pub fn create(
        config: &AppConfig,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, SceneError> {
        let rng = match config.seed {
            Some(seed) => {
                log::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let levels = match MapListFile::new(config.map_list_path()).list() {
            Ok(levels) => levels,
            Err(SceneError::NotFound(path)) if config.map.is_some() => {
                log::warn!("Map list {} not found, only the custom map is available", path);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let loader = Box::new(RonSceneLoader::new(config.paths.data_dir.clone()));
        Self::from_parts(config, loader, levels, renderer, audio, rng)
    }

    /// Build the simulator from explicit collaborators
    ///
    /// Loads `config.map` if set, otherwise the first entry of `levels`.
    pub fn from_parts(
        config: &AppConfig,
        loader: Box<dyn SceneLoader>,
        levels: Vec<String>,
        mut renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
        rng: StdRng,
    ) -> Result<Self, SceneError> {
        renderer.set_viewport(config.window.width, config.window.height);

        let mut sim = Self {
            slot: SceneSlot::new(),
            levels: LevelManager::new(loader, levels),
            renderer,
            services: Services {
                textures: TextureCache::new(),
                audio,
                rng,
                soundtrack: config.soundtrack(),
            },
            physics: config.physics.clone(),
            mouse_sensitivity: config.input.mouse_sensitivity,
            started: Instant::now(),
        };

        sim.levels.start(config.map.as_deref(), &mut sim.slot, &mut sim.services.ctx())?;
        sim.sync_camera()?;
        Ok(sim)
    }

    /// Advance the world by one tick
    ///
    /// Errors only come from scene loads (reload, triggers, end of level).
    pub fn update(&mut self, input: &dyn InputSource) -> Result<(), SceneError> {
        if input.is_key_down(Key::Reload) {
            self.levels.reload(&mut self.slot, &mut self.services.ctx())?;
        }

        let scene = self.slot.get_mut()?;

        if !scene.player.is_alive() {
            log::info!("Player died, respawning at start");
            scene.player.position = scene.start.position;
            scene.player.velocity = Vec3::ZERO;
            scene.player.revive();
        }

        // Locomotion
        let (dx, dy) = input.mouse_delta();
        let player = &mut scene.player;
        look(&mut player.rotation, dx, dy, self.mouse_sensitivity);
        walk(
            &mut player.velocity,
            &mut player.grounded,
            player.rotation.y,
            &move_intent(input),
            &self.physics,
        );
        player.grounded = false;

        // Collision
        let walls = scene.wall_colliders();
        let motion = Motion {
            position: scene.player.position,
            velocity: scene.player.velocity,
            size: scene.player.scale,
        };
        let resolution = CollisionResolver::resolve(&motion, &walls, &*scene, &self.physics);
        scene.player.velocity = resolution.velocity;
        if resolution.landed {
            scene.player.grounded = true;
        }
        if resolution.hard_landing {
            let services = &mut self.services;
            if let Some(sound) = services.soundtrack.pick_fall_sound(&mut services.rng) {
                services.audio.play_sound(&sound, Some(scene.player.position), SoundChannel::Primary);
            }
        }

        // Hazards and triggers
        let outcome = TriggerSystem::evaluate(scene);
        if let Some(transition) = outcome.transition {
            let mut ctx = self.services.ctx();
            match transition {
                Transition::NextLevel => self.levels.advance(&mut self.slot, &mut ctx)?,
                Transition::Map(path) => self.levels.load(&path, &mut self.slot, &mut ctx)?,
            }
            return self.sync_camera();
        }

        PortalSystem::teleport(scene);

        scene.player.position += scene.player.velocity;
        scene.sync_camera(self.renderer.viewport_size());

        if LevelManager::reached_end(scene) {
            log::info!("End of level '{}' reached", scene.name);
            self.levels.advance(&mut self.slot, &mut self.services.ctx())?;
            self.sync_camera()?;
        }

        Ok(())
    }

    /// Hand the active scene to the renderer and draw it
    pub fn render(&mut self) -> Result<(), SceneError> {
        let scene = self.slot.get()?;
        self.renderer.set_scene(scene);
        self.renderer.render(&scene.camera);
        Ok(())
    }

    /// Fire a portal from the camera; button 1 is blue, anything else orange
    pub fn shoot_portal(&mut self, button: u32) -> Result<ShotOutcome, SceneError> {
        let now_ms = self.started.elapsed().as_millis() as u64;
        let scene = self.slot.get_mut()?;
        Ok(PortalSystem::shoot(scene, button, &mut self.services.textures, now_ms))
    }

    /// Resize the output and update the camera aspect ratio
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.renderer.set_viewport(width, height);
        if let Ok(scene) = self.slot.get_mut() {
            scene.sync_camera((width, height));
        }
    }

    pub fn scene(&self) -> Result<&Scene, SceneError> {
        self.slot.get()
    }

    pub fn scene_mut(&mut self) -> Result<&mut Scene, SceneError> {
        self.slot.get_mut()
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    fn sync_camera(&mut self) -> Result<(), SceneError> {
        let viewport = self.renderer.viewport_size();
        self.slot.get_mut()?.sync_camera(viewport);
        Ok(())
    }
}

fn move_intent(input: &dyn InputSource) -> MoveIntent {
    let axis = |positive: Key, negative: Key| {
        let mut value = 0.0;
        if input.is_key_down(positive) {
            value += 1.0;
        }
        if input.is_key_down(negative) {
            value -= 1.0;
        }
        value
    };

    MoveIntent {
        forward: axis(Key::Forward, Key::Backward),
        strafe: axis(Key::Right, Key::Left),
        jump: input.is_key_down(Key::Jump),
    }
}
