//! Core types for the portalsim world
//!
//! This crate provides the scene model and the per-tick systems that act on it:
//!
//! - [`Scene`] - Player, camera, walls, hazards, triggers and both portals
//! - [`SceneSlot`] - Exclusive owner of the active scene
//! - [`Portal`] - Placement geometry, facing and pass-through tests
//! - [`Trigger`] / [`TriggerKind`] - Trigger volumes and their effect table
//! - [`PortalSystem`] - Shooting portals and teleporting the player
//! - [`TriggerSystem`] - Hazard and trigger evaluation
//! - [`LevelManager`] - Level list, scene loading and progression
//! - [`MapFile`] / [`RonSceneLoader`] - RON map files
//! - [`TextureCache`] - Texture handle registry

mod assets;
mod audio;
mod camera;
mod entity;
mod level;
mod loader;
mod map;
mod player;
mod portal;
mod portal_system;
mod scene;
mod trigger;
mod trigger_system;
mod validator;

pub use assets::{TextureCache, TextureHandle, TextureId, TextureLoader};
pub use audio::{AudioSink, SoundChannel, Soundtrack};
pub use camera::Camera;
pub use entity::{Marker, Material, PhysicsEntity};
pub use level::{LevelManager, LoadContext, END_DISTANCE};
pub use loader::{LevelList, MapListFile, RonSceneLoader, SceneLoader};
pub use map::{BoxDef, MapFile, MarkerDef, MaterialDef, TriggerDef};
pub use player::{Player, PLAYER_MAX_HEALTH, PLAYER_SCALE};
pub use portal::{Portal, PortalColor, PORTAL_DEPTH, PORTAL_MASK_TEXTURE, PORTAL_SCALE};
pub use portal_system::{PortalSystem, ShotOutcome};
pub use scene::{Scene, SceneError, SceneSlot};
pub use trigger::{Trigger, TriggerEffect, TriggerKind, RADIATION_DAMAGE};
pub use trigger_system::{Transition, TriggerOutcome, TriggerSystem};
pub use validator::{MapValidator, ValidationError};

// Re-export commonly used types from the math and physics crates
pub use portalsim_math::{Axis, Vec3};
pub use portalsim_physics::{BoxCollider, PhysicsConfig};
