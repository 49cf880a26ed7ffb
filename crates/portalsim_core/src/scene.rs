//! Scene state
//!
//! A [`Scene`] holds everything one level needs at runtime: the player and
//! camera, static geometry, triggers and both portals. Exactly one scene is
//! active at a time, owned by a [`SceneSlot`].

use std::io;

use portalsim_math::{Axis, Vec3};
use portalsim_physics::{BoxCollider, PortalGate};

use crate::camera::Camera;
use crate::entity::{Marker, PhysicsEntity};
use crate::player::Player;
use crate::portal::{Portal, PortalColor};
use crate::trigger::Trigger;

/// Unified error type for scene operations
#[derive(Debug)]
pub enum SceneError {
    /// IO error (permission denied, unreadable file, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Map file does not exist
    NotFound(String),
    /// The level list has no entries
    EmptyLevelList,
    /// No scene has been loaded
    NoActiveScene,
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::NotFound(path) => write!(f, "Map not found: {}", path),
            SceneError::EmptyLevelList => write!(f, "Level list is empty"),
            SceneError::NoActiveScene => write!(f, "No active scene"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// World state for one level
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub player: Player,
    pub camera: Camera,
    pub start: Marker,
    pub end: Marker,
    pub walls: Vec<PhysicsEntity>,
    /// Hazard volumes; touching one kills the player
    pub volumes: Vec<PhysicsEntity>,
    pub triggers: Vec<Trigger>,
    pub blue_portal: Portal,
    pub orange_portal: Portal,
}

impl Scene {
    /// Create an empty scene with the player standing at `start`
    pub fn new(name: impl Into<String>, start: Marker, end: Marker) -> Self {
        let mut player = Player::new(start.position);
        player.rotation = start.rotation;

        Self {
            name: name.into(),
            player,
            camera: Camera::default(),
            start,
            end,
            walls: Vec::new(),
            volumes: Vec::new(),
            triggers: Vec::new(),
            blue_portal: Portal::closed(PortalColor::Blue),
            orange_portal: Portal::closed(PortalColor::Orange),
        }
    }

    pub fn with_wall(mut self, wall: PhysicsEntity) -> Self {
        self.walls.push(wall);
        self
    }

    pub fn with_volume(mut self, volume: PhysicsEntity) -> Self {
        self.volumes.push(volume);
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Colliders of every wall, in wall order
    pub fn wall_colliders(&self) -> Vec<BoxCollider> {
        self.walls.iter().map(PhysicsEntity::collider).collect()
    }

    pub fn portal(&self, color: PortalColor) -> &Portal {
        match color {
            PortalColor::Blue => &self.blue_portal,
            PortalColor::Orange => &self.orange_portal,
        }
    }

    pub fn portal_mut(&mut self, color: PortalColor) -> &mut Portal {
        match color {
            PortalColor::Blue => &mut self.blue_portal,
            PortalColor::Orange => &mut self.orange_portal,
        }
    }

    /// Both portals are open, so the pair is usable
    pub fn portals_linked(&self) -> bool {
        self.blue_portal.open && self.orange_portal.open
    }

    /// Distance from the player to the end marker
    pub fn distance_to_end(&self) -> f32 {
        self.player.position.distance(self.end.position)
    }

    /// Parent the camera to the player: eye at the top half of the box
    pub fn sync_camera(&mut self, viewport: (u32, u32)) {
        self.camera.set_viewport(viewport.0, viewport.1);
        self.camera.position = self.player.position + Vec3::new(0.0, self.player.scale.y / 2.0, 0.0);
        self.camera.rotation = self.player.rotation;
    }
}

impl PortalGate for Scene {
    fn allows_passage(&self, probe: &BoxCollider, axis: Axis) -> bool {
        self.portals_linked()
            && (self.blue_portal.allows_passage(probe, axis) || self.orange_portal.allows_passage(probe, axis))
    }
}

/// Exclusive owner of the active scene
///
/// Replacing the scene drops the old one before the new one is built, so
/// there is never a moment where two scenes exist or where the old one can
/// still be reached.
#[derive(Debug, Default)]
pub struct SceneSlot {
    scene: Option<Scene>,
}

impl SceneSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current scene, build a new one and publish it
    ///
    /// If `build` fails the slot is left empty.
    pub fn replace<F>(&mut self, build: F) -> Result<&mut Scene, SceneError>
    where
        F: FnOnce() -> Result<Scene, SceneError>,
    {
        self.scene = None;
        let scene = build()?;
        Ok(self.scene.insert(scene))
    }

    pub fn is_loaded(&self) -> bool {
        self.scene.is_some()
    }

    pub fn get(&self) -> Result<&Scene, SceneError> {
        self.scene.as_ref().ok_or(SceneError::NoActiveScene)
    }

    pub fn get_mut(&mut self) -> Result<&mut Scene, SceneError> {
        self.scene.as_mut().ok_or(SceneError::NoActiveScene)
    }
}
