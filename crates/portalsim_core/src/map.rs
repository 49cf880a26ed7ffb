//! Map file format
//!
//! Maps are RON files describing a level's static content. Rotations are
//! written in degrees; they are converted to radians when the scene is built.
//!
//! ```ron
//! MapFile(
//!     name: "Chamber 1",
//!     start: (position: (x: 0.0, y: 0.5, z: 0.0), rotation: (x: 0.0, y: 0.0, z: 0.0)),
//!     end: (position: (x: 0.0, y: 0.5, z: -9.0)),
//!     walls: [
//!         (position: (x: 0.0, y: -0.5, z: 0.0), scale: (x: 20.0, y: 1.0, z: 20.0),
//!          material: (portalable: true, texture: Some("concrete.png"))),
//!     ],
//!     triggers: [
//!         (position: (x: 0.0, y: 0.5, z: -9.0), scale: (x: 2.0, y: 1.0, z: 2.0), type: "win"),
//!     ],
//! )
//! ```

use portalsim_math::{rad, Vec3};
use serde::{Deserialize, Serialize};

use crate::assets::TextureLoader;
use crate::entity::{Marker, Material, PhysicsEntity};
use crate::scene::Scene;
use crate::trigger::{Trigger, TriggerKind};

/// Serialized level description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    pub name: String,
    pub start: MarkerDef,
    pub end: MarkerDef,
    #[serde(default)]
    pub walls: Vec<BoxDef>,
    /// Hazard volumes
    #[serde(default)]
    pub volumes: Vec<BoxDef>,
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerDef {
    pub position: Vec3,
    /// Degrees
    #[serde(default)]
    pub rotation: Vec3,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    #[serde(default)]
    pub portalable: bool,
    /// Diffuse texture file name
    #[serde(default)]
    pub texture: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxDef {
    pub position: Vec3,
    pub scale: Vec3,
    /// Degrees
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub material: MaterialDef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerDef {
    pub position: Vec3,
    pub scale: Vec3,
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    #[serde(default)]
    pub reference: Option<String>,
}

fn to_radians(degrees: Vec3) -> Vec3 {
    Vec3::new(rad(degrees.x), rad(degrees.y), rad(degrees.z))
}

impl MarkerDef {
    fn build(&self) -> Marker {
        Marker::new(self.position, to_radians(self.rotation))
    }
}

impl BoxDef {
    fn build(&self, textures: &mut dyn TextureLoader) -> PhysicsEntity {
        let material = Material {
            portalable: self.material.portalable,
            diffuse: self.material.texture.as_deref().map(|name| textures.get_texture(name)),
        };
        PhysicsEntity {
            rotation: to_radians(self.rotation),
            ..PhysicsEntity::new(self.position, self.scale, material)
        }
    }
}

impl TriggerDef {
    fn build(&self) -> Trigger {
        Trigger {
            position: self.position,
            scale: self.scale,
            kind: self.kind.clone(),
            reference: self.reference.clone(),
        }
    }
}

impl MapFile {
    /// Parse a map from RON text
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Serialize to pretty-printed RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty)
    }

    /// Build the runtime scene, resolving texture names through `textures`
    pub fn into_scene(self, textures: &mut dyn TextureLoader) -> Scene {
        let mut scene = Scene::new(self.name.as_str(), self.start.build(), self.end.build());
        scene.walls = self.walls.iter().map(|wall| wall.build(textures)).collect();
        scene.volumes = self.volumes.iter().map(|volume| volume.build(textures)).collect();
        scene.triggers = self.triggers.iter().map(TriggerDef::build).collect();
        scene
    }
}
