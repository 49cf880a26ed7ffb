//! Trigger volumes
//!
//! A trigger is a box that does something when the player overlaps it. The
//! kind is named by a lowercase string in map files; names the game does not
//! know are kept as [`TriggerKind::Unknown`] so they can still be reported.

use std::fmt;

use portalsim_math::Vec3;
use portalsim_physics::BoxCollider;
use serde::{Deserialize, Serialize};

/// Damage dealt per tick by a radiation trigger
pub const RADIATION_DAMAGE: i32 = 10;

/// What a trigger does when touched
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    Radiation,
    Death,
    Win,
    Map,
    Button,
    Unknown(String),
}

/// Effect of touching a trigger, one per [`TriggerKind`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEffect {
    Damage(i32),
    Kill,
    AdvanceLevel,
    LoadMap,
    Event,
    Ignore,
}

impl TriggerKind {
    /// Dispatch table from kind to effect
    pub fn effect(&self) -> TriggerEffect {
        match self {
            TriggerKind::Radiation => TriggerEffect::Damage(RADIATION_DAMAGE),
            TriggerKind::Death => TriggerEffect::Kill,
            TriggerKind::Win => TriggerEffect::AdvanceLevel,
            TriggerKind::Map => TriggerEffect::LoadMap,
            TriggerKind::Button => TriggerEffect::Event,
            TriggerKind::Unknown(_) => TriggerEffect::Ignore,
        }
    }

    /// Name used in map files
    pub fn as_str(&self) -> &str {
        match self {
            TriggerKind::Radiation => "radiation",
            TriggerKind::Death => "death",
            TriggerKind::Win => "win",
            TriggerKind::Map => "map",
            TriggerKind::Button => "button",
            TriggerKind::Unknown(name) => name,
        }
    }
}

impl From<&str> for TriggerKind {
    fn from(name: &str) -> Self {
        match name {
            "radiation" => TriggerKind::Radiation,
            "death" => TriggerKind::Death,
            "win" => TriggerKind::Win,
            "map" => TriggerKind::Map,
            "button" => TriggerKind::Button,
            other => TriggerKind::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TriggerKind {
    fn from(name: String) -> Self {
        match TriggerKind::from(name.as_str()) {
            TriggerKind::Unknown(_) => TriggerKind::Unknown(name),
            known => known,
        }
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trigger volume placed in the level
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    pub position: Vec3,
    /// Full box size
    pub scale: Vec3,
    pub kind: TriggerKind,
    /// Map path for `map` triggers
    pub reference: Option<String>,
}

impl Trigger {
    pub fn new(kind: TriggerKind, position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            scale,
            kind,
            reference: None,
        }
    }

    /// Set the referenced map path
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn collider(&self) -> BoxCollider {
        BoxCollider::new(self.position, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_table() {
        assert_eq!(TriggerKind::Radiation.effect(), TriggerEffect::Damage(10));
        assert_eq!(TriggerKind::Death.effect(), TriggerEffect::Kill);
        assert_eq!(TriggerKind::Win.effect(), TriggerEffect::AdvanceLevel);
        assert_eq!(TriggerKind::Map.effect(), TriggerEffect::LoadMap);
        assert_eq!(TriggerKind::Button.effect(), TriggerEffect::Event);
        assert_eq!(TriggerKind::Unknown("lava".into()).effect(), TriggerEffect::Ignore);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(TriggerKind::from("win"), TriggerKind::Win);
        assert_eq!(TriggerKind::from("button"), TriggerKind::Button);
        assert_eq!(TriggerKind::from("Win"), TriggerKind::Unknown("Win".into()));
    }

    #[test]
    fn test_string_conversion_keeps_unknown_name() {
        let kind = TriggerKind::from(String::from("teleporter"));
        assert_eq!(kind.to_string(), "teleporter");
        assert_eq!(String::from(kind), "teleporter");
        assert_eq!(String::from(TriggerKind::Radiation), "radiation");
    }

    #[test]
    fn test_ron_uses_plain_string() {
        let text = ron::to_string(&TriggerKind::Death).unwrap();
        assert_eq!(text, "\"death\"");

        let kind: TriggerKind = ron::from_str("\"moving-platform\"").unwrap();
        assert_eq!(kind, TriggerKind::Unknown("moving-platform".into()));
    }

    #[test]
    fn test_trigger_reference() {
        let trigger = Trigger::new(TriggerKind::Map, Vec3::ZERO, Vec3::ONE).with_reference("maps/n2.ron");
        assert_eq!(trigger.reference.as_deref(), Some("maps/n2.ron"));
        assert_eq!(trigger.collider().size, Vec3::ONE);
    }
}
