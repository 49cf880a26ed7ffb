//! Map validation
//!
//! Checks a freshly loaded [`Scene`] for mistakes that make a level
//! unplayable or confusing. Problems are reported, never fatal: the level
//! loader logs them as warnings and carries on.

use portalsim_physics::{collides_with_any, BoxCollider};

use crate::scene::Scene;
use crate::trigger::TriggerKind;

/// Problem found in a map
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Map has no walls at all
    NoWalls,
    /// No wall accepts portals
    NoPortalableWalls,
    /// Player box at the start marker overlaps a wall
    StartInsideWall,
    /// A `map` trigger has no map to load (trigger index)
    MissingMapReference(usize),
    /// Trigger type the game does not handle
    UnknownTrigger(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoWalls => write!(f, "Map has no walls"),
            ValidationError::NoPortalableWalls => write!(f, "Map has no portalable walls"),
            ValidationError::StartInsideWall => write!(f, "Start position is inside a wall"),
            ValidationError::MissingMapReference(index) => {
                write!(f, "Map trigger #{} has no reference", index)
            }
            ValidationError::UnknownTrigger(name) => {
                write!(f, "Unknown trigger type: '{}'", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub struct MapValidator;

impl MapValidator {
    /// Validate a scene, returning all problems found
    pub fn validate(scene: &Scene) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if scene.walls.is_empty() {
            errors.push(ValidationError::NoWalls);
        } else if !scene.walls.iter().any(|wall| wall.material.portalable) {
            errors.push(ValidationError::NoPortalableWalls);
        }

        let spawn = BoxCollider::new(scene.start.position, scene.player.scale);
        if collides_with_any(&spawn, &scene.wall_colliders()) {
            errors.push(ValidationError::StartInsideWall);
        }

        for (index, trigger) in scene.triggers.iter().enumerate() {
            match &trigger.kind {
                TriggerKind::Map if trigger.reference.is_none() => {
                    errors.push(ValidationError::MissingMapReference(index));
                }
                TriggerKind::Unknown(name) => {
                    errors.push(ValidationError::UnknownTrigger(name.clone()));
                }
                _ => {}
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(scene: &Scene) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(scene);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
