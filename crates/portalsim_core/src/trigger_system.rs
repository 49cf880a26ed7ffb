//! Hazard and trigger evaluation
//!
//! Runs once per tick against the player's current box. Hazard volumes kill
//! on contact. Triggers apply their effect from [`TriggerKind::effect`];
//! effects that change level are not executed here but handed back as a
//! [`Transition`] so the caller can swap scenes once nothing else reads the
//! current one.

use crate::scene::Scene;
use crate::trigger::{TriggerEffect, TriggerKind};

/// Level change requested by a trigger
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Advance to the next level in the list
    NextLevel,
    /// Load a specific map
    Map(String),
}

/// What happened during one evaluation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerOutcome {
    /// First level change requested, in trigger order
    pub transition: Option<Transition>,
    /// Indices of button triggers being touched
    pub buttons: Vec<usize>,
}

pub struct TriggerSystem;

impl TriggerSystem {
    pub fn evaluate(scene: &mut Scene) -> TriggerOutcome {
        let mut outcome = TriggerOutcome::default();
        let body = scene.player.collider();

        if scene.volumes.iter().any(|volume| body.collides_with(&volume.collider())) {
            scene.player.kill();
        }

        for (index, trigger) in scene.triggers.iter().enumerate() {
            if !body.collides_with(&trigger.collider()) {
                continue;
            }

            match trigger.kind.effect() {
                TriggerEffect::Damage(amount) => scene.player.harm(amount),
                TriggerEffect::Kill => {
                    scene.player.kill();
                    log::debug!("Death trigger #{} touched", index);
                }
                TriggerEffect::AdvanceLevel => {
                    log::debug!("Win trigger #{} touched", index);
                    outcome.transition.get_or_insert(Transition::NextLevel);
                }
                TriggerEffect::LoadMap => match &trigger.reference {
                    Some(path) => {
                        log::debug!("Map trigger #{} touched, loading {}", index, path);
                        outcome.transition.get_or_insert_with(|| Transition::Map(path.clone()));
                    }
                    None => log::warn!("Map trigger #{} has no reference, ignoring", index),
                },
                TriggerEffect::Event => {
                    log::debug!("Button trigger #{} touched", index);
                    outcome.buttons.push(index);
                }
                TriggerEffect::Ignore => {
                    if let TriggerKind::Unknown(name) = &trigger.kind {
                        log::debug!("Unhandled trigger '{}' touched", name);
                    }
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Marker, Material, PhysicsEntity};
    use crate::player::PLAYER_MAX_HEALTH;
    use crate::trigger::Trigger;
    use portalsim_math::Vec3;

    fn scene_with(triggers: Vec<Trigger>) -> Scene {
        let mut scene = Scene::new("t", Marker::at(Vec3::new(0.0, 0.5, 0.0)), Marker::at(Vec3::new(0.0, 0.5, -20.0)));
        scene.triggers = triggers;
        scene
    }

    fn at_player(kind: &str) -> Trigger {
        Trigger::new(TriggerKind::from(kind), Vec3::new(0.0, 0.5, 0.0), Vec3::ONE)
    }

    #[test]
    fn test_no_overlap_no_effect() {
        let far = Trigger::new(TriggerKind::Death, Vec3::new(10.0, 0.5, 0.0), Vec3::ONE);
        let mut scene = scene_with(vec![far]);
        let outcome = TriggerSystem::evaluate(&mut scene);
        assert_eq!(outcome, TriggerOutcome::default());
        assert!(scene.player.is_alive());
    }

    #[test]
    fn test_hazard_volume_kills() {
        let mut scene = scene_with(Vec::new())
            .with_volume(PhysicsEntity::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(2.0, 0.2, 2.0), Material::SOLID));
        TriggerSystem::evaluate(&mut scene);
        assert!(!scene.player.is_alive());
    }

    #[test]
    fn test_radiation_damages() {
        let mut scene = scene_with(vec![at_player("radiation")]);
        TriggerSystem::evaluate(&mut scene);
        assert_eq!(scene.player.health(), PLAYER_MAX_HEALTH - 10);
        assert!(scene.player.is_alive());
    }

    #[test]
    fn test_death_kills() {
        let mut scene = scene_with(vec![at_player("death")]);
        assert!(TriggerSystem::evaluate(&mut scene).transition.is_none());
        assert!(!scene.player.is_alive());
    }

    #[test]
    fn test_win_requests_next_level() {
        let mut scene = scene_with(vec![at_player("win")]);
        assert_eq!(TriggerSystem::evaluate(&mut scene).transition, Some(Transition::NextLevel));
    }

    #[test]
    fn test_first_transition_wins() {
        let map = at_player("map").with_reference("maps/secret.ron");
        let mut scene = scene_with(vec![map, at_player("win")]);
        assert_eq!(
            TriggerSystem::evaluate(&mut scene).transition,
            Some(Transition::Map("maps/secret.ron".into()))
        );
    }

    #[test]
    fn test_map_without_reference_is_ignored() {
        let mut scene = scene_with(vec![at_player("map")]);
        assert!(TriggerSystem::evaluate(&mut scene).transition.is_none());
    }

    #[test]
    fn test_button_and_unknown() {
        let mut scene = scene_with(vec![at_player("lava"), at_player("button")]);
        let before = scene.player.clone();

        let outcome = TriggerSystem::evaluate(&mut scene);
        assert_eq!(outcome.buttons, vec![1]);
        assert!(outcome.transition.is_none());
        assert_eq!(scene.player, before);
    }
}
