//! Portal placement and teleportation

use std::f32::consts::PI;

use portalsim_math::wrap_angle;
use portalsim_physics::Ray;

use crate::assets::TextureLoader;
use crate::entity::PhysicsEntity;
use crate::portal::{Portal, PortalColor, PORTAL_MASK_TEXTURE};
use crate::scene::Scene;

/// Result of a portal shot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// A new portal of this color was opened
    Placed(PortalColor),
    /// Nothing portalable was hit; the portal of this color was closed
    Closed(PortalColor),
}

pub struct PortalSystem;

impl PortalSystem {
    /// Fire a portal from the camera
    ///
    /// The nearest wall along the view ray decides the outcome. If it accepts
    /// portals, the portal of the button's color is replaced by a new one at
    /// the impact point; otherwise that portal is closed in place.
    pub fn shoot(
        scene: &mut Scene,
        button: u32,
        textures: &mut dyn TextureLoader,
        now_ms: u64,
    ) -> ShotOutcome {
        let color = PortalColor::from_button(button);
        let ray = Ray::new(scene.camera.position, scene.camera.direction());

        let target = Self::nearest_wall(&ray, &scene.walls)
            .map(|(index, t)| (&scene.walls[index], t))
            .filter(|(wall, _)| wall.material.portalable)
            .map(|(wall, t)| (wall.collider(), ray.at(t)));

        match target {
            Some((wall, impact)) => {
                let mut portal = Portal::on_wall(color, &wall, impact, now_ms);
                portal.diffuse = Some(textures.get_texture(color.texture_name()));
                portal.mask = Some(textures.get_texture(PORTAL_MASK_TEXTURE));
                log::debug!("{:?} portal opened at {:?} facing {:?}", color, impact, portal.direction());

                *scene.portal_mut(color) = portal;
                ShotOutcome::Placed(color)
            }
            None => {
                log::debug!("{:?} portal shot hit no portalable surface", color);
                scene.portal_mut(color).open = false;
                ShotOutcome::Closed(color)
            }
        }
    }

    /// Index and ray distance of the closest wall in front of the ray origin
    fn nearest_wall(ray: &Ray, walls: &[PhysicsEntity]) -> Option<(usize, f32)> {
        walls
            .iter()
            .enumerate()
            .filter_map(|(index, wall)| {
                let (t_near, _) = ray.intersect(&wall.collider())?;
                (t_near > 0.0).then_some((index, t_near))
            })
            .fold(None, |best: Option<(usize, f32)>, hit| match best {
                Some(current) if current.1 <= hit.1 => Some(current),
                _ => Some(hit),
            })
    }

    /// Move the player through a portal if its next position crosses one
    ///
    /// Requires both portals to be open. The player lands on the other
    /// portal's anchor, turns by the difference between the two portals'
    /// yaw plus a half turn, and keeps its speed along the exit normal.
    /// Returns the color of the portal that was entered.
    pub fn teleport(scene: &mut Scene) -> Option<PortalColor> {
        if !scene.portals_linked() {
            return None;
        }

        let probe = scene.player.provisional_collider();
        let (entry, exit) = if scene.blue_portal.through_portal(&probe) {
            (PortalColor::Blue, PortalColor::Orange)
        } else if scene.orange_portal.through_portal(&probe) {
            (PortalColor::Orange, PortalColor::Blue)
        } else {
            return None;
        };

        let entry_yaw = scene.portal(entry).rotation.y;
        let exit_portal = scene.portal(exit);
        let (exit_position, exit_yaw, exit_direction) =
            (exit_portal.position, exit_portal.rotation.y, exit_portal.direction());

        let player = &mut scene.player;
        let speed = player.speed();
        player.position = exit_position;
        player.rotation.y = wrap_angle(player.rotation.y + exit_yaw - entry_yaw + PI);
        player.velocity = exit_direction * speed;

        log::debug!("Teleported through {:?} portal to {:?}", entry, exit_position);
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureCache;
    use crate::entity::{Marker, Material};
    use portalsim_math::{angle_eq, rad, Vec3};

    const EPSILON: f32 = 0.0001;

    /// Floor plus a portalable wall at x = 5 and a solid wall at z = -5
    fn chamber() -> Scene {
        Scene::new("chamber", Marker::at(Vec3::new(0.0, 0.5, 0.0)), Marker::at(Vec3::new(0.0, 0.5, 50.0)))
            .with_wall(PhysicsEntity::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(20.0, 1.0, 20.0), Material::PORTALABLE))
            .with_wall(PhysicsEntity::new(Vec3::new(5.5, 2.0, 0.0), Vec3::new(1.0, 4.0, 20.0), Material::PORTALABLE))
            .with_wall(PhysicsEntity::new(Vec3::new(0.0, 2.0, -5.5), Vec3::new(20.0, 4.0, 1.0), Material::SOLID))
    }

    fn aim(scene: &mut Scene, position: Vec3, rotation: Vec3) {
        scene.camera.position = position;
        scene.camera.rotation = rotation;
    }

    #[test]
    fn test_shoot_places_blue_on_wall() {
        let mut scene = chamber();
        let mut textures = TextureCache::new();
        // Yaw -90° looks down +X
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, rad(-90.0), 0.0));

        let outcome = PortalSystem::shoot(&mut scene, 1, &mut textures, 1234);
        assert_eq!(outcome, ShotOutcome::Placed(PortalColor::Blue));

        let portal = &scene.blue_portal;
        assert!(portal.open);
        assert_eq!(portal.open_since, 1234);
        assert!((portal.position - Vec3::new(5.0, 1.0, 0.0)).length() < EPSILON);
        assert!((portal.direction() - Vec3::new(-1.0, 0.0, 0.0)).length() < EPSILON);
        assert_eq!(portal.diffuse.as_ref().map(|t| t.name()), Some("blueportal.png"));
        assert_eq!(portal.mask.as_ref().map(|t| t.name()), Some("portalmask.png"));
        assert!(!scene.orange_portal.open);
    }

    #[test]
    fn test_shoot_other_button_places_orange() {
        let mut scene = chamber();
        let mut textures = TextureCache::new();
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(rad(-90.0), 0.0, 0.0));

        assert_eq!(PortalSystem::shoot(&mut scene, 3, &mut textures, 0), ShotOutcome::Placed(PortalColor::Orange));
        assert!((scene.orange_portal.direction() - Vec3::Y).length() < EPSILON);
        assert_eq!(scene.orange_portal.diffuse.as_ref().map(|t| t.name()), Some("orangeportal.png"));
    }

    #[test]
    fn test_shoot_solid_wall_closes_portal_in_place() {
        let mut scene = chamber();
        let mut textures = TextureCache::new();
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, rad(-90.0), 0.0));
        PortalSystem::shoot(&mut scene, 1, &mut textures, 10);
        let placed = scene.blue_portal.clone();

        // Facing -Z hits the solid wall
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert_eq!(PortalSystem::shoot(&mut scene, 1, &mut textures, 20), ShotOutcome::Closed(PortalColor::Blue));

        assert!(!scene.blue_portal.open);
        assert_eq!(scene.blue_portal.position, placed.position);
        assert_eq!(scene.blue_portal.rotation, placed.rotation);
        assert_eq!(scene.blue_portal.diffuse, placed.diffuse);
        assert_eq!(scene.blue_portal.open_since, 10);
    }

    #[test]
    fn test_shoot_into_nothing_closes_portal() {
        let mut scene = chamber();
        let mut textures = TextureCache::new();
        // Straight up: no ceiling
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(rad(90.0), 0.0, 0.0));
        assert_eq!(PortalSystem::shoot(&mut scene, 2, &mut textures, 0), ShotOutcome::Closed(PortalColor::Orange));
        assert!(textures.is_empty());
    }

    #[test]
    fn test_nearest_wall_wins_over_order() {
        let mut scene = chamber();
        // A solid pillar in front of the portalable wall, listed last
        scene.walls.push(PhysicsEntity::new(Vec3::new(3.0, 1.0, 0.0), Vec3::ONE, Material::SOLID));
        let mut textures = TextureCache::new();
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, rad(-90.0), 0.0));

        assert_eq!(PortalSystem::shoot(&mut scene, 1, &mut textures, 0), ShotOutcome::Closed(PortalColor::Blue));
    }

    fn linked_scene() -> Scene {
        let mut scene = chamber();
        let mut textures = TextureCache::new();
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, rad(-90.0), 0.0));
        PortalSystem::shoot(&mut scene, 1, &mut textures, 0);
        aim(&mut scene, Vec3::new(0.0, 1.0, 0.0), Vec3::new(rad(-90.0), 0.0, 0.0));
        PortalSystem::shoot(&mut scene, 2, &mut textures, 0);
        scene
    }

    #[test]
    fn test_teleport_needs_both_portals() {
        let mut scene = linked_scene();
        scene.orange_portal.open = false;
        scene.player.position = Vec3::new(5.1, 1.0, 0.0);
        scene.player.velocity = Vec3::new(0.1, 0.0, 0.0);

        assert_eq!(PortalSystem::teleport(&mut scene), None);
        assert_eq!(scene.player.position, Vec3::new(5.1, 1.0, 0.0));
    }

    #[test]
    fn test_teleport_blue_to_orange() {
        let mut scene = linked_scene();
        scene.player.position = Vec3::new(4.95, 1.0, 0.0);
        scene.player.velocity = Vec3::new(0.1, 0.0, 0.0);
        scene.player.rotation = Vec3::new(0.0, rad(-90.0), 0.0);

        assert_eq!(PortalSystem::teleport(&mut scene), Some(PortalColor::Blue));

        let player = &scene.player;
        assert_eq!(player.position, scene.orange_portal.position);
        assert!((player.speed() - 0.1).abs() < EPSILON);
        assert!((player.velocity.normalized() - Vec3::Y).length() < EPSILON);

        let turn = scene.orange_portal.rotation.y - scene.blue_portal.rotation.y + rad(180.0);
        assert!(angle_eq(player.rotation.y, rad(-90.0) + turn));
    }

    #[test]
    fn test_no_teleport_in_front_of_portal() {
        let mut scene = linked_scene();
        scene.player.position = Vec3::new(4.5, 1.0, 0.0);
        scene.player.velocity = Vec3::new(0.1, 0.0, 0.0);

        assert_eq!(PortalSystem::teleport(&mut scene), None);
    }
}
