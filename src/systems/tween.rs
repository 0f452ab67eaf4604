//! Tween animation systems.
//!
//! These systems advance the in-flight animations once per tick:
//! - [`move_tween_system`] – animates player positions, clearing the
//!   player's `is_moving` flag on completion
//! - [`flip_tween_system`] – animates tile rotations, releasing the
//!   [`WorldState`](crate::resources::worldstate::WorldState) flip barrier as
//!   tiles settle
//!
//! Interpolation is linear and completion snaps the animated property
//! exactly to the tween target, never to the last interpolated sample.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};

use crate::components::player::Player;
use crate::components::position::LocalPosition;
use crate::components::rotation::Rotation;
use crate::components::tween::{Advance, FlipTween, MoveTween};
use crate::resources::worldstate::WorldState;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two vectors.
pub(crate) fn lerp_v3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Animate player positions based on [`MoveTween`] components.
pub fn move_tween_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut LocalPosition, &mut Player, &mut MoveTween)>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut position, mut player, mut tween) in query.iter_mut() {
        match tween.advance(dt) {
            Advance::InProgress => {
                position.pos = lerp_v3(tween.from, tween.to, tween.progress());
            }
            Advance::Done => {
                position.pos = tween.to;
                player.is_moving = false;
                commands.entity(entity).remove::<MoveTween>();
                debug!("{}: move finished at {:?}", player.name, tween.to);
            }
        }
    }
}

/// Animate tile rotations based on [`FlipTween`] components.
///
/// Each settling tile decrements the pending counter on `WorldState`; the
/// flipping flag clears on the same tick the last tile snaps to its target.
pub fn flip_tween_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut world_state: ResMut<WorldState>,
    mut query: Query<(Entity, &mut Rotation, &mut FlipTween)>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut rotation, mut tween) in query.iter_mut() {
        match tween.advance(dt) {
            Advance::InProgress => {
                rotation.euler = lerp_v3(tween.from, tween.to, tween.progress());
            }
            Advance::Done => {
                rotation.euler = tween.to;
                commands.entity(entity).remove::<FlipTween>();
                if world_state.tile_settled() {
                    info!("Flip finished");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_v3_basic() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 20.0, -30.0);
        let mid = lerp_v3(a, b, 0.5);
        assert!(approx_eq(mid.x, 5.0));
        assert!(approx_eq(mid.y, 10.0));
        assert!(approx_eq(mid.z, -15.0));
    }

    #[test]
    fn test_lerp_v3_at_boundaries() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(11.0, 22.0, 33.0);
        assert_eq!(lerp_v3(a, b, 0.0), a);
        let end = lerp_v3(a, b, 1.0);
        assert!(approx_eq(end.x, 11.0));
        assert!(approx_eq(end.y, 22.0));
        assert!(approx_eq(end.z, 33.0));
    }

    #[test]
    fn test_lerp_v3_component_independence() {
        let a = Vec3::new(0.0, 100.0, 0.0);
        let b = Vec3::new(100.0, 0.0, 50.0);
        let q = lerp_v3(a, b, 0.25);
        assert!(approx_eq(q.x, 25.0));
        assert!(approx_eq(q.y, 75.0));
        assert!(approx_eq(q.z, 12.5));
    }
}
