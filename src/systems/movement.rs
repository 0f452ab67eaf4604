//! Player movement controller.
//!
//! One evaluation per tick and per player:
//!
//! 1. Skip while the player is mid-move or cooling down, and while the world
//!    is flipping or the game is over.
//! 2. Resolve the movement input to a grid displacement by axis priority.
//! 3. No displacement: enter a cooldown, do not move.
//! 4. Ray-test the path in world space; an `"Obstacle"` hit also enters a
//!    cooldown.
//! 5. Otherwise face the travel direction (yaw only) and start a
//!    [`MoveTween`](crate::components::tween::MoveTween).
//!
//! All blocked outcomes are control-flow no-ops; nothing here can fail.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use log::debug;

use crate::components::cooldown::MoveCooldown;
use crate::components::player::Player;
use crate::components::position::{Anchor, LocalPosition};
use crate::components::rotation::Yaw;
use crate::components::tween::MoveTween;
use crate::resources::config::SimConfig;
use crate::resources::input::InputState;
use crate::resources::spatial::SpatialMap;
use crate::resources::worldstate::WorldState;

/// Tag that blocks movement when hit by the path ray test.
pub const OBSTACLE_TAG: &str = "Obstacle";

/// Resolve the 2D input vector to a grid displacement.
///
/// Axis priority is fixed: +x, -x, +y, -y. The first matching axis wins and
/// the rest are ignored, so opposing or diagonal inputs resolve to a single
/// half-diagonal step and never combine. Returns `None` when no axis is
/// active.
pub(crate) fn grid_step(movement: Vec2) -> Option<Vec3> {
    if movement.x > 0.0 {
        Some(Vec3::new(0.5, 0.0, 0.5))
    } else if movement.x < 0.0 {
        Some(Vec3::new(-0.5, 0.0, -0.5))
    } else if movement.y > 0.0 {
        Some(Vec3::new(-0.5, 0.0, 0.5))
    } else if movement.y < 0.0 {
        Some(Vec3::new(0.5, 0.0, -0.5))
    } else {
        None
    }
}

/// Evaluate movement input for every idle player.
pub fn player_movement(
    mut commands: Commands,
    config: Res<SimConfig>,
    world_state: Res<WorldState>,
    spatial: Res<SpatialMap>,
    input: Res<InputState>,
    mut query: Query<
        (Entity, &mut Player, &LocalPosition, &Anchor, &mut Yaw),
        (Without<MoveTween>, Without<MoveCooldown>),
    >,
) {
    if world_state.is_flipping() || world_state.game_over() {
        return;
    }

    for (entity, mut player, position, anchor, mut yaw) in query.iter_mut() {
        if player.is_moving {
            continue;
        }

        let Some(displacement) = grid_step(input.movement) else {
            // No active axis: wait before the next evaluation instead of
            // re-checking next tick.
            commands
                .entity(entity)
                .insert(MoveCooldown::new(config.cooldown));
            continue;
        };

        let target_local = position.pos + displacement;
        let origin_world = anchor.world_point(position.pos);
        let target_world = anchor.world_point(target_local);

        if let Some(tag) = spatial.raycast(origin_world, target_world, config.ray_distance) {
            if tag == OBSTACLE_TAG {
                debug!("{}: move blocked by obstacle", player.name);
                commands
                    .entity(entity)
                    .insert(MoveCooldown::new(config.cooldown));
                continue;
            }
        }

        // Face the horizontal direction of travel; pitch and roll stay zero.
        yaw.degrees = Yaw::from_direction(displacement);

        player.is_moving = true;
        commands.entity(entity).insert(MoveTween::new(
            position.pos,
            target_local,
            config.move_duration,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_positive_x_wins() {
        assert_eq!(
            grid_step(Vec2::new(1.0, 0.0)),
            Some(Vec3::new(0.5, 0.0, 0.5))
        );
    }

    #[test]
    fn test_grid_step_negative_x() {
        assert_eq!(
            grid_step(Vec2::new(-1.0, 0.0)),
            Some(Vec3::new(-0.5, 0.0, -0.5))
        );
    }

    #[test]
    fn test_grid_step_positive_y() {
        assert_eq!(
            grid_step(Vec2::new(0.0, 1.0)),
            Some(Vec3::new(-0.5, 0.0, 0.5))
        );
    }

    #[test]
    fn test_grid_step_negative_y() {
        assert_eq!(
            grid_step(Vec2::new(0.0, -1.0)),
            Some(Vec3::new(0.5, 0.0, -0.5))
        );
    }

    #[test]
    fn test_grid_step_neutral_is_none() {
        assert_eq!(grid_step(Vec2::ZERO), None);
    }

    #[test]
    fn test_grid_step_priority_x_over_y() {
        // Diagonal input resolves to the x axis only, never a combination.
        assert_eq!(
            grid_step(Vec2::new(1.0, 1.0)),
            Some(Vec3::new(0.5, 0.0, 0.5))
        );
        assert_eq!(
            grid_step(Vec2::new(-1.0, 1.0)),
            Some(Vec3::new(-0.5, 0.0, -0.5))
        );
    }

    #[test]
    fn test_grid_step_magnitude_independent() {
        assert_eq!(
            grid_step(Vec2::new(0.1, 0.0)),
            grid_step(Vec2::new(100.0, 0.0))
        );
    }
}
