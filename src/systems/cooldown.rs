//! Movement cooldown system.
//!
//! Decrements every [`MoveCooldown`](crate::components::cooldown::MoveCooldown)
//! by the frame delta and removes it once it expires, re-enabling movement
//! evaluation for the entity.

use bevy_ecs::prelude::*;

use crate::components::cooldown::MoveCooldown;
use crate::resources::worldtime::WorldTime;

/// Count down movement cooldowns, removing expired ones.
pub fn tick_cooldowns(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MoveCooldown)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut cooldown) in query.iter_mut() {
        cooldown.remaining -= dt;
        if cooldown.remaining <= 0.0 {
            commands.entity(entity).remove::<MoveCooldown>();
        }
    }
}
