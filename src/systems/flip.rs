//! World flip orchestration.
//!
//! When the flip trigger is active, every tile gets a
//! [`FlipTween`](crate::components::tween::FlipTween) toward the opposite of
//! its tracked [`Orientation`](crate::components::tile::Orientation), and the
//! [`WorldState`](crate::resources::worldstate::WorldState) barrier is armed
//! with the tile count. All tiles animate concurrently across the following
//! ticks; [`crate::systems::tween::flip_tween_system`] releases the barrier
//! as they settle.
//!
//! A flip cannot start while one is in flight or after game over, so a tile's
//! orientation is never toggled mid-animation.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::rotation::Rotation;
use crate::components::tile::{Orientation, Tile};
use crate::components::tween::FlipTween;
use crate::resources::config::SimConfig;
use crate::resources::input::InputState;
use crate::resources::worldstate::WorldState;

/// Accept the flip trigger and start rotating every tile.
pub fn flip_trigger(
    mut commands: Commands,
    config: Res<SimConfig>,
    input: Res<InputState>,
    mut world_state: ResMut<WorldState>,
    mut tiles: Query<(Entity, &Rotation, &mut Orientation), With<Tile>>,
) {
    if input.flip == 0.0 || world_state.is_flipping() || world_state.game_over() {
        return;
    }

    let mut count = 0;
    for (entity, rotation, mut orientation) in tiles.iter_mut() {
        let target = orientation.opposite();
        commands.entity(entity).insert(FlipTween::new(
            rotation.euler,
            target.euler(),
            config.flip_duration,
        ));
        *orientation = target;
        count += 1;
    }

    world_state.begin_flip(count);
    if count > 0 {
        info!("Flip started: {} tiles", count);
    } else {
        debug!("Flip triggered with no tiles; completed immediately");
    }
}
