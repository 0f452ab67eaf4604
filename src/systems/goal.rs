//! Goal region boundary detection.
//!
//! The external trigger-volume service is modeled as a per-tick containment
//! test against the goal regions in
//! [`SpatialMap`](crate::resources::spatial::SpatialMap). A change relative
//! to the player's latched `on_goal` flag is a boundary crossing and triggers
//! a [`GoalEvent`](crate::events::goal::GoalEvent); the observer in
//! [`crate::events::goal`] applies it.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::position::{Anchor, LocalPosition};
use crate::events::goal::GoalEvent;
use crate::resources::spatial::SpatialMap;

/// Emit enter/exit events for players crossing goal region boundaries.
pub fn goal_regions(
    mut commands: Commands,
    spatial: Res<SpatialMap>,
    players: Query<(Entity, &Player, &LocalPosition, &Anchor)>,
) {
    for (entity, player, position, anchor) in players.iter() {
        let inside = spatial.in_goal(anchor.world_point(position.pos));
        if inside != player.on_goal {
            commands.trigger(GoalEvent {
                player: entity,
                entered: inside,
            });
        }
    }
}
