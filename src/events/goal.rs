//! Goal region boundary events and their observer.
//!
//! [`crate::systems::goal::goal_regions`] triggers a [`GoalEvent`] whenever a
//! player's world position crosses a goal region boundary. The observer in
//! this module applies the transition to the player's `on_goal` flag.
//!
//! There is no debouncing: a player standing across a boundary edge may
//! toggle rapidly. That is accepted behavior.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::Player;

/// Event fired when a player enters or leaves a goal region.
#[derive(Event, Debug, Clone, Copy)]
pub struct GoalEvent {
    pub player: Entity,
    /// True on entering the region, false on leaving it.
    pub entered: bool,
}

/// Observer that latches the player's `on_goal` flag on boundary crossings.
pub fn observe_goal_transition(trigger: On<GoalEvent>, mut players: Query<&mut Player>) {
    let event = trigger.event();
    let Ok(mut player) = players.get_mut(event.player) else {
        return;
    };
    player.on_goal = event.entered;
    if event.entered {
        info!("{} is on the goal.", player.name);
    } else {
        info!("{} left the goal.", player.name);
    }
}
