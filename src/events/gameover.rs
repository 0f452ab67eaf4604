//! Game-over notification.
//!
//! [`crate::systems::gameover::check_game_over`] latches the terminal flag on
//! [`WorldState`](crate::resources::worldstate::WorldState) and triggers a
//! single [`GameOverEvent`]. The flag itself is the contract; this event only
//! lets the outside world react to the transition.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event fired exactly once, when every player has reached a goal.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {}

/// Observer that announces the end of the run.
pub fn observe_game_over(_trigger: On<GameOverEvent>) {
    info!("Game over");
}
