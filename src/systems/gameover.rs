//! Game-over check.
//!
//! Once per tick: if any player is off goal, nothing happens; if every
//! player is on goal, the terminal flag latches and a single
//! [`GameOverEvent`](crate::events::gameover::GameOverEvent) fires.
//!
//! An empty player set satisfies the check vacuously and latches game over
//! on the first tick evaluated. Documented behavior, inherited from the
//! "any off-goal player blocks" formulation.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::events::gameover::GameOverEvent;
use crate::resources::worldstate::WorldState;

/// Latch game over when every player stands on a goal.
pub fn check_game_over(
    mut commands: Commands,
    mut world_state: ResMut<WorldState>,
    players: Query<&Player>,
) {
    if world_state.game_over() {
        return;
    }
    if players.iter().any(|player| !player.on_goal) {
        return;
    }
    if world_state.latch_game_over() {
        commands.trigger(GameOverEvent {});
    }
}
