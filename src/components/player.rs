//! Player movement and goal state.
//!
//! Each player entity carries a pair of flags read by
//! [`crate::systems::movement::player_movement`] and
//! [`crate::systems::gameover::check_game_over`]:
//! - `is_moving` is true while a move animation is in flight
//! - `on_goal` is toggled by goal region enter/exit events

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Player {
    /// Display name used in log output.
    pub name: String,
    /// True while a move animation is in flight.
    pub is_moving: bool,
    /// True while the player is inside a goal region.
    pub on_goal: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            is_moving: false,
            on_goal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_new_defaults() {
        let p = Player::new("P1");
        assert_eq!(p.name, "P1");
        assert!(!p.is_moving);
        assert!(!p.on_goal);
    }
}
