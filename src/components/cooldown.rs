// Blocks movement re-evaluation until the countdown reaches zero.
use bevy_ecs::prelude::Component;

/// Countdown attached to a player after a blocked or empty move attempt.
///
/// While present, [`crate::systems::movement::player_movement`] skips the
/// entity. [`crate::systems::cooldown::tick_cooldowns`] decrements it and
/// removes it when it expires.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoveCooldown {
    pub remaining: f32,
}

impl MoveCooldown {
    pub fn new(seconds: f32) -> Self {
        MoveCooldown { remaining: seconds }
    }
}
