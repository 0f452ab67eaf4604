//! Per-tick gameplay input resource.
//!
//! Captures the already-resolved input the simulation cares about: a 2D
//! movement vector and a scalar flip trigger. The external input service is
//! a black box here; [`crate::events::input::apply_input_commands`] feeds
//! this resource from queued [`InputCmd`](crate::events::input::InputCmd)
//! messages, and gameplay systems poll it once per tick.
use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Resource capturing the per-tick input state relevant to gameplay.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Movement axes. Resolved to a grid step by axis priority, not combined.
    pub movement: Vec2,
    /// Flip trigger value; any nonzero value requests a flip.
    pub flip: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_is_neutral() {
        let input = InputState::default();
        assert_eq!(input.movement, Vec2::ZERO);
        assert_eq!(input.flip, 0.0);
    }
}
