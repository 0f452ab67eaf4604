//! Queued input commands.
//!
//! The external input service is a black box to the simulation; it only has
//! to land its readings in the [`InputState`](crate::resources::input::InputState)
//! resource before gameplay systems poll it. The headless driver and the
//! tests feed readings through a [`InputCmd`] message queue, drained once per
//! tick by [`apply_input_commands`], which serializes them onto the tick
//! loop.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::resources::input::InputState;

/// A change to the polled input state.
///
/// Values persist until overwritten, like a held key.
#[derive(Message, Debug, Clone, Copy)]
pub enum InputCmd {
    /// Set the 2D movement vector.
    Move { x: f32, y: f32 },
    /// Set the scalar flip trigger.
    Flip(f32),
    /// Reset both movement and flip to neutral.
    Release,
}

/// Drain queued input commands into the `InputState` resource.
pub fn apply_input_commands(
    mut reader: MessageReader<InputCmd>,
    mut input: ResMut<InputState>,
) {
    for cmd in reader.read() {
        match *cmd {
            InputCmd::Move { x, y } => input.movement = Vec2::new(x, y),
            InputCmd::Flip(value) => input.flip = value,
            InputCmd::Release => {
                input.movement = Vec2::ZERO;
                input.flip = 0.0;
            }
        }
    }
}
