//! Flipgrid simulation library.
//!
//! A headless simulation core for a small grid puzzle: players step across a
//! unit grid of tiles, the whole grid can flip between two orientations, and
//! the run ends when every player stands on a goal. The world is a bevy_ecs
//! [`World`](bevy_ecs::world::World) advanced by an external per-tick driver.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! and events for use by the headless driver binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
