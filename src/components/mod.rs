//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, orientation,
//! movement state, and in-flight animations.
//!
//! Submodules overview:
//! - [`cooldown`] – countdown that blocks movement re-evaluation for a while
//! - [`player`] – per-player movement and goal flags
//! - [`position`] – grid-local position and the parent frame it lives in
//! - [`rotation`] – Euler rotation for tiles, yaw for players
//! - [`tile`] – grid tile marker and its tracked orientation
//! - [`tween`] – animated interpolation of position and rotation

pub mod cooldown;
pub mod player;
pub mod position;
pub mod rotation;
pub mod tile;
pub mod tween;
