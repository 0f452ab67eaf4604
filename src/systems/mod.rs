//! Simulation systems.
//!
//! This module groups all ECS systems that advance the simulation, one
//! logical frame per schedule run.
//!
//! Submodules overview
//! - [`cooldown`] – count down and remove movement cooldowns
//! - [`flip`] – accept the flip trigger and start every tile's rotation
//! - [`gameover`] – latch the terminal flag when all players are on goal
//! - [`goal`] – detect goal region boundary crossings and emit events
//! - [`movement`] – evaluate movement input and start move animations
//! - [`time`] – update simulation time and delta
//! - [`tween`] – advance move and flip animations

pub mod cooldown;
pub mod flip;
pub mod gameover;
pub mod goal;
pub mod movement;
pub mod time;
pub mod tween;
