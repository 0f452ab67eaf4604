//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `config` – durations, distances, and tick delta, with INI override
//! - `input` – per-tick movement vector and flip trigger
//! - `level` – deserializable level description and the built-in demo level
//! - `spatial` – registry of tagged obstacle cells and goal regions
//! - `worldstate` – flip/game-over flags and the flip completion barrier
//! - `worldtime` – simulation time and delta

pub mod config;
pub mod input;
pub mod level;
pub mod spatial;
pub mod worldstate;
pub mod worldtime;
