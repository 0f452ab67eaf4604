//! Event types and observers used by the simulation.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`gameover`] – terminal notification when every player is on a goal
//! - [`goal`] – goal region enter/exit notifications for players
//! - [`input`] – queued input commands for the headless driver and tests

pub mod gameover;
pub mod goal;
pub mod input;
