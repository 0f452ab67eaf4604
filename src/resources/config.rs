//! Simulation configuration resource.
//!
//! Holds the timing and distance constants of the simulation, with safe
//! defaults and optional overrides from an INI file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! duration = 0.5
//! cooldown = 0.5
//! ray_distance = 1.0
//!
//! [flip]
//! duration = 0.5
//!
//! [sim]
//! tick_delta = 0.016666
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MOVE_DURATION: f32 = 0.5;
const DEFAULT_FLIP_DURATION: f32 = 0.5;
const DEFAULT_COOLDOWN: f32 = 0.5;
const DEFAULT_RAY_DISTANCE: f32 = 1.0;
const DEFAULT_TICK_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Seconds a move animation takes to cross one grid cell.
    pub move_duration: f32,
    /// Seconds a tile takes to rotate between orientations.
    pub flip_duration: f32,
    /// Seconds a player waits after a blocked or empty move attempt.
    pub cooldown: f32,
    /// Maximum distance of the obstacle ray test.
    pub ray_distance: f32,
    /// Seconds of simulated time per tick in the headless driver.
    pub tick_delta: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            move_duration: DEFAULT_MOVE_DURATION,
            flip_duration: DEFAULT_FLIP_DURATION,
            cooldown: DEFAULT_COOLDOWN,
            ray_distance: DEFAULT_RAY_DISTANCE,
            tick_delta: DEFAULT_TICK_DELTA,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [movement] section
        if let Some(duration) = config.getfloat("movement", "duration").ok().flatten() {
            self.move_duration = duration as f32;
        }
        if let Some(cooldown) = config.getfloat("movement", "cooldown").ok().flatten() {
            self.cooldown = cooldown as f32;
        }
        if let Some(dist) = config.getfloat("movement", "ray_distance").ok().flatten() {
            self.ray_distance = dist as f32;
        }

        // [flip] section
        if let Some(duration) = config.getfloat("flip", "duration").ok().flatten() {
            self.flip_duration = duration as f32;
        }

        // [sim] section
        if let Some(delta) = config.getfloat("sim", "tick_delta").ok().flatten() {
            self.tick_delta = delta as f32;
        }

        info!(
            "Loaded config: move={}s, flip={}s, cooldown={}s, ray={}, tick={}s",
            self.move_duration, self.flip_duration, self.cooldown, self.ray_distance,
            self.tick_delta
        );

        Ok(())
    }
}
