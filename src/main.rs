//! Flipgrid headless driver.
//!
//! A grid puzzle simulation built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for vector math
//!
//! The binary assembles a world from a level description, feeds a scripted
//! input sequence through the command queue, and ticks the simulation at a
//! fixed delta until every player reaches a goal or the tick budget runs
//! out.
//!
//! # Project Structure
//!
//! - [`flipgrid::components`] – ECS components (position, tiles, tweens, ...)
//! - [`flipgrid::events`] – event types and observers (goal, game over, input)
//! - [`flipgrid::game`] – world assembly and level population
//! - [`flipgrid::resources`] – ECS resources (world state, spatial map, ...)
//! - [`flipgrid::systems`] – ECS systems (movement, flip, tweens, ...)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --max-ticks 600
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use flipgrid::components::player::Player;
use flipgrid::components::position::LocalPosition;
use flipgrid::components::rotation::Rotation;
use flipgrid::components::tile::{Orientation, Tile};
use flipgrid::events::input::InputCmd;
use flipgrid::game;
use flipgrid::resources::config::SimConfig;
use flipgrid::resources::level::Level;
use flipgrid::resources::worldstate::WorldState;
use flipgrid::resources::worldtime::WorldTime;
use flipgrid::systems::time::update_world_time;

/// Flipgrid headless simulation driver
#[derive(Parser)]
#[command(version, about = "Grid-flip puzzle simulation, headless driver")]
struct Cli {
    /// Level description JSON; defaults to the built-in demo level.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// INI configuration file overriding simulation constants.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop after this many ticks even if the game is not over.
    #[arg(long, default_value_t = 600)]
    max_ticks: u64,
}

/// Scripted input for the demo run: flip the world once, then walk the
/// player along the positive diagonal onto the goal.
const SCRIPT: &[(u64, InputCmd)] = &[
    (2, InputCmd::Flip(1.0)),
    (4, InputCmd::Release),
    (10, InputCmd::Move { x: 1.0, y: 0.0 }),
    (70, InputCmd::Release),
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    match config.load_from_file() {
        Ok(()) => {}
        Err(e) if cli.config.is_some() => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(_) => {
            // No config file next to the binary; defaults are fine.
        }
    }

    let level = match &cli.level {
        Some(path) => match Level::load(path) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Level::demo(),
    };

    let dt = config.tick_delta;
    let mut world = game::build_world(config);
    game::spawn_level(&mut world, &level);
    let mut schedule = game::build_schedule();

    for tick in 0..cli.max_ticks {
        for (at, cmd) in SCRIPT {
            if *at == tick {
                world.resource_mut::<Messages<InputCmd>>().write(*cmd);
            }
        }

        update_world_time(&mut world, dt);
        schedule.run(&mut world);
        world.resource_mut::<Messages<InputCmd>>().update();

        if world.resource::<WorldState>().game_over() {
            break;
        }
    }

    let time = *world.resource::<WorldTime>();
    let game_over = world.resource::<WorldState>().game_over();
    info!(
        "Simulation ended after {} ticks ({:.2}s), game over: {}",
        time.frame_count, time.elapsed, game_over
    );

    let mut players = world.query::<(&Player, &LocalPosition)>();
    for (player, position) in players.iter(&world) {
        info!(
            "{}: pos=({:.2}, {:.2}, {:.2}) on_goal={}",
            player.name, position.pos.x, position.pos.y, position.pos.z, player.on_goal
        );
    }

    let mut tiles = world.query_filtered::<(&LocalPosition, &Rotation, &Orientation), With<Tile>>();
    for (position, rotation, orientation) in tiles.iter(&world) {
        info!(
            "tile ({:.0}, {:.0}): {:?}, rotation=({:.0}, {:.0}, {:.0})",
            position.pos.x,
            position.pos.z,
            orientation,
            rotation.euler.x,
            rotation.euler.y,
            rotation.euler.z
        );
    }
}
