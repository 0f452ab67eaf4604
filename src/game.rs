//! World assembly and level population.
//!
//! [`build_world`] creates an ECS world carrying every simulation resource
//! and the goal/game-over observers; [`spawn_level`] populates it from a
//! [`Level`](crate::resources::level::Level); [`build_schedule`] wires the
//! per-tick systems in their deterministic order.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::player::Player;
use crate::components::position::{Anchor, LocalPosition};
use crate::components::rotation::{Rotation, Yaw};
use crate::components::tile::{Orientation, Tile};
use crate::events::gameover::observe_game_over;
use crate::events::goal::observe_goal_transition;
use crate::events::input::{InputCmd, apply_input_commands};
use crate::resources::config::SimConfig;
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::spatial::{Aabb, SpatialMap};
use crate::resources::worldstate::WorldState;
use crate::resources::worldtime::WorldTime;
use crate::systems::cooldown::tick_cooldowns;
use crate::systems::flip::flip_trigger;
use crate::systems::gameover::check_game_over;
use crate::systems::goal::goal_regions;
use crate::systems::movement::player_movement;
use crate::systems::tween::{flip_tween_system, move_tween_system};

/// Create a world with all simulation resources and observers installed.
pub fn build_world(config: SimConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldState::new());
    world.insert_resource(SpatialMap::new());
    world.insert_resource(config);
    world.init_resource::<Messages<InputCmd>>();
    world.add_observer(observe_goal_transition);
    world.add_observer(observe_game_over);
    world
}

/// The per-tick schedule.
///
/// Systems are chained: the simulation is single-threaded and correctness
/// depends on the ordering of checks within a tick (input before flip, flip
/// acceptance before movement evaluation, animations after both).
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_input_commands,
            flip_trigger,
            check_game_over,
            player_movement,
            tick_cooldowns,
            move_tween_system,
            flip_tween_system,
            goal_regions,
        )
            .chain(),
    );
    schedule
}

/// Populate the world from a level description.
pub fn spawn_level(world: &mut World, level: &Level) {
    for tile in &level.tiles {
        world.spawn((
            Tile,
            Orientation::Flat,
            Rotation::default(),
            LocalPosition::new(tile.x, 0.0, tile.z),
        ));
    }

    for player in &level.players {
        world.spawn((
            Player::new(player.name.as_str()),
            LocalPosition::new(player.x, 0.0, player.z),
            Anchor::new(player.anchor_vec()),
            Yaw::default(),
        ));
    }

    let mut spatial = world.resource_mut::<SpatialMap>();
    for obstacle in &level.obstacles {
        spatial.add_obstacle(
            Vec3::new(obstacle.x, 0.0, obstacle.z),
            obstacle.tag.as_str(),
        );
    }
    for goal in &level.goals {
        spatial.add_goal(Aabb::new(
            Vec3::from_array(goal.min),
            Vec3::from_array(goal.max),
        ));
    }

    info!(
        "Level '{}' loaded: {} tiles, {} players, {} obstacles, {} goals",
        level.name,
        level.tiles.len(),
        level.players.len(),
        level.obstacles.len(),
        level.goals.len()
    );
}
