//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_accumulates() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.25);
        update_world_time(&mut world, 0.25);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.25);
        assert_eq!(wt.elapsed, 0.5);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_update_world_time_applies_time_scale() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            time_scale: 2.0,
            ..Default::default()
        });
        update_world_time(&mut world, 0.25);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.5);
        assert_eq!(wt.elapsed, 0.5);
    }
}
