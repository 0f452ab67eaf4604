//! Spatial registry for obstacle and goal queries.
//!
//! Replaces scene-wide physics with an explicit registry: obstacle cells are
//! keyed by their half-step grid coordinate, goal regions are axis-aligned
//! boxes. The two queries the simulation consumes are a bounded-distance ray
//! test ([`SpatialMap::raycast`]) and a point containment test
//! ([`SpatialMap::in_goal`]).

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use rustc_hash::FxHashMap;

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

/// Sampling step along a ray, in world units. Half a grid half-step, so a
/// cell between origin and target cannot be skipped over.
const RAY_STEP: f32 = 0.25;

/// Registry of tagged obstacle cells and goal regions.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpatialMap {
    obstacles: FxHashMap<(i32, i32), String>,
    goals: Vec<Aabb>,
}

impl SpatialMap {
    pub fn new() -> Self {
        SpatialMap::default()
    }

    /// Quantize a world point to its half-step grid cell on the XZ plane.
    fn cell(p: Vec3) -> (i32, i32) {
        ((p.x * 2.0).round() as i32, (p.z * 2.0).round() as i32)
    }

    /// Register a tagged obstacle occupying the cell at `pos`.
    pub fn add_obstacle(&mut self, pos: Vec3, tag: impl Into<String>) {
        self.obstacles.insert(Self::cell(pos), tag.into());
    }

    /// Register a goal region.
    pub fn add_goal(&mut self, region: Aabb) {
        self.goals.push(region);
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    /// Bounded ray test from `origin` toward `target`.
    ///
    /// Samples the ray at fixed increments up to `max_dist` and returns the
    /// tag of the first occupied cell, ignoring the cell the origin itself
    /// is in. Like the physics query it stands in for, the ray does not stop
    /// at `target`; only `max_dist` bounds it.
    pub fn raycast(&self, origin: Vec3, target: Vec3, max_dist: f32) -> Option<&str> {
        let dir = target - origin;
        let len = dir.length();
        if len <= f32::EPSILON {
            return None;
        }
        let dir = dir / len;
        let origin_cell = Self::cell(origin);

        let steps = (max_dist / RAY_STEP).floor() as i32;
        for i in 1..=steps {
            let p = origin + dir * (i as f32 * RAY_STEP);
            let cell = Self::cell(p);
            if cell == origin_cell {
                continue;
            }
            if let Some(tag) = self.obstacles.get(&cell) {
                return Some(tag.as_str());
            }
        }
        None
    }

    /// True when `p` is inside any goal region.
    pub fn in_goal(&self, p: Vec3) -> bool {
        self.goals.iter().any(|g| g.contains(p))
    }
}
