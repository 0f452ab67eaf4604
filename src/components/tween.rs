//! Tween components for animated interpolation.
//!
//! This module provides the per-entity animation state for the two moves the
//! game performs:
//! - [`MoveTween`] – animate a player's [`LocalPosition`](super::position::LocalPosition)
//! - [`FlipTween`] – animate a tile's [`Rotation`](super::rotation::Rotation)
//!
//! Both are one-shot linear interpolations: `{from, to, duration, time}`
//! advanced once per tick by [`crate::systems::tween`]. When the elapsed time
//! reaches the duration the tween reports [`Advance::Done`] and the animated
//! property is snapped exactly to `to`.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Result of advancing a tween by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    InProgress,
    Done,
}

fn step(time: &mut f32, duration: f32, dt: f32) -> Advance {
    *time += dt;
    if *time >= duration {
        *time = duration;
        Advance::Done
    } else {
        Advance::InProgress
    }
}

/// Animates a player's local position between two grid points.
#[derive(Component, Clone, Debug)]
pub struct MoveTween {
    /// Starting local position.
    pub from: Vec3,
    /// Target local position.
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time within the tween.
    pub time: f32,
}

impl MoveTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        MoveTween {
            from,
            to,
            duration,
            time: 0.0,
        }
    }

    /// Advance the elapsed time by `dt`, clamping at the duration.
    pub fn advance(&mut self, dt: f32) -> Advance {
        step(&mut self.time, self.duration, dt)
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Animates a tile's Euler rotation between two orientations.
#[derive(Component, Clone, Debug)]
pub struct FlipTween {
    /// Starting rotation in degrees.
    pub from: Vec3,
    /// Target rotation in degrees.
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time within the tween.
    pub time: f32,
}

impl FlipTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        FlipTween {
            from,
            to,
            duration,
            time: 0.0,
        }
    }

    /// Advance the elapsed time by `dt`, clamping at the duration.
    pub fn advance(&mut self, dt: f32) -> Advance {
        step(&mut self.time, self.duration, dt)
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_move_tween_new() {
        let tw = MoveTween::new(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.5), 0.5);
        assert_eq!(tw.from, Vec3::ZERO);
        assert_eq!(tw.to, Vec3::new(0.5, 0.0, 0.5));
        assert!(approx_eq(tw.duration, 0.5));
        assert!(approx_eq(tw.time, 0.0));
    }

    #[test]
    fn test_move_tween_advance_in_progress() {
        let mut tw = MoveTween::new(Vec3::ZERO, Vec3::ONE, 0.5);
        assert_eq!(tw.advance(0.25), Advance::InProgress);
        assert!(approx_eq(tw.progress(), 0.5));
    }

    #[test]
    fn test_move_tween_advance_done_clamps_time() {
        let mut tw = MoveTween::new(Vec3::ZERO, Vec3::ONE, 0.5);
        assert_eq!(tw.advance(0.75), Advance::Done);
        assert!(approx_eq(tw.time, 0.5));
        assert!(approx_eq(tw.progress(), 1.0));
    }

    #[test]
    fn test_move_tween_done_exactly_at_duration() {
        let mut tw = MoveTween::new(Vec3::ZERO, Vec3::ONE, 0.5);
        assert_eq!(tw.advance(0.25), Advance::InProgress);
        assert_eq!(tw.advance(0.25), Advance::Done);
    }

    #[test]
    fn test_flip_tween_advance() {
        let mut tw = FlipTween::new(Vec3::ZERO, Vec3::new(60.0, 0.0, 180.0), 0.5);
        assert_eq!(tw.advance(0.125), Advance::InProgress);
        assert!(approx_eq(tw.progress(), 0.25));
        assert_eq!(tw.advance(0.5), Advance::Done);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut tw = MoveTween::new(Vec3::ZERO, Vec3::ONE, 0.0);
        assert_eq!(tw.advance(0.0), Advance::Done);
        assert!(approx_eq(tw.progress(), 1.0));
    }
}
