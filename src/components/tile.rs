//! Grid tile marker and orientation.
//!
//! Every tile tracks which of the two grid orientations it is logically in.
//! The orientation is an explicit enum rather than something reverse-derived
//! from the tile's current rotation, so a flip always knows its direction
//! even while an animation is in flight.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Marker for grid tile entities.
#[derive(Component, Clone, Copy, Debug)]
pub struct Tile;

/// One of the two discrete orientations a tile can settle in.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Identity rotation.
    #[default]
    Flat,
    /// Rotated 60 degrees about X and 180 degrees about Z.
    Flipped,
}

impl Orientation {
    /// The Euler rotation (degrees) a tile settles at in this orientation.
    pub fn euler(self) -> Vec3 {
        match self {
            Orientation::Flat => Vec3::ZERO,
            Orientation::Flipped => Vec3::new(60.0, 0.0, 180.0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Orientation::Flat => Orientation::Flipped,
            Orientation::Flipped => Orientation::Flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_default_is_flat() {
        assert_eq!(Orientation::default(), Orientation::Flat);
    }

    #[test]
    fn test_orientation_euler_table() {
        assert_eq!(Orientation::Flat.euler(), Vec3::ZERO);
        assert_eq!(Orientation::Flipped.euler(), Vec3::new(60.0, 0.0, 180.0));
    }

    #[test]
    fn test_orientation_opposite_is_involutive() {
        assert_eq!(Orientation::Flat.opposite(), Orientation::Flipped);
        assert_eq!(Orientation::Flipped.opposite(), Orientation::Flat);
        assert_eq!(Orientation::Flat.opposite().opposite(), Orientation::Flat);
    }
}
