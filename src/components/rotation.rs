use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Euler rotation in degrees, applied X then Y then Z.
///
/// Tiles animate this between the two grid orientations; see
/// [`crate::components::tile::Orientation`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub euler: Vec3,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Rotation {
            euler: Vec3::new(x, y, z),
        }
    }
}

/// Heading of a player around the vertical axis, in degrees.
///
/// Pitch and roll are suppressed: facing a travel direction only ever
/// changes yaw.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Yaw {
    pub degrees: f32,
}

impl Yaw {
    /// Yaw that faces the horizontal part of `dir`. Zero degrees faces +Z.
    pub fn from_direction(dir: Vec3) -> f32 {
        dir.x.atan2(dir.z).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_yaw_faces_positive_z() {
        assert!(approx_eq(Yaw::from_direction(Vec3::new(0.0, 0.0, 1.0)), 0.0));
    }

    #[test]
    fn test_yaw_faces_positive_x() {
        assert!(approx_eq(
            Yaw::from_direction(Vec3::new(1.0, 0.0, 0.0)),
            90.0
        ));
    }

    #[test]
    fn test_yaw_faces_diagonal() {
        assert!(approx_eq(
            Yaw::from_direction(Vec3::new(0.5, 0.0, 0.5)),
            45.0
        ));
        assert!(approx_eq(
            Yaw::from_direction(Vec3::new(-0.5, 0.0, -0.5)),
            -135.0
        ));
    }

    #[test]
    fn test_yaw_ignores_vertical_component() {
        let flat = Yaw::from_direction(Vec3::new(1.0, 0.0, 1.0));
        let tilted = Yaw::from_direction(Vec3::new(1.0, 5.0, 1.0));
        assert!(approx_eq(flat, tilted));
    }
}
