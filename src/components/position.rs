use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Grid-local position of an entity.
///
/// Players logically live on a unit grid in the XZ plane; moves displace this
/// position in half-steps of 0.5 along both axes.
#[derive(Component, Clone, Copy, Debug)]
pub struct LocalPosition {
    pub pos: Vec3,
}

impl LocalPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        LocalPosition {
            pos: Vec3::new(x, y, z),
        }
    }
}

/// Parent frame a [`LocalPosition`] is expressed in.
///
/// Stands in for the scene-graph parent transform: world-space points are
/// obtained by offsetting local coordinates with the frame origin.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Anchor {
    pub origin: Vec3,
}

impl Anchor {
    pub fn new(origin: Vec3) -> Self {
        Anchor { origin }
    }

    /// Convert a local-space point to world space.
    pub fn world_point(&self, local: Vec3) -> Vec3 {
        self.origin + local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_position_new() {
        let p = LocalPosition::new(1.0, 0.0, -2.5);
        assert_eq!(p.pos, Vec3::new(1.0, 0.0, -2.5));
    }

    #[test]
    fn test_anchor_default_is_identity() {
        let a = Anchor::default();
        let local = Vec3::new(0.5, 0.0, 0.5);
        assert_eq!(a.world_point(local), local);
    }

    #[test]
    fn test_anchor_offsets_local_point() {
        let a = Anchor::new(Vec3::new(10.0, 1.0, -3.0));
        let w = a.world_point(Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(w, Vec3::new(10.5, 1.0, -2.5));
    }
}
