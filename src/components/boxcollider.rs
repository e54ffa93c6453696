use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box collider anchored at the entity's [`MapPosition`].
///
/// Trigger colliders are non-physical volumes: they only report overlaps.
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub is_trigger: bool,
}

impl BoxCollider {
    /// Create a solid BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            is_trigger: false,
        }
    }

    /// Create a trigger BoxCollider with given size
    pub fn trigger(width: f32, height: f32) -> Self {
        Self {
            is_trigger: true,
            ..Self::new(width, height)
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_normalized() {
        let collider = BoxCollider::new(-10.0, -4.0);
        let (min, max) = collider.aabb(Vec2::new(10.0, 10.0));
        assert_eq!(min, Vec2::new(0.0, 6.0));
        assert_eq!(max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.5, 0.0)));
    }

    #[test]
    fn offset_moves_the_box() {
        let a = BoxCollider::trigger(4.0, 4.0).with_offset(Vec2::new(-2.0, -2.0));
        assert!(a.is_trigger);
        assert_eq!(a.aabb(Vec2::ZERO), (Vec2::splat(-2.0), Vec2::splat(2.0)));
        let unit = BoxCollider::new(1.0, 1.0);
        assert!(a.overlaps(Vec2::ZERO, &unit, Vec2::new(-2.5, 1.5)));
        assert!(!a.overlaps(Vec2::ZERO, &unit, Vec2::new(2.5, 0.0)));
    }
}
