//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world coordinates. Colliders
//! are offset from it and the movement system integrates velocity into it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { pos: Vec2::ZERO }
    }
}
