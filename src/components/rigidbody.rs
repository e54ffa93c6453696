//! Kinematic body component.
//!
//! The demo player glides through the enemy line with a constant velocity;
//! there are no forces or friction.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing a velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn with_velocity(x: f32, y: f32) -> Self {
        Self {
            velocity: Vec2::new(x, y),
        }
    }
}
