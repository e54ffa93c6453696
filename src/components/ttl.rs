//! Time-to-live component for delayed entity destruction.
//!
//! The [`Ttl`] component counts down scaled world time each frame. When the
//! remaining time reaches zero, the entity is despawned by
//! [`crate::systems::ttl::ttl_system`]. Dissolved enemies get one when their
//! dissolve completes.

use bevy_ecs::prelude::Component;

/// Time-to-live component that despawns the entity after a duration.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
