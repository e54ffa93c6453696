//! Collision event type.
//!
//! The collision detector triggers [`CollisionEvent`] when two entities start
//! overlapping and at least one of them is a trigger collider. Observers
//! subscribe to it to react in a decoupled manner.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider begin to overlap.
///
/// No ordering guarantees are provided between [`CollisionEvent::a`] and
/// [`CollisionEvent::b`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
