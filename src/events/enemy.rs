//! Enemy lifecycle events.
//!
//! Triggered by the enemy systems as an enemy moves through its death
//! sequence. Nothing in the engine depends on them; they exist for game code
//! (score popups, sounds, spawners) to observe.

use bevy_ecs::prelude::*;

/// An enemy was touched by the player and is now dead.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyKilledEvent {
    pub entity: Entity,
    /// Kill total after this kill, if a kill tracker was present.
    pub kills: Option<u32>,
}

/// The enemy's dissolve effect started.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DissolveStartedEvent {
    pub entity: Entity,
}

/// The dissolve reached 1 and the despawn was scheduled.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EnemyDissolvedEvent {
    pub entity: Entity,
    /// Seconds until the entity is despawned.
    pub destroy_in: f32,
}
