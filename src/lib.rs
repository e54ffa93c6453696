//! enemyfade library.
//!
//! Enemy death sequence on top of `bevy_ecs`: trigger overlap with the player,
//! kill tracking, death animation, shader dissolve and delayed despawn. The
//! module layout follows a small engine: components, resources, events and
//! systems, plus [`game`] to assemble a runnable scene.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
