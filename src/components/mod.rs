//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state and a flag-driven animation controller
//! - [`boxcollider`] – axis-aligned rectangular collider, optionally a trigger
//! - [`enemy`] – enemy settings and the death-sequence state machine
//! - [`entityshader`] – per-entity shader uniforms (material instance)
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`signals`] – per-entity flags such as animation triggers
//! - [`ttl`] – countdown that despawns the entity

pub mod animation;
pub mod boxcollider;
pub mod enemy;
pub mod entityshader;
pub mod group;
pub mod mapposition;
pub mod rigidbody;
pub mod signals;
pub mod ttl;
