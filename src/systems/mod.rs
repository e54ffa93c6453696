//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance clip playback and select clips via flag rules
//! - [`collision`] – trigger overlap checks and event emission
//! - [`enemy`] – enemy death sequence: kill, death animation, dissolve
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose time-to-live ran out

pub mod animation;
pub mod collision;
pub mod enemy;
pub mod movement;
pub mod time;
pub mod ttl;
