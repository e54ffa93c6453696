//! Event types exchanged across systems.
//!
//! Submodules:
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`enemy`] – enemy death sequence milestones
pub mod collision;
pub mod enemy;
