//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions reused across entities
//! - `gameconfig` – INI-backed simulation and enemy settings
//! - `killtracker` – session-wide kill counter
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod gameconfig;
pub mod killtracker;
pub mod worldtime;
