//! Session-wide kill counter.
//!
//! Enemies report their death here exactly once. The resource is optional:
//! when it is missing, enemies still die and dissolve, and a warning is
//! logged instead of counting the kill.

use bevy_ecs::prelude::Resource;
use log::info;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KillTracker {
    pub kills: u32,
}

impl KillTracker {
    /// Count one kill and return the new total.
    pub fn register_kill(&mut self) -> u32 {
        self.kills += 1;
        info!("Kill registered, total kills: {}", self.kills);
        self.kills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_kill_returns_running_total() {
        let mut tracker = KillTracker::default();
        assert_eq!(tracker.register_kill(), 1);
        assert_eq!(tracker.register_kill(), 2);
        assert_eq!(tracker.kills, 2);
    }
}
