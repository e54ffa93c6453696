// Per-entity flags used as animation triggers

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default, Component)]
pub struct Signals {
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
