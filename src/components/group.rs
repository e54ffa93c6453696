use bevy_ecs::prelude::Component;

/// Name tag used to tell entity kinds apart (e.g. `"player"`, `"enemy"`).
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
