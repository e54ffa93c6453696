//! Animation playback state and a flag-driven animation controller.
//!
//! [`Animation`] tracks which clip an entity plays and how far along it is.
//! [`AnimationController`] picks the clip from rules evaluated against the
//! entity's [`Signals`](crate::components::signals::Signals) flags, which is
//! how animation triggers (e.g. `"die"`) are raised.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Elapsed fraction of the current clip. Reaches 1.0 when a one-shot clip
    /// has played through and keeps counting loops for looped clips.
    pub normalized_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            normalized_time: 0.0,
        }
    }

    /// Switch to another clip, restarting playback.
    pub fn play(&mut self, animation_key: impl Into<String>) {
        self.animation_key = animation_key.into();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.normalized_time = 0.0;
    }

    pub fn is_playing(&self, animation_key: &str) -> bool {
        self.animation_key == animation_key
    }

    /// True once `animation_key` is the current clip and it played to the end.
    pub fn has_completed(&self, animation_key: &str) -> bool {
        self.is_playing(animation_key) && self.normalized_time >= 1.0
    }
}

// Conditions over per-entity flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Condition {
    HasFlag { key: String },
    LacksFlag { key: String },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn has_flag(key: impl Into<String>) -> Self {
        Condition::HasFlag { key: key.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimRule {
    pub when: Condition,
    pub set_key: String,
}

/// Animation state machine: the first rule that holds selects the clip,
/// otherwise `fallback_key` plays.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct AnimationController {
    pub current_key: String,
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        let fallback_key = fallback_key.into();
        Self {
            current_key: fallback_key.clone(),
            rules: Vec::new(),
            fallback_key,
        }
    }

    pub fn with_rule(mut self, when: Condition, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            when,
            set_key: set_key.into(),
        });
        self
    }

    /// Shorthand for a rule that switches to `set_key` while `trigger` is raised.
    pub fn with_trigger(self, trigger: impl Into<String>, set_key: impl Into<String>) -> Self {
        self.with_rule(Condition::has_flag(trigger), set_key)
    }
}
