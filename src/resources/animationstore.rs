//! Animation resource registry.
//!
//! Clip definitions shared by every entity that plays them. Systems look a
//! clip up by key and advance playback from the immutable parameters here.
//!
//! # File Format
//!
//! ```json
//! {
//!   "idle": { "frame_count": 4, "fps": 8.0, "looped": true },
//!   "die":  { "frame_count": 6, "fps": 12.0, "looped": false }
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a frame-based clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationResource {
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    #[serde(default)]
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(frame_count: usize, fps: f32, looped: bool) -> Self {
        Self {
            frame_count,
            fps,
            looped,
        }
    }

    /// Clip length in seconds. Zero for degenerate clips.
    pub fn duration(&self) -> f32 {
        if self.fps > 0.0 {
            self.frame_count as f32 / self.fps
        } else {
            0.0
        }
    }
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// Parse clip definitions from a JSON object keyed by clip name.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let animations: FxHashMap<String, AnimationResource> =
            serde_json::from_str(json).map_err(|e| format!("Invalid animation JSON: {}", e))?;
        for (key, anim) in &animations {
            if anim.frame_count == 0 || anim.fps <= 0.0 {
                return Err(format!(
                    "Animation '{}' needs at least one frame and a positive fps",
                    key
                ));
            }
        }
        Ok(Self { animations })
    }

    /// Load clip definitions from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let store = Self::from_json_str(&json)?;
        info!(
            "Loaded {} animations from {}",
            store.animations.len(),
            path.display()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clip_map() {
        let store = AnimationStore::from_json_str(
            r#"{
                "idle": { "frame_count": 4, "fps": 8.0, "looped": true },
                "die": { "frame_count": 6, "fps": 12.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(store.animations.len(), 2);
        let die = store.get("die").unwrap();
        assert!(!die.looped);
        assert!((die.duration() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_empty_clip() {
        let err = AnimationStore::from_json_str(r#"{ "die": { "frame_count": 0, "fps": 12.0 } }"#)
            .unwrap_err();
        assert!(err.contains("die"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AnimationStore::from_json_str("[1, 2").is_err());
    }
}
