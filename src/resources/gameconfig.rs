//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Defaults are safe to run
//! with; missing keys keep their current value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fps = 60
//! max_frames = 1200
//! enemies = 5
//! seed = 7
//!
//! [enemy]
//! player_group = player
//! destroy_delay = 0.2
//! dissolve_duration = 1.5
//! dissolve_property = _DissolveAmount
//! die_trigger = die
//! die_state = die
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::enemy::Enemy;

/// Default safe values for startup
const DEFAULT_FPS: u32 = 60;
const DEFAULT_MAX_FRAMES: u32 = 1200;
const DEFAULT_ENEMIES: u32 = 5;
const DEFAULT_SEED: u64 = 7;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Fixed simulation rate in frames per second.
    pub fps: u32,
    /// Frames simulated before the demo gives up.
    pub max_frames: u32,
    /// Number of enemies placed in the demo scene.
    pub enemies: u32,
    /// Seed for the demo's placement jitter.
    pub seed: u64,
    /// Template every spawned enemy starts from.
    pub enemy: Enemy,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

fn to_u32(key: &str, value: u64) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("Value for '{}' out of range: {}", key, value))
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            max_frames: DEFAULT_MAX_FRAMES,
            enemies: DEFAULT_ENEMIES,
            seed: DEFAULT_SEED,
            enemy: Enemy::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Frame delta in seconds for the fixed simulation rate.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;
        info!("Loaded config from {:?}", self.config_path);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [simulation] section
        if let Some(fps) = config.getuint("simulation", "fps")? {
            self.fps = to_u32("fps", fps)?;
        }
        if let Some(frames) = config.getuint("simulation", "max_frames")? {
            self.max_frames = to_u32("max_frames", frames)?;
        }
        if let Some(enemies) = config.getuint("simulation", "enemies")? {
            self.enemies = to_u32("enemies", enemies)?;
        }
        if let Some(seed) = config.getuint("simulation", "seed")? {
            self.seed = seed;
        }

        // [enemy] section
        if let Some(group) = config.get("enemy", "player_group") {
            self.enemy.player_group = group;
        }
        if let Some(delay) = config.getfloat("enemy", "destroy_delay")? {
            self.enemy.destroy_delay_after_dissolve = delay as f32;
        }
        if let Some(duration) = config.getfloat("enemy", "dissolve_duration")? {
            self.enemy.dissolve_duration = duration as f32;
        }
        if let Some(property) = config.get("enemy", "dissolve_property") {
            self.enemy.dissolve_property = property;
        }
        if let Some(trigger) = config.get("enemy", "die_trigger") {
            self.enemy.die_trigger = trigger;
        }
        if let Some(state) = config.get("enemy", "die_state") {
            self.enemy.die_state = state;
        }

        info!(
            "Config: fps={}, max_frames={}, enemies={}, seed={}, dissolve={}s, destroy_delay={}s",
            self.fps,
            self.max_frames,
            self.enemies,
            self.seed,
            self.enemy.dissolve_duration,
            self.enemy.destroy_delay_after_dissolve
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "fps", Some(self.fps.to_string()));
        config.set("simulation", "max_frames", Some(self.max_frames.to_string()));
        config.set("simulation", "enemies", Some(self.enemies.to_string()));
        config.set("simulation", "seed", Some(self.seed.to_string()));

        // [enemy] section
        let enemy = &self.enemy;
        config.set("enemy", "player_group", Some(enemy.player_group.clone()));
        config.set(
            "enemy",
            "destroy_delay",
            Some(enemy.destroy_delay_after_dissolve.to_string()),
        );
        config.set(
            "enemy",
            "dissolve_duration",
            Some(enemy.dissolve_duration.to_string()),
        );
        config.set(
            "enemy",
            "dissolve_property",
            Some(enemy.dissolve_property.clone()),
        );
        config.set("enemy", "die_trigger", Some(enemy.die_trigger.clone()));
        config.set("enemy", "die_state", Some(enemy.die_state.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
