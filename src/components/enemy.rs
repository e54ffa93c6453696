//! Enemy configuration and death-sequence state.
//!
//! An enemy is alive until a player touches its trigger collider. From then on
//! it walks a one-way state machine:
//!
//! ```text
//! Alive -> Dying -> Dissolving -> Destroyed
//! ```
//!
//! - `Alive -> Dying` on the first collision with the player group.
//! - `Dying -> Dissolving` when the death animation completes, or right away
//!   when the enemy has no death animation.
//! - `Dissolving -> Destroyed` when the dissolve reaches 1. The entity then
//!   carries a [`Ttl`](crate::components::ttl::Ttl) and is despawned after
//!   [`Enemy::destroy_delay_after_dissolve`].
//!
//! # Related
//!
//! - [`crate::systems::enemy`] – systems and observers driving the transitions
//! - [`crate::events::enemy`] – lifecycle events emitted along the way

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;

pub const DEFAULT_PLAYER_GROUP: &str = "player";
pub const DEFAULT_DESTROY_DELAY: f32 = 0.2;
pub const DEFAULT_DIE_TRIGGER: &str = "die";
pub const DEFAULT_DIE_STATE: &str = "die";
pub const DEFAULT_DISSOLVE_DURATION: f32 = 1.5;
pub const DEFAULT_DISSOLVE_PROPERTY: &str = "_DissolveAmount";

/// Per-enemy death sequence settings.
///
/// `die_state` is checked against the entity's single [`Animation`] track;
/// there are no animator layers to pick from.
///
/// [`Animation`]: crate::components::animation::Animation
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Group name of the entities that kill this enemy on contact.
    pub player_group: String,
    /// Seconds between the end of the dissolve and the despawn.
    pub destroy_delay_after_dissolve: f32,
    /// Animation trigger flag raised on death. Empty means no death animation.
    pub die_trigger: String,
    /// Animation key that has to play to completion before dissolving.
    pub die_state: String,
    /// Seconds the dissolve takes to go from 0 to 1.
    pub dissolve_duration: f32,
    /// Shader uniform receiving the dissolve amount.
    pub dissolve_property: String,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            player_group: DEFAULT_PLAYER_GROUP.to_string(),
            destroy_delay_after_dissolve: DEFAULT_DESTROY_DELAY,
            die_trigger: DEFAULT_DIE_TRIGGER.to_string(),
            die_state: DEFAULT_DIE_STATE.to_string(),
            dissolve_duration: DEFAULT_DISSOLVE_DURATION,
            dissolve_property: DEFAULT_DISSOLVE_PROPERTY.to_string(),
        }
    }
}

impl Enemy {
    pub fn with_player_group(mut self, group: impl Into<String>) -> Self {
        self.player_group = group.into();
        self
    }

    pub fn with_destroy_delay(mut self, seconds: f32) -> Self {
        self.destroy_delay_after_dissolve = seconds;
        self
    }

    pub fn with_die_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.die_trigger = trigger.into();
        self
    }

    pub fn with_die_state(mut self, state: impl Into<String>) -> Self {
        self.die_state = state.into();
        self
    }

    pub fn with_dissolve_duration(mut self, seconds: f32) -> Self {
        self.dissolve_duration = seconds;
        self
    }

    pub fn with_dissolve_property(mut self, property: impl Into<String>) -> Self {
        self.dissolve_property = property.into();
        self
    }

    /// Dissolve progress gained over `delta` seconds.
    ///
    /// A non-positive duration finishes the dissolve in a single step.
    pub fn dissolve_step(&self, delta: f32) -> f32 {
        if self.dissolve_duration > 0.0 {
            delta / self.dissolve_duration
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Alive,
    Dying,
    Dissolving,
    /// Despawn scheduled; the entity goes away once its TTL runs out.
    Destroyed,
}

/// Runtime state of an enemy's death sequence.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyState {
    pub phase: EnemyPhase,
    /// Normalized dissolve accumulator. May overshoot 1.0.
    pub dissolve_t: f32,
    pub destroy_scheduled: bool,
}

impl EnemyState {
    pub fn is_dead(&self) -> bool {
        self.phase != EnemyPhase::Alive
    }

    pub fn is_dissolving(&self) -> bool {
        matches!(self.phase, EnemyPhase::Dissolving | EnemyPhase::Destroyed)
    }

    /// Dissolve progress clamped to `[0, 1]`.
    pub fn dissolve_progress(&self) -> f32 {
        self.dissolve_t.clamp(0.0, 1.0)
    }

    /// Mark the enemy as dead. Returns false if it already was.
    pub fn kill(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        self.phase = EnemyPhase::Dying;
        true
    }

    /// Enter the dissolve. Returns false if the dissolve already started.
    pub fn start_dissolve(&mut self) -> bool {
        if self.is_dissolving() {
            return false;
        }
        self.phase = EnemyPhase::Dissolving;
        self.dissolve_t = 0.0;
        true
    }

    /// Advance the dissolve by `step` and return the clamped progress.
    pub fn advance_dissolve(&mut self, step: f32) -> f32 {
        self.dissolve_t += step;
        self.dissolve_progress()
    }

    /// Flag the despawn as scheduled. Returns false if it already was.
    pub fn schedule_destroy(&mut self) -> bool {
        if self.destroy_scheduled {
            return false;
        }
        self.destroy_scheduled = true;
        self.phase = EnemyPhase::Destroyed;
        true
    }
}

/// Components every enemy needs: position, trigger volume, tag, and state.
///
/// Animation and shader components are optional and added by the caller.
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub state: EnemyState,
    pub group: Group,
    pub position: MapPosition,
    pub collider: BoxCollider,
}

impl EnemyBundle {
    /// Enemy at `pos` with a `size` trigger collider centered on it.
    pub fn new(enemy: Enemy, pos: Vec2, size: Vec2) -> Self {
        Self {
            enemy,
            state: EnemyState::default(),
            group: Group::new("enemy"),
            position: MapPosition { pos },
            collider: BoxCollider::trigger(size.x, size.y).with_offset(-size * 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_only_move_forward() {
        let mut state = EnemyState::default();
        assert!(!state.is_dead());
        assert!(state.kill());
        assert!(!state.kill());
        assert_eq!(state.phase, EnemyPhase::Dying);

        assert!(state.start_dissolve());
        assert!(!state.start_dissolve());
        assert!(state.schedule_destroy());
        assert!(!state.schedule_destroy());
        assert_eq!(state.phase, EnemyPhase::Destroyed);
        assert!(state.is_dissolving());
    }

    #[test]
    fn restarting_dissolve_keeps_progress() {
        let mut state = EnemyState::default();
        state.kill();
        state.start_dissolve();
        state.advance_dissolve(0.4);
        state.start_dissolve();
        assert!((state.dissolve_t - 0.4).abs() < 1e-6);
    }

    #[test]
    fn progress_is_clamped() {
        let mut state = EnemyState::default();
        assert_eq!(state.advance_dissolve(1.7), 1.0);
        assert!(state.dissolve_t > 1.0);
        state.dissolve_t = -0.2;
        assert_eq!(state.dissolve_progress(), 0.0);
    }

    #[test]
    fn zero_duration_dissolves_in_one_step() {
        let enemy = Enemy::default().with_dissolve_duration(0.0);
        assert_eq!(enemy.dissolve_step(0.016), 1.0);
        let enemy = Enemy::default().with_dissolve_duration(2.0);
        assert!((enemy.dissolve_step(0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn bundle_centers_trigger_collider() {
        let bundle = EnemyBundle::new(
            Enemy::default(),
            Vec2::new(100.0, 50.0),
            Vec2::new(20.0, 10.0),
        );
        assert!(bundle.collider.is_trigger);
        let (min, max) = bundle.collider.aabb(bundle.position.pos);
        assert_eq!(min, Vec2::new(90.0, 45.0));
        assert_eq!(max, Vec2::new(110.0, 55.0));
        assert_eq!(bundle.group.name(), "enemy");
    }
}
