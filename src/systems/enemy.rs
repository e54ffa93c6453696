//! Enemy death sequence systems.
//!
//! # System Flow
//!
//! 1. [`enemy_setup`] prepares newly added enemies: fully visible dissolve
//!    uniform, runtime state.
//! 2. [`enemy_collision_observer`] reacts to [`CollisionEvent`]: the first
//!    contact with the player kills the enemy, counts the kill and raises the
//!    death animation trigger (or starts the dissolve right away).
//! 3. [`enemy_death_animation`] hands over to the dissolve once the death
//!    clip has played to the end.
//! 4. [`enemy_dissolve`] drives the shader uniform from `0` to `-1` and
//!    schedules the despawn when it gets there.
//!
//! A missing kill tracker or animator is reported and skipped. An enemy
//! without an [`EntityShader`] dies but never dissolves, so it stays in the
//! world.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animation::{Animation, AnimationController};
use crate::components::enemy::{Enemy, EnemyPhase, EnemyState};
use crate::components::entityshader::EntityShader;
use crate::components::group::Group;
use crate::components::signals::Signals;
use crate::components::ttl::Ttl;
use crate::events::collision::CollisionEvent;
use crate::events::enemy::{DissolveStartedEvent, EnemyDissolvedEvent, EnemyKilledEvent};
use crate::resources::killtracker::KillTracker;
use crate::resources::worldtime::WorldTime;

/// Enter the dissolve phase and announce it. Does nothing if already dissolving.
fn start_dissolve(entity: Entity, state: &mut EnemyState, commands: &mut Commands) {
    if !state.start_dissolve() {
        return;
    }
    debug!("Enemy {:?} starts dissolving", entity);
    commands.trigger(DissolveStartedEvent { entity });
}

/// Prepare enemies the frame they are added.
///
/// - Inserts a default [`EnemyState`] when the entity was spawned without one.
/// - Sets the dissolve uniform to `0.0` (fully visible) on the entity's own
///   [`EntityShader`], or warns that the enemy won't dissolve.
pub fn enemy_setup(
    mut query: Query<(Entity, &Enemy, Option<&mut EntityShader>, Has<EnemyState>), Added<Enemy>>,
    mut commands: Commands,
) {
    for (entity, enemy, maybe_shader, has_state) in query.iter_mut() {
        if !has_state {
            commands.entity(entity).insert(EnemyState::default());
        }
        match maybe_shader {
            Some(mut shader) => shader.set_float(&enemy.dissolve_property, 0.0),
            None => warn!(
                "Enemy {:?} has no EntityShader. Dissolve won't work.",
                entity
            ),
        }
    }
}

/// Kill enemies touched by their player group.
///
/// Only the first qualifying collision counts: an enemy that is already dead
/// ignores every later contact, so the kill is registered exactly once.
pub fn enemy_collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    groups: Query<&Group>,
    mut enemies: Query<(
        &Enemy,
        &mut EnemyState,
        Option<&mut Signals>,
        Has<Animation>,
        Has<AnimationController>,
    )>,
    mut kill_tracker: Option<ResMut<KillTracker>>,
) {
    let event = *trigger.event();

    for (enemy_entity, other) in [(event.a, event.b), (event.b, event.a)] {
        let Ok((enemy, mut state, maybe_signals, has_animation, has_controller)) =
            enemies.get_mut(enemy_entity)
        else {
            continue;
        };
        if state.is_dead() {
            continue;
        }
        let touched_by_player = groups
            .get(other)
            .map(|g| g.name() == enemy.player_group)
            .unwrap_or(false);
        if !touched_by_player {
            continue;
        }

        state.kill();
        info!("Enemy {:?} killed by {:?}", enemy_entity, other);

        let kills = match kill_tracker.as_mut() {
            Some(tracker) => Some(tracker.register_kill()),
            None => {
                warn!("No KillTracker resource in the world. Kill of {:?} not counted.", enemy_entity);
                None
            }
        };
        commands.trigger(EnemyKilledEvent {
            entity: enemy_entity,
            kills,
        });

        let has_animator = has_animation && has_controller;
        match maybe_signals {
            Some(mut signals) if has_animator && !enemy.die_trigger.is_empty() => {
                signals.set_flag(enemy.die_trigger.clone());
            }
            _ => {
                if !enemy.die_trigger.is_empty() && !has_animator {
                    debug!(
                        "Enemy {:?} has no animator, dissolving without death animation",
                        enemy_entity
                    );
                }
                start_dissolve(enemy_entity, &mut state, &mut commands);
            }
        }
    }
}

/// Start the dissolve once the death clip has completed.
pub fn enemy_death_animation(
    mut query: Query<(Entity, &Enemy, &mut EnemyState, &Animation)>,
    mut commands: Commands,
) {
    for (entity, enemy, mut state, animation) in query.iter_mut() {
        if state.phase != EnemyPhase::Dying {
            continue;
        }
        if animation.has_completed(&enemy.die_state) {
            start_dissolve(entity, &mut state, &mut commands);
        }
    }
}

/// Advance dissolving enemies and schedule their despawn.
///
/// The uniform receives the negated progress, so it runs from `0.0` down to
/// `-1.0`. When progress reaches 1 the entity gets a [`Ttl`] of
/// [`Enemy::destroy_delay_after_dissolve`] seconds, once. Enemies without an
/// [`EntityShader`] are left untouched.
pub fn enemy_dissolve(
    mut query: Query<(Entity, &Enemy, &mut EnemyState, Option<&mut EntityShader>)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, enemy, mut state, maybe_shader) in query.iter_mut() {
        if state.phase != EnemyPhase::Dissolving {
            continue;
        }
        let Some(mut shader) = maybe_shader else {
            continue;
        };

        let value = state.advance_dissolve(enemy.dissolve_step(time.delta));
        shader.set_float(&enemy.dissolve_property, -value);

        if value >= 1.0 && state.schedule_destroy() {
            let destroy_in = enemy.destroy_delay_after_dissolve.max(0.0);
            debug!(
                "Enemy {:?} dissolved, despawning in {}s",
                entity, destroy_in
            );
            commands.entity(entity).insert(Ttl::new(destroy_in));
            commands.trigger(EnemyDissolvedEvent { entity, destroy_in });
        }
    }
}
