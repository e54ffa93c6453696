//! Scene setup and main loop for the headless demo.
//!
//! A player glides along a line of enemies. Every enemy it touches dies,
//! counts toward the kill total, plays its death clip when it has an animator
//! and dissolves before being despawned.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::animation::{Animation, AnimationController};
use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::{Enemy, EnemyBundle};
use crate::components::entityshader::EntityShader;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::killtracker::KillTracker;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_controller};
use crate::systems::collision::collision_detector;
use crate::systems::enemy::{
    enemy_collision_observer, enemy_death_animation, enemy_dissolve, enemy_setup,
};
use crate::systems::movement::movement;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

pub const DISSOLVE_SHADER: &str = "dissolve";
pub const IDLE_ANIMATION: &str = "idle";

const PLAYER_SPEED: f32 = 120.0;
const PLAYER_SIZE: f32 = 16.0;
const ENEMY_SIZE: f32 = 24.0;
const ENEMY_SPACING: f32 = 60.0;
const FIRST_ENEMY_X: f32 = 80.0;

/// Built-in clips: a looping idle and a one-shot death clip under `die_state`.
pub fn default_animations(die_state: &str) -> AnimationStore {
    let mut store = AnimationStore::default();
    store.insert(IDLE_ANIMATION, AnimationResource::new(4, 8.0, true));
    store.insert(die_state, AnimationResource::new(6, 12.0, false));
    store
}

/// Create a world holding every resource and observer the systems expect.
pub fn init_world(config: &GameConfig, animations: AnimationStore) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(KillTracker::default());
    world.insert_resource(animations);
    world.insert_resource(config.clone());
    register_observers(&mut world);
    world
}

pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(enemy_collision_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();
}

/// Per-frame schedule in execution order.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(enemy_setup);
    update.add_systems(movement);
    // A TTL inserted by enemy_dissolve starts counting on the next frame
    update.add_systems(ttl_system.after(movement));
    // Collision observers kill enemies and raise their death triggers
    update.add_systems(collision_detector.after(movement).after(enemy_setup));
    update.add_systems(animation_controller.after(collision_detector));
    update.add_systems(animation.after(animation_controller));
    update.add_systems(enemy_death_animation.after(animation));
    update.add_systems(
        enemy_dissolve
            .after(enemy_death_animation)
            .after(collision_detector)
            .after(ttl_system),
    );
    update
}

pub fn spawn_player(world: &mut World, pos: Vec2, speed: f32) -> Entity {
    let half = PLAYER_SIZE * 0.5;
    world
        .spawn((
            Group::new("player"),
            MapPosition { pos },
            BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE).with_offset(Vec2::splat(-half)),
            RigidBody::with_velocity(speed, 0.0),
        ))
        .id()
}

/// Spawn an enemy with its own dissolve material.
///
/// With `with_animator`, the enemy idles and switches to `enemy.die_state`
/// when `enemy.die_trigger` is raised; otherwise it dissolves as soon as it
/// dies.
pub fn spawn_enemy(world: &mut World, enemy: Enemy, pos: Vec2, with_animator: bool) -> Entity {
    let controller =
        AnimationController::new(IDLE_ANIMATION).with_trigger(&enemy.die_trigger, &enemy.die_state);
    let mut entity = world.spawn((
        EnemyBundle::new(enemy, pos, Vec2::splat(ENEMY_SIZE)),
        EntityShader::new(DISSOLVE_SHADER),
    ));
    if with_animator {
        entity.insert((
            Animation::new(IDLE_ANIMATION),
            controller,
            Signals::default(),
        ));
    }
    entity.id()
}

/// Populate the demo scene: one player and `config.enemies` enemies in a row.
///
/// Enemies alternate between animated and animation-less, and are jittered
/// with an RNG seeded from the config so runs are reproducible.
pub fn setup_scene(world: &mut World, config: &GameConfig) -> Vec<Entity> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    spawn_player(world, Vec2::ZERO, PLAYER_SPEED);

    let enemies: Vec<Entity> = (0..config.enemies)
        .map(|i| {
            let jitter = Vec2::new(rng.f32() * 20.0 - 10.0, rng.f32() * 8.0 - 4.0);
            let pos = Vec2::new(FIRST_ENEMY_X + i as f32 * ENEMY_SPACING, 0.0) + jitter;
            spawn_enemy(world, config.enemy.clone(), pos, i % 2 == 0)
        })
        .collect();

    info!("Scene ready: 1 player, {} enemies", enemies.len());
    enemies
}

pub fn count_enemies(world: &mut World) -> usize {
    let mut query = world.query::<&Enemy>();
    query.iter(world).count()
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationReport {
    pub frames: u32,
    pub elapsed: f32,
    pub kills: u32,
    pub enemies_left: usize,
}

/// Step the world at the configured fixed rate until every enemy is gone or
/// `config.max_frames` frames have run.
pub fn run_simulation(
    world: &mut World,
    schedule: &mut Schedule,
    config: &GameConfig,
) -> SimulationReport {
    let dt = config.frame_delta();
    let mut frames = 0;

    while frames < config.max_frames {
        update_world_time(world, dt);
        schedule.run(world);
        world.clear_trackers(); // Clear changed components for next frame
        frames += 1;

        if count_enemies(world) == 0 {
            info!("All enemies gone after {} frames", frames);
            break;
        }
    }

    SimulationReport {
        frames,
        elapsed: world.resource::<WorldTime>().elapsed,
        kills: world
            .get_resource::<KillTracker>()
            .map(|t| t.kills)
            .unwrap_or(0),
        enemies_left: count_enemies(world),
    }
}
