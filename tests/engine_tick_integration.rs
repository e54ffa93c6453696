//! Engine tick integration tests for time, movement, TTL, collision and animation.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use enemyfade::components::animation::{Animation, AnimationController};
use enemyfade::components::boxcollider::BoxCollider;
use enemyfade::components::mapposition::MapPosition;
use enemyfade::components::rigidbody::RigidBody;
use enemyfade::components::signals::Signals;
use enemyfade::components::ttl::Ttl;
use enemyfade::events::collision::CollisionEvent;
use enemyfade::resources::animationstore::{AnimationResource, AnimationStore};
use enemyfade::resources::worldtime::WorldTime;
use enemyfade::systems::animation::{animation, animation_controller};
use enemyfade::systems::collision::collision_detector;
use enemyfade::systems::movement::movement;
use enemyfade::systems::time::update_world_time;
use enemyfade::systems::ttl::ttl_system;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world
}

#[derive(Resource, Default)]
struct SeenCollisions(Vec<(Entity, Entity)>);

fn record_collision(trigger: On<CollisionEvent>, mut seen: ResMut<SeenCollisions>) {
    let event = trigger.event();
    seen.0.push((event.a, event.b));
}

fn collision_world() -> World {
    let mut world = make_world(0.0);
    world.init_resource::<SeenCollisions>();
    world.add_observer(record_collision);
    world.flush();
    world
}

#[test]
fn world_time_applies_time_scale() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));

    update_world_time(&mut world, 0.2);
    update_world_time(&mut world, 0.2);

    let time = world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.1));
    assert!(approx_eq(time.elapsed, 0.2));
    assert_eq!(time.frame_count, 2);
}

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.5);
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::with_velocity(10.0, -4.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, -2.0));
}

#[test]
fn ttl_decrements_and_despawns() {
    let mut world = make_world(0.5);
    let entity = world.spawn((Ttl::new(1.0),)).id();

    let mut schedule = Schedule::default();
    schedule.add_systems(ttl_system);

    schedule.run(&mut world);
    assert!(world.get_entity(entity).is_ok());
    assert!(approx_eq(world.get::<Ttl>(entity).unwrap().remaining, 0.5));

    schedule.run(&mut world);
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn trigger_overlap_is_reported_once_while_touching() {
    let mut world = collision_world();
    let trigger = world
        .spawn((MapPosition::new(0.0, 0.0), BoxCollider::trigger(10.0, 10.0)))
        .id();
    let body = world
        .spawn((MapPosition::new(5.0, 5.0), BoxCollider::new(10.0, 10.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);

    schedule.run(&mut world);
    schedule.run(&mut world);
    assert_eq!(world.resource::<SeenCollisions>().0.len(), 1);
    let (a, b) = world.resource::<SeenCollisions>().0[0];
    assert!((a == trigger && b == body) || (a == body && b == trigger));

    // Separate, then touch again: a new enter is reported
    world.get_mut::<MapPosition>(body).unwrap().pos = Vec2::new(50.0, 50.0);
    schedule.run(&mut world);
    world.get_mut::<MapPosition>(body).unwrap().pos = Vec2::new(5.0, 5.0);
    schedule.run(&mut world);
    assert_eq!(world.resource::<SeenCollisions>().0.len(), 2);
}

#[test]
fn solid_pairs_are_ignored() {
    let mut world = collision_world();
    world.spawn((MapPosition::new(0.0, 0.0), BoxCollider::new(10.0, 10.0)));
    world.spawn((MapPosition::new(5.0, 5.0), BoxCollider::new(10.0, 10.0)));

    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(&mut world);

    assert!(world.resource::<SeenCollisions>().0.is_empty());
}

#[test]
fn trigger_flag_switches_clip_and_holds_its_end() {
    // 4 frames at 8 fps: the one-shot clip lasts 0.5s
    let mut world = make_world(0.25);
    let mut store = AnimationStore::default();
    store.insert("idle", AnimationResource::new(4, 8.0, true));
    store.insert("die", AnimationResource::new(4, 8.0, false));
    world.insert_resource(store);

    let entity = world
        .spawn((
            Animation::new("idle"),
            AnimationController::new("idle").with_trigger("die", "die"),
            Signals::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((animation_controller, animation).chain());

    schedule.run(&mut world);
    assert!(world.get::<Animation>(entity).unwrap().is_playing("idle"));

    world.get_mut::<Signals>(entity).unwrap().set_flag("die");
    schedule.run(&mut world);
    let anim = world.get::<Animation>(entity).unwrap();
    assert!(anim.is_playing("die"));
    assert!(approx_eq(anim.normalized_time, 0.5));
    assert!(!anim.has_completed("die"));

    schedule.run(&mut world);
    let anim = world.get::<Animation>(entity).unwrap();
    assert!(anim.has_completed("die"));
    assert_eq!(anim.frame_index, 3);

    schedule.run(&mut world);
    let anim = world.get::<Animation>(entity).unwrap();
    assert_eq!(anim.frame_index, 3);
    assert_eq!(anim.normalized_time, 1.0);
    assert_eq!(
        world.get::<AnimationController>(entity).unwrap().current_key,
        "die"
    );
}
