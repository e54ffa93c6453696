//! Trigger overlap detection.
//!
//! [`collision_detector`] tests every pair of [`BoxCollider`]s and triggers a
//! [`CollisionEvent`] when a pair starts overlapping. Only pairs with at least
//! one trigger collider are considered. A pair that keeps overlapping is
//! reported once, on the frame it begins.

use bevy_ecs::prelude::*;
use log::trace;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

fn ordered(a: Entity, b: Entity) -> (Entity, Entity) {
    if a < b { (a, b) } else { (b, a) }
}

/// Emit [`CollisionEvent`] for trigger pairs entering overlap this frame.
///
/// `touching` remembers the pairs overlapping on the previous run so that
/// only the enter transition is reported.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider)>,
    mut touching: Local<FxHashSet<(Entity, Entity)>>,
    mut commands: Commands,
) {
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if !collider_a.is_trigger && !collider_b.is_trigger {
            continue;
        }
        if !collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            continue;
        }
        let pair = ordered(entity_a, entity_b);
        if !touching.contains(&pair) {
            trace!("Trigger enter between {:?} and {:?}", pair.0, pair.1);
            commands.trigger(CollisionEvent {
                a: pair.0,
                b: pair.1,
            });
        }
        current.insert(pair);
    }

    *touching = current;
}
