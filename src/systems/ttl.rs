//! TTL (time-to-live) system.
//!
//! Counts [`Ttl`](crate::components::ttl::Ttl) down by the scaled frame delta
//! and despawns the entity once nothing is left. This is the delayed-destroy
//! primitive used after an enemy finishes dissolving.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            debug!("TTL expired, despawning {:?}", entity);
            commands.entity(entity).try_despawn();
        }
    }
}
