//! Animation systems.
//!
//! - [`animation`] advances clip playback from elapsed time and keeps
//!   [`Animation::normalized_time`] current. One-shot clips hold their last
//!   frame once they complete.
//! - [`animation_controller`] selects which clip should play based on rule
//!   conditions evaluated against entity [`Signals`] flags.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback state
//! - [`crate::components::animation::AnimationController`] – rule-based clip selection
//! - [`crate::resources::animationstore::AnimationStore`] – clip definitions

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{Animation, AnimationController, Condition};
use crate::components::signals::Signals;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Move `anim` forward by `dt` seconds of `clip`.
///
/// Returns true on the step where a one-shot clip reaches its end.
fn advance(anim: &mut Animation, clip: &AnimationResource, dt: f32) -> bool {
    let duration = clip.duration();
    let frame_count = clip.frame_count.max(1);

    if !clip.looped && anim.normalized_time >= 1.0 {
        return false;
    }

    let before = anim.normalized_time;
    anim.normalized_time = if duration > 0.0 {
        before + dt / duration
    } else {
        before + 1.0
    };

    if !clip.looped && anim.normalized_time >= 1.0 {
        anim.normalized_time = 1.0;
        anim.frame_index = frame_count - 1;
        anim.elapsed_time = 0.0;
        return true;
    }

    let frames = anim.normalized_time * frame_count as f32;
    anim.frame_index = (frames.floor() as usize) % frame_count;
    anim.elapsed_time = frames.fract() / clip.fps.max(f32::EPSILON);
    false
}

/// Advance animation playback.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up clip data from [`AnimationStore`].
/// - Mutates [`Animation`] state.
pub fn animation(
    mut query: Query<(Entity, &mut Animation)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (entity, mut anim) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim.animation_key) else {
            debug!(
                "Animation '{}' not found for {:?}",
                anim.animation_key, entity
            );
            continue;
        };

        if advance(&mut anim, clip, time.delta) {
            debug!("Animation '{}' finished on {:?}", anim.animation_key, entity);
        }
    }
}

/// Evaluate a controller condition against an entity's current flags.
fn evaluate_condition(signals: &Signals, condition: &Condition) -> bool {
    match condition {
        Condition::HasFlag { key } => signals.has_flag(key),
        Condition::LacksFlag { key } => !signals.has_flag(key),
        Condition::All(conditions) => conditions
            .iter()
            .all(|cond| evaluate_condition(signals, cond)),
        Condition::Any(conditions) => conditions
            .iter()
            .any(|cond| evaluate_condition(signals, cond)),
        Condition::Not(cond) => !evaluate_condition(signals, cond),
    }
}

/// Select the active clip according to controller rules.
///
/// The first matching rule wins. If no rules match, the controller's fallback
/// clip is used. Switching clips restarts playback.
pub fn animation_controller(
    mut query: Query<(&mut AnimationController, &mut Animation, &Signals)>,
) {
    for (mut controller, mut animation, signals) in query.iter_mut() {
        let target_key = controller
            .rules
            .iter()
            .find(|rule| evaluate_condition(signals, &rule.when))
            .map(|rule| rule.set_key.clone())
            .unwrap_or_else(|| controller.fallback_key.clone());

        if animation.animation_key != target_key {
            animation.play(target_key.clone());
            controller.current_key = target_key;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_shot() -> AnimationResource {
        // 4 frames at 8 fps: half a second
        AnimationResource::new(4, 8.0, false)
    }

    #[test]
    fn one_shot_reaches_one_and_holds_last_frame() {
        let clip = one_shot();
        let mut anim = Animation::new("die");

        assert!(!advance(&mut anim, &clip, 0.25));
        assert!((anim.normalized_time - 0.5).abs() < 1e-6);
        assert_eq!(anim.frame_index, 2);

        assert!(advance(&mut anim, &clip, 0.3));
        assert_eq!(anim.normalized_time, 1.0);
        assert_eq!(anim.frame_index, 3);

        // Further time does not report the end again
        assert!(!advance(&mut anim, &clip, 1.0));
        assert_eq!(anim.normalized_time, 1.0);
    }

    #[test]
    fn looped_clip_counts_loops() {
        let clip = AnimationResource::new(4, 8.0, true);
        let mut anim = Animation::new("idle");
        assert!(!advance(&mut anim, &clip, 0.625));
        assert!((anim.normalized_time - 1.25).abs() < 1e-5);
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn zero_fps_clip_ends_immediately() {
        let clip = AnimationResource::new(3, 0.0, false);
        let mut anim = Animation::new("broken");
        assert!(advance(&mut anim, &clip, 0.0));
        assert_eq!(anim.frame_index, 2);
    }

    #[test]
    fn conditions_over_flags() {
        let signals = Signals::default().with_flag("die");
        assert!(evaluate_condition(&signals, &Condition::has_flag("die")));
        assert!(!evaluate_condition(
            &signals,
            &Condition::LacksFlag {
                key: "die".to_string()
            }
        ));
        let both = Condition::All(vec![
            Condition::has_flag("die"),
            Condition::has_flag("stunned"),
        ]);
        assert!(!evaluate_condition(&signals, &both));
        let either = Condition::Any(vec![
            Condition::has_flag("die"),
            Condition::has_flag("stunned"),
        ]);
        assert!(evaluate_condition(&signals, &either));
        assert!(evaluate_condition(
            &signals,
            &Condition::Not(Box::new(Condition::has_flag("stunned")))
        ));
    }

    #[test]
    fn empty_combinators() {
        let signals = Signals::default();
        assert!(evaluate_condition(&signals, &Condition::All(vec![])));
        assert!(!evaluate_condition(&signals, &Condition::Any(vec![])));
    }
}
