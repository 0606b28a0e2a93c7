//! Per-frame fighter state synchronization from the physics world.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use super::ground;
use crate::components::{Fighter, FighterConfig, FighterState};

/// Round to 3 decimal places, matching the precision the state exposes.
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Falling-state transition.
///
/// Returns the new (fall start stamp, falling flag). The flag flips on only
/// after the body has been continuously airborne for `threshold`, and both
/// reset the instant ground contact returns.
pub fn falling_transition(
    grounded: bool,
    fall_started_at: Option<Duration>,
    was_falling: bool,
    threshold: Duration,
    now: Duration,
) -> (Option<Duration>, bool) {
    if grounded {
        return (None, false);
    }
    match fall_started_at {
        None => (Some(now), was_falling),
        Some(start) => {
            let falling = if now >= start + threshold { true } else { was_falling };
            (Some(start), falling)
        }
    }
}

/// Refreshes `FighterState` from the rigid body once per frame.
///
/// A sleeping body is skipped entirely: its derived state cannot have
/// changed since the last frame, so `is_moving` goes false and everything
/// else is left untouched.
pub fn sync_fighter_state(
    time: Res<Time>,
    rapier: ReadRapierContext,
    mut fighters: Query<
        (
            Entity,
            &FighterConfig,
            &mut FighterState,
            &Transform,
            &Velocity,
            &Sleeping,
        ),
        With<Fighter>,
    >,
) {
    let Ok(context) = rapier.single() else {
        return;
    };
    let now = time.elapsed();

    for (entity, config, mut state, transform, velocity, sleeping) in fighters.iter_mut() {
        state.is_moving = !sleeping.sleeping;
        if !state.is_moving {
            continue;
        }

        let grounded = ground::is_grounded(&context, entity, transform.translation, config);
        state.is_grounded = grounded;

        let (fall_started_at, falling) = falling_transition(
            grounded,
            state.fall_started_at,
            state.is_falling,
            config.falling_threshold(),
            now,
        );
        state.fall_started_at = fall_started_at;
        state.is_falling = falling;

        let abs = velocity.linvel.abs();
        state.velocity = Vec3::new(round3(abs.x), round3(abs.y), round3(abs.z));
        state.speed = round3(state.velocity.length());
        state.position = transform.translation;
    }
}
