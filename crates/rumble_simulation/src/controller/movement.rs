//! Horizontal movement: rate-limited velocity pushes toward a speed cap.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use super::{CrouchToggle, MoveDirection, MoveIntent, RunToggle};
use crate::components::{Fighter, FighterConfig, FighterState};

/// Add a signed step to the current X velocity, clamped toward zero so the
/// result never exceeds `max` in the direction of travel. Velocity already
/// past the cap (knockback) is pulled back to it rather than kept.
pub fn push_velocity_x(current: f32, step: f32, max: f32) -> f32 {
    if step > 0.0 {
        (current + step).min(max)
    } else {
        (current + step).max(-max)
    }
}

/// Rate-limit check: a zero interval means unlimited.
pub fn interval_elapsed(last: Option<Duration>, interval: Duration, now: Duration) -> bool {
    if interval.is_zero() {
        return true;
    }
    match last {
        None => true,
        Some(stamp) => stamp + interval < now,
    }
}

/// Consumes `MoveIntent` events: sets facing, yaws the body mesh, and
/// applies a delta-scaled acceleration step to the rigid body X velocity.
///
/// The step is diminished in the air (and further scaled by the run/crouch
/// multipliers), and Z is forced back to the fight plane on every write.
pub fn apply_move_intents(
    mut intents: EventReader<MoveIntent>,
    time: Res<Time>,
    mut fighters: Query<
        (&FighterConfig, &mut FighterState, &mut Transform, &mut Velocity),
        With<Fighter>,
    >,
) {
    let now = time.elapsed();
    let delta = time.delta_secs();

    for intent in intents.read() {
        let Ok((config, mut state, mut transform, mut velocity)) =
            fighters.get_mut(intent.fighter)
        else {
            continue;
        };

        state.facing_left = intent.direction == MoveDirection::Left;
        transform.rotation = Quat::from_axis_angle(Vec3::Y, intent.direction.yaw());

        if !interval_elapsed(state.last_velocity_push, config.velocity_interval(), now) {
            continue;
        }

        let mut multiplier = if state.is_grounded && !state.is_falling {
            1.0
        } else {
            config.air_diminisher
        };
        if state.is_running {
            multiplier *= config.running_multiplier;
        }
        if state.is_crouching {
            multiplier *= config.crouching_multiplier;
        }

        let step = config.accel_per_second * multiplier * delta * intent.direction.sign();
        let new_x = push_velocity_x(velocity.linvel.x, step, config.max_velocity);
        velocity.linvel = Vec3::new(new_x, velocity.linvel.y, 0.0);
        state.last_velocity_push = Some(now);
    }
}

pub fn toggle_run(
    mut toggles: EventReader<RunToggle>,
    mut fighters: Query<&mut FighterState, With<Fighter>>,
) {
    for toggle in toggles.read() {
        if let Ok(mut state) = fighters.get_mut(toggle.fighter) {
            state.is_running = !state.is_running;
        }
    }
}

pub fn toggle_crouch(
    mut toggles: EventReader<CrouchToggle>,
    mut fighters: Query<&mut FighterState, With<Fighter>>,
) {
    for toggle in toggles.read() {
        if let Ok(mut state) = fighters.get_mut(toggle.fighter) {
            state.is_crouching = !state.is_crouching;
        }
    }
}
