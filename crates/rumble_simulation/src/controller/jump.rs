//! Jump: a one-shot upward impulse, debounced.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use super::JumpIntent;
use crate::components::{Fighter, FighterConfig, FighterState};
use crate::logger;

/// Minimum time between successful jump impulses.
pub const JUMP_DEBOUNCE: Duration = Duration::from_millis(100);

/// A jump is allowed only when grounded, not crouching, and past the
/// debounce window since the previous successful jump.
pub fn jump_allowed(state: &FighterState, now: Duration) -> bool {
    if !state.is_grounded || state.is_crouching {
        return false;
    }
    match state.last_jump {
        None => true,
        Some(stamp) => stamp + JUMP_DEBOUNCE < now,
    }
}

/// Consumes `JumpIntent` events. The jump clock only advances on a
/// successful impulse, so a denied jump leaves no state behind.
pub fn apply_jump_intents(
    mut intents: EventReader<JumpIntent>,
    time: Res<Time>,
    mut fighters: Query<(&FighterConfig, &mut FighterState, &mut ExternalImpulse), With<Fighter>>,
) {
    let now = time.elapsed();

    for intent in intents.read() {
        let Ok((config, mut state, mut impulse)) = fighters.get_mut(intent.fighter) else {
            continue;
        };
        if !jump_allowed(&state, now) {
            continue;
        }
        impulse.impulse += Vec3::Y * config.jump_impulse;
        state.last_jump = Some(now);
        logger::log(&format!("Jump impulse applied ({:?})", intent.fighter));
    }
}
