//! Fighter components: identity, tuning, runtime state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which side of the match a fighter belongs to.
///
/// A typed role tag: systems that need to know "is this body an opposing
/// fighter" check for this instead of inspecting entity names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum FighterId {
    One,
    Two,
}

impl FighterId {
    pub fn opponent(&self) -> FighterId {
        match self {
            FighterId::One => FighterId::Two,
            FighterId::Two => FighterId::One,
        }
    }

    /// 1-based number for HUD text and log lines.
    pub fn number(&self) -> u8 {
        match self {
            FighterId::One => 1,
            FighterId::Two => 2,
        }
    }
}

/// Marker for a controllable fighter entity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Fighter {
    pub id: FighterId,
}

/// Read-only fighter tuning. Set once at spawn.
///
/// Units: meters, seconds, milliseconds where the name says so.
#[derive(Component, Debug, Clone, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
pub struct FighterConfig {
    /// Full capsule height (m)
    pub height: f32,
    /// Capsule radius (m)
    pub radius: f32,
    /// Horizontal speed cap in the direction of travel (m/s)
    pub max_velocity: f32,
    /// One-shot upward jump impulse
    pub jump_impulse: f32,
    /// Acceleration multiplier while airborne (1.0 = full control)
    pub air_diminisher: f32,
    /// Minimum ms between velocity pushes for held move keys (0 = unlimited)
    pub velocity_interval_ms: u64,
    /// Velocity accumulated per second of held input, before delta scaling
    pub accel_per_second: f32,
    /// Total downward reach of the ground rays, from the body center (m)
    pub grounded_ray_max: f32,
    /// Continuous airborne time before `is_falling` flips on (ms)
    pub falling_threshold_ms: u64,
    /// Acceleration multiplier while running
    pub running_multiplier: f32,
    /// Acceleration multiplier while crouching
    pub crouching_multiplier: f32,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            height: 1.74,
            radius: 0.5,
            max_velocity: 3.7,
            jump_impulse: 8.0,
            air_diminisher: 0.2,
            velocity_interval_ms: 10,
            accel_per_second: 80.0,
            grounded_ray_max: 1.2,
            falling_threshold_ms: 1200,
            running_multiplier: 1.85,
            crouching_multiplier: 0.65,
        }
    }
}

impl FighterConfig {
    pub fn falling_threshold(&self) -> Duration {
        Duration::from_millis(self.falling_threshold_ms)
    }

    pub fn velocity_interval(&self) -> Duration {
        Duration::from_millis(self.velocity_interval_ms)
    }
}

/// Mutable per-frame fighter state, derived by the controller.
///
/// `position`, `velocity` and the boolean flags are refreshed once per frame
/// by `sync_fighter_state`; the facing flag flips on move input.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct FighterState {
    /// Body translation, copied from the physics body each frame
    pub position: Vec3,
    /// Absolute velocity components, rounded to 3 decimals
    pub velocity: Vec3,
    /// Rounded magnitude of `velocity`
    pub speed: f32,
    /// False while the rigid body sleeps; derived state is frozen then
    pub is_moving: bool,
    pub is_grounded: bool,
    pub is_falling: bool,
    pub is_running: bool,
    pub is_crouching: bool,
    pub facing_left: bool,
    /// When the body last went airborne (None while grounded)
    pub fall_started_at: Option<Duration>,
    /// Last time a move push was applied (rate limiting)
    pub last_velocity_push: Option<Duration>,
    /// Last successful jump
    pub last_jump: Option<Duration>,
}

/// Auxiliary collider entity (the feet capsule) pointing back at the
/// fighter body that owns it.
#[derive(Component, Debug, Clone, Copy)]
pub struct FighterCollider(pub Entity);

/// Slot tracking the fighter's live hit sensor, if any.
///
/// Invariant: at most one sensor entity per fighter. A second hit press
/// tears the old one down before spawning a replacement.
#[derive(Component, Debug, Default)]
pub struct ActiveHitSensor(pub Option<Entity>);
