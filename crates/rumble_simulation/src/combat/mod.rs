//! Combat: transient hit sensors and knockback.
//!
//! A hit press spawns a short-lived sensor volume beside the attacker;
//! contact-begin events against an opposing fighter shove that fighter
//! away. Release (or a second press) tears the sensor down.

use bevy::prelude::*;

pub mod hitbox;

mod hitbox_tests;

pub use hitbox::{
    apply_sensor_knockback, end_hits, start_hits, HitSensor, KNOCKBACK_SPEED, SENSOR_HALF_EXTENT,
    SENSOR_REACH,
};

/// Hit key pressed (no auto-repeat).
#[derive(Event, Debug, Clone, Copy)]
pub struct HitIntent {
    pub fighter: Entity,
}

/// Hit key released.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitReleaseIntent {
    pub fighter: Entity,
}

/// A swing began; the host rotates the named arm 90 degrees.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwingStarted {
    pub fighter: Entity,
    pub left_arm: bool,
}

/// The swing ended; arm poses revert.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwingEnded {
    pub fighter: Entity,
}

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitIntent>()
            .add_event::<HitReleaseIntent>()
            .add_event::<SwingStarted>()
            .add_event::<SwingEnded>();

        app.add_systems(
            Update,
            (start_hits, apply_sensor_knockback, end_hits).chain(),
        );
    }
}
