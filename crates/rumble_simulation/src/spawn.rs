//! Fighter spawning: the physics body shared by headless and windowed hosts.
//!
//! Visuals (capsule mesh, beak, arms) are host concerns layered on top of
//! the entity this returns.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{
    ActiveHitSensor, Fighter, FighterCollider, FighterConfig, FighterId, FighterState,
};

/// Spawns a fighter rigid body at `translation`: a dynamic capsule with
/// locked rotations plus a shorter, grippier feet capsule as a child
/// collider. Returns the body entity.
pub fn spawn_fighter(
    commands: &mut Commands,
    id: FighterId,
    config: FighterConfig,
    translation: Vec3,
) -> Entity {
    let capsule_half = (config.height / 2.0 - config.radius).max(0.05);
    // The feet capsule covers the lower quarter of the visible body.
    let feet_half = config.height / 12.0;
    let feet_offset = -(config.height / 12.0);
    let radius = config.radius;

    let body = commands
        .spawn((
            Fighter { id },
            config,
            FighterState::default(),
            ActiveHitSensor::default(),
            RigidBody::Dynamic,
            Collider::capsule_y(capsule_half, radius),
            Friction::coefficient(1.0),
            Velocity::default(),
            ExternalImpulse::default(),
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            LockedAxes::ROTATION_LOCKED | LockedAxes::TRANSLATION_LOCKED_Z,
            Sleeping::default(),
            Transform::from_translation(translation),
        ))
        .id();

    let feet = commands
        .spawn((
            FighterCollider(body),
            Collider::capsule_y(feet_half, radius),
            Friction::coefficient(1.5),
            Transform::from_xyz(0.0, feet_offset, 0.0),
        ))
        .id();
    commands.entity(body).add_child(feet);

    body
}
