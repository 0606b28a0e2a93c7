//! Hit sensor lifecycle and contact handling.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use super::{HitIntent, HitReleaseIntent, SwingEnded, SwingStarted};
use crate::components::{ActiveHitSensor, Fighter, FighterCollider, FighterConfig, FighterState};
use crate::logger;
use crate::DeterministicRng;

/// Horizontal speed set on a struck fighter.
pub const KNOCKBACK_SPEED: f32 = 10.0;
/// Half extent of the cubic sensor volume.
pub const SENSOR_HALF_EXTENT: f32 = 0.2;
/// Sensor offset beyond half the attacker's radius.
pub const SENSOR_REACH: f32 = 0.8;

/// The transient sensor volume an attack spawns.
///
/// `knockback_x` is captured from the attacker's facing when the sensor is
/// created and is NOT re-read on contact; flipping around mid-swing keeps
/// the original shove direction.
#[derive(Component, Debug)]
pub struct HitSensor {
    pub owner: Entity,
    pub knockback_x: f32,
}

/// Spawns a sensor beside the attacker on a hit press.
///
/// A press while a sensor is already live replaces it (teardown first), so
/// a fighter never owns two sensors at once.
pub fn start_hits(
    mut intents: EventReader<HitIntent>,
    mut swings: EventWriter<SwingStarted>,
    mut rng: ResMut<DeterministicRng>,
    mut commands: Commands,
    mut fighters: Query<
        (&FighterConfig, &FighterState, &Transform, &mut ActiveHitSensor),
        With<Fighter>,
    >,
) {
    for intent in intents.read() {
        let Ok((config, state, transform, mut slot)) = fighters.get_mut(intent.fighter) else {
            continue;
        };

        if let Some(previous) = slot.0.take() {
            commands.entity(previous).despawn();
        }

        let reach = config.radius / 2.0 + SENSOR_REACH;
        let (offset, knockback_x) = if state.facing_left {
            (reach, KNOCKBACK_SPEED)
        } else {
            (-reach, -KNOCKBACK_SPEED)
        };

        let sensor = commands
            .spawn((
                HitSensor {
                    owner: intent.fighter,
                    knockback_x,
                },
                Collider::cuboid(SENSOR_HALF_EXTENT, SENSOR_HALF_EXTENT, SENSOR_HALF_EXTENT),
                Sensor,
                ActiveEvents::COLLISION_EVENTS,
                Transform::from_translation(transform.translation + Vec3::X * offset),
            ))
            .id();
        slot.0 = Some(sensor);

        swings.write(SwingStarted {
            fighter: intent.fighter,
            left_arm: rng.rng.gen_bool(0.5),
        });
    }
}

/// Applies knockback on contact-begin between a sensor and an opposing
/// fighter. Contact-end events are ignored.
pub fn apply_sensor_knockback(
    mut collisions: EventReader<CollisionEvent>,
    sensors: Query<&HitSensor>,
    collider_owners: Query<&FighterCollider>,
    mut fighters: Query<(&Fighter, &mut Velocity)>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(first, second, _) = event else {
            continue;
        };

        let (sensor, contact) = if let Ok(sensor) = sensors.get(*first) {
            (sensor, *second)
        } else if let Ok(sensor) = sensors.get(*second) {
            (sensor, *first)
        } else {
            continue;
        };

        // Auxiliary colliders (the feet capsule) resolve to their body.
        let other = match collider_owners.get(contact) {
            Ok(owner) => owner.0,
            Err(_) => contact,
        };

        if other == sensor.owner {
            continue;
        }
        let Ok((fighter, mut velocity)) = fighters.get_mut(other) else {
            continue;
        };

        velocity.linvel = Vec3::new(sensor.knockback_x, 0.0, 0.0);
        logger::log(&format!(
            "Hit connected: fighter {} knocked at {:.1} m/s",
            fighter.id.number(),
            sensor.knockback_x
        ));
    }
}

/// Tears the sensor down on hit release and reverts the arm pose.
pub fn end_hits(
    mut intents: EventReader<HitReleaseIntent>,
    mut swings: EventWriter<SwingEnded>,
    mut commands: Commands,
    mut fighters: Query<&mut ActiveHitSensor, With<Fighter>>,
) {
    for intent in intents.read() {
        let Ok(mut slot) = fighters.get_mut(intent.fighter) else {
            continue;
        };
        if let Some(sensor) = slot.0.take() {
            commands.entity(sensor).despawn();
        }
        swings.write(SwingEnded {
            fighter: intent.fighter,
        });
    }
}
