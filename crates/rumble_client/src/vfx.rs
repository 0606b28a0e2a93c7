//! Visual effects: arm swings and the death burst.

use bevy::prelude::*;
use rand::Rng;
use rumble_simulation::{DeterministicRng, FighterDied, SwingEnded, SwingStarted};
use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use crate::AppState;

/// Burst origin sits this far above the body center.
const FIRE_Y_OFFSET: f32 = 0.7;

const BURST_LIFETIME: Duration = Duration::from_secs(2);
const BURST_PARTICLES: usize = 24;

/// One swingable arm, child of a fighter body.
#[derive(Component)]
pub struct ArmGroup {
    pub owner: Entity,
    pub left: bool,
}

/// Root of a fire-and-smoke burst, tracking the dying fighter.
#[derive(Component)]
pub struct DeathBurst {
    pub anchor: Entity,
    pub timer: Timer,
}

#[derive(Component)]
pub struct BurstParticle {
    pub velocity: Vec3,
    pub age: f32,
    pub lifetime: f32,
}

pub struct VfxPlugin;

impl Plugin for VfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (swing_arms, spawn_death_bursts, animate_bursts)
                .run_if(in_state(AppState::Battle)),
        );
    }
}

/// Raises the named arm 90 degrees on swing start, drops both on end.
fn swing_arms(
    mut started: EventReader<SwingStarted>,
    mut ended: EventReader<SwingEnded>,
    mut arms: Query<(&ArmGroup, &mut Transform)>,
) {
    for event in started.read() {
        for (arm, mut transform) in arms.iter_mut() {
            if arm.owner == event.fighter && arm.left == event.left_arm {
                // Mirrored per side so both arms swing forward
                let angle = if arm.left { -FRAC_PI_2 } else { FRAC_PI_2 };
                transform.rotation = Quat::from_rotation_z(angle);
            }
        }
    }
    for event in ended.read() {
        for (arm, mut transform) in arms.iter_mut() {
            if arm.owner == event.fighter {
                transform.rotation = Quat::IDENTITY;
            }
        }
    }
}

fn spawn_death_bursts(
    mut died: EventReader<FighterDied>,
    anchors: Query<&Transform>,
    mut rng: ResMut<DeterministicRng>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in died.read() {
        let Ok(anchor) = anchors.get(event.fighter) else {
            continue;
        };
        let root = commands
            .spawn((
                DeathBurst {
                    anchor: event.fighter,
                    timer: Timer::new(BURST_LIFETIME, TimerMode::Once),
                },
                StateScoped(AppState::Battle),
                Transform::from_translation(anchor.translation + Vec3::Y * FIRE_Y_OFFSET),
                Visibility::default(),
            ))
            .id();

        let sphere = meshes.add(Sphere::new(0.08));
        for index in 0..BURST_PARTICLES {
            // Alternate fire and smoke
            let color = if index % 2 == 0 {
                Color::srgb(1.0, 0.45, 0.1)
            } else {
                Color::srgb(0.35, 0.35, 0.35)
            };
            let direction = Vec3::new(
                rng.rng.gen_range(-1.0..1.0),
                rng.rng.gen_range(0.2..1.0),
                rng.rng.gen_range(-1.0..1.0),
            );
            let speed = rng.rng.gen_range(0.5..2.5);
            let particle = commands
                .spawn((
                    BurstParticle {
                        velocity: direction.normalize_or_zero() * speed,
                        age: 0.0,
                        lifetime: rng.rng.gen_range(0.6..1.8),
                    },
                    Mesh3d(sphere.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color,
                        unlit: true,
                        ..default()
                    })),
                    Transform::default(),
                ))
                .id();
            commands.entity(root).add_child(particle);
        }
    }
}

/// Roots follow their (still falling) fighter and expire on a timer;
/// particles scatter, sink under light gravity and shrink out, then
/// restart at the root.
fn animate_bursts(
    time: Res<Time>,
    mut commands: Commands,
    anchors: Query<&Transform, (Without<DeathBurst>, Without<BurstParticle>)>,
    mut roots: Query<(Entity, &mut DeathBurst, &mut Transform), Without<BurstParticle>>,
    mut particles: Query<(&mut BurstParticle, &mut Transform), Without<DeathBurst>>,
) {
    let dt = time.delta_secs();

    for (entity, mut burst, mut transform) in roots.iter_mut() {
        burst.timer.tick(time.delta());
        if burst.timer.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        if let Ok(anchor) = anchors.get(burst.anchor) {
            transform.translation = anchor.translation + Vec3::Y * FIRE_Y_OFFSET;
        }
    }

    for (mut particle, mut transform) in particles.iter_mut() {
        particle.age += dt;
        if particle.age >= particle.lifetime {
            particle.age = 0.0;
            transform.translation = Vec3::ZERO;
            transform.scale = Vec3::ONE;
            continue;
        }
        particle.velocity.y -= 2.0 * dt;
        let step = particle.velocity * dt;
        transform.translation += step;
        let fade = 1.0 - particle.age / particle.lifetime;
        transform.scale = Vec3::splat(fade.max(0.05));
    }
}
