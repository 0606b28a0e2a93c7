//! Battle arena: platform, the two fighters and their visuals.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, Friction, RigidBody};
use rumble_simulation::{spawn_fighter, FighterConfig, FighterId, HitSensor, MatchState};

use super::SceneLoader;
use crate::camera::MainCamera;
use crate::vfx::ArmGroup;
use crate::AppState;

pub struct BattleScenePlugin;

impl Plugin for BattleScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Battle), (frame_camera, setup_arena))
            .add_systems(OnExit(AppState::Battle), cleanup_sensors);
    }
}

/// Side view of the fight plane, camera on -Z.
fn frame_camera(mut cameras: Query<&mut Transform, With<MainCamera>>) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    *transform = Transform::from_xyz(0.0, 1.5, -15.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
}

fn setup_arena(
    mut commands: Commands,
    mut loader: ResMut<SceneLoader>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    loader.begin("battle", 2);

    // Fresh outcome state every time the battle starts
    commands.insert_resource(MatchState::default());

    commands.spawn((
        StateScoped(AppState::Battle),
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Frictionless platform: knockback alone carries fighters off the edge
    commands.spawn((
        StateScoped(AppState::Battle),
        RigidBody::Fixed,
        Collider::cuboid(10.0, 0.25, 2.5),
        Friction::coefficient(0.0),
        Mesh3d(meshes.add(Cuboid::new(20.0, 0.5, 5.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.3, 0.35))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    loader.advance("arena");

    let spawns = [
        (FighterId::One, Vec3::new(8.0, 5.0, 0.0), Color::srgb(0.9, 0.5, 0.1)),
        (FighterId::Two, Vec3::new(-8.0, 5.0, 0.0), Color::srgb(0.2, 0.4, 0.9)),
    ];
    for (id, translation, color) in spawns {
        dress_fighter(
            &mut commands,
            &mut meshes,
            &mut materials,
            id,
            translation,
            color,
        );
    }
    loader.advance("fighters");
}

/// Spawns the physics body and layers the bird look on top: capsule
/// torso, a beak along local +X (the facing axis) and two swing arms.
fn dress_fighter(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    id: FighterId,
    translation: Vec3,
    color: Color,
) {
    let config = FighterConfig::default();
    let torso = Capsule3d::new(config.radius, config.height - 2.0 * config.radius);
    let body = spawn_fighter(commands, id, config, translation);

    commands.entity(body).insert((
        StateScoped(AppState::Battle),
        Mesh3d(meshes.add(torso)),
        MeshMaterial3d(materials.add(color)),
    ));

    let beak = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(0.7, 0.25, 0.25))),
            MeshMaterial3d(materials.add(Color::srgb(0.95, 0.75, 0.2))),
            Transform::from_xyz(0.55, 0.43, 0.0),
        ))
        .id();
    commands.entity(body).add_child(beak);

    for left in [true, false] {
        let z = if left { -0.55 } else { 0.55 };
        let arm = commands
            .spawn((
                ArmGroup { owner: body, left },
                Mesh3d(meshes.add(Cuboid::new(0.2, 0.9, 0.2))),
                MeshMaterial3d(materials.add(color)),
                Transform::from_xyz(0.0, 0.1, z),
            ))
            .id();
        commands.entity(body).add_child(arm);
    }
}

/// Hit sensors are plain entities, not children, so state scoping does
/// not reach them.
fn cleanup_sensors(mut commands: Commands, sensors: Query<Entity, With<HitSensor>>) {
    for sensor in sensors.iter() {
        commands.entity(sensor).despawn();
    }
}
