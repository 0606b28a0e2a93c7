//! Start menu: sky, a lit stage and the spinning logo block.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Ccd, Collider, Friction, RigidBody, Velocity};

use super::SceneLoader;
use crate::camera::MainCamera;
use crate::AppState;

const SKY: Color = Color::srgb(0.53, 0.81, 0.92);

pub struct StartScenePlugin;

impl Plugin for StartScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY))
            .add_systems(OnEnter(AppState::StartMenu), (frame_camera, setup_menu_stage))
            .add_systems(
                Update,
                start_battle_on_space.run_if(in_state(AppState::StartMenu)),
            );
    }
}

/// Hovers above the logo, looking down.
fn frame_camera(mut cameras: Query<&mut Transform, With<MainCamera>>) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    *transform = Transform::from_xyz(0.4, 4.0, 0.2).looking_at(Vec3::ZERO, Vec3::Y);
}

fn setup_menu_stage(
    mut commands: Commands,
    mut loader: ResMut<SceneLoader>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    loader.begin("start menu", 2);

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        StateScoped(AppState::StartMenu),
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Frictionless slab under the logo
    commands.spawn((
        StateScoped(AppState::StartMenu),
        RigidBody::Fixed,
        Collider::cuboid(5.0, 0.1, 5.0),
        Friction::coefficient(0.0),
        Mesh3d(meshes.add(Cuboid::new(10.0, 0.2, 10.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.25, 0.28))),
        Transform::from_xyz(0.0, -2.0, 0.0),
    ));
    loader.advance("stage");

    // The logo is a real dynamic body: it drops onto the slab spinning
    // and keeps tumbling there on the frictionless surface.
    commands.spawn((
        StateScoped(AppState::StartMenu),
        RigidBody::Dynamic,
        Collider::cuboid(1.0, 0.3, 0.3),
        Velocity {
            linvel: Vec3::ZERO,
            angvel: Vec3::new(3.0, 1.0, 5.0),
        },
        Ccd::enabled(),
        Mesh3d(meshes.add(Cuboid::new(2.0, 0.6, 0.6))),
        MeshMaterial3d(materials.add(Color::srgb(0.85, 0.2, 0.15))),
        Transform::from_xyz(0.0, 3.0, 0.0),
    ));
    loader.advance("logo");
}

fn start_battle_on_space(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    // just_released so the same press cannot leak into the battle as input
    if keys.just_released(KeyCode::Space) {
        next_state.set(AppState::Battle);
    }
}
