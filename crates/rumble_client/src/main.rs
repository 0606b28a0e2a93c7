use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use rumble_simulation::{logger, SimulationPlugin};

mod camera;
mod hud;
mod input;
mod scenes;
mod vfx;

use camera::CameraPlugin;
use hud::HudPlugin;
use input::InputPlugin;
use scenes::ScenesPlugin;
use vfx::VfxPlugin;

/// Top-level scene. The whole battle (arena, fighters, overlay) is
/// state-scoped, so leaving `Battle` resets the match.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    StartMenu,
    Battle,
}

fn main() {
    logger::init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "RUMBLE".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        .init_state::<AppState>()
        .insert_resource(DirectionalLightShadowMap { size: 2048 })
        .add_plugins((ScenesPlugin, InputPlugin, HudPlugin, VfxPlugin, CameraPlugin))
        .run();
}
