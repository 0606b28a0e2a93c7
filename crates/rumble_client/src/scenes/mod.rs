//! Scene setup: start menu and battle arena.

use bevy::prelude::*;
use rumble_simulation::logger;

pub mod battle;
pub mod start;

/// Coarse load progress for the scene being assembled, reported through
/// the logger so headed and headless runs read the same.
#[derive(Resource, Debug, Default)]
pub struct SceneLoader {
    loaded: usize,
    total: usize,
}

impl SceneLoader {
    pub fn begin(&mut self, scene: &str, total: usize) {
        self.loaded = 0;
        self.total = total;
        logger::log_info(&format!("Loading {}: 0/{}", scene, total));
    }

    pub fn advance(&mut self, what: &str) {
        self.loaded += 1;
        logger::log_info(&format!("Loaded {}/{}: {}", self.loaded, self.total, what));
    }
}

pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneLoader>()
            .add_plugins((start::StartScenePlugin, battle::BattleScenePlugin));
    }
}
