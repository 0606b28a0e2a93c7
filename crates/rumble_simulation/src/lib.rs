//! RUMBLE simulation core
//!
//! Headless ECS logic for a two-fighter physics brawl: character
//! controller (ground probe, movement, jump, per-frame state sync),
//! combat (hit sensors, knockback), and match flow (death, win).
//!
//! Hosts add `RapierPhysicsPlugin` themselves (windowed client or the
//! headless demo binary), then `SimulationPlugin` on top.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod combat;
pub mod components;
pub mod controller;
pub mod logger;
pub mod match_flow;
pub mod spawn;

pub use combat::{CombatPlugin, HitIntent, HitReleaseIntent, HitSensor, SwingEnded, SwingStarted};
pub use components::*;
pub use controller::{ControllerPlugin, CrouchToggle, JumpIntent, MoveDirection, MoveIntent, RunToggle};
pub use match_flow::{
    Dead, FighterDied, MatchFlowPlugin, MatchState, WinnerDecided, KILL_PLANE_Y, WIN_SCREEN_DELAY,
};
pub use spawn::spawn_fighter;

/// Everything the simulation needs on top of a physics-enabled `App`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DeterministicRng::new(42))
            .add_plugins((ControllerPlugin, CombatPlugin, MatchFlowPlugin));
    }
}

/// Seeded RNG resource (arm-swing pick, VFX scatter).
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal Bevy App for headless runs: no renderer, real physics.
pub fn create_headless_app(seed: u64) -> App {
    use bevy::transform::TransformPlugin;
    use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};

    logger::init_logger();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(SimulationPlugin)
        .insert_resource(DeterministicRng::new(seed));
    app
}
