//! Character controller: input intents to rigid-body motion.
//!
//! Intents arrive as events from whatever host drives the simulation
//! (keyboard mapping in the client, scripts in the headless binary).
//! The controller owns the grounded/falling classification and all
//! velocity writes to the fighter bodies.

use bevy::prelude::*;

pub mod ground;
pub mod jump;
pub mod movement;
pub mod sync;

mod jump_tests;

pub use jump::apply_jump_intents;
pub use movement::{apply_move_intents, toggle_crouch, toggle_run};
pub use sync::sync_fighter_state;

/// Horizontal travel direction on the fight plane.
///
/// "Left" is +X in scene space (the camera sits on -Z looking in).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    pub fn sign(&self) -> f32 {
        match self {
            MoveDirection::Left => 1.0,
            MoveDirection::Right => -1.0,
        }
    }

    /// Yaw the body faces while travelling this way.
    pub fn yaw(&self) -> f32 {
        match self {
            MoveDirection::Left => 0.0,
            MoveDirection::Right => std::f32::consts::PI,
        }
    }
}

/// Fired every frame a move key is held (repeatable action).
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveIntent {
    pub fighter: Entity,
    pub direction: MoveDirection,
}

/// Fired once per physical jump key press (no auto-repeat).
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpIntent {
    pub fighter: Entity,
}

/// Toggles the running flag (affects the acceleration step).
#[derive(Event, Debug, Clone, Copy)]
pub struct RunToggle {
    pub fighter: Entity,
}

/// Toggles the crouching flag (slower acceleration, jump disabled).
#[derive(Event, Debug, Clone, Copy)]
pub struct CrouchToggle {
    pub fighter: Entity,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveIntent>()
            .add_event::<JumpIntent>()
            .add_event::<RunToggle>()
            .add_event::<CrouchToggle>();

        // State sync runs last: movement and jump act on the classification
        // derived from the previous physics step.
        app.add_systems(
            Update,
            (
                toggle_run,
                toggle_crouch,
                apply_move_intents,
                apply_jump_intents,
                sync_fighter_state,
            )
                .chain(),
        );
    }
}
