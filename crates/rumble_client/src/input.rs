//! Keyboard mapping: keys to fighter intents.
//!
//! Bindings are data, not hardcoded match arms, and are validated for
//! duplicate keys before the table is installed.

use bevy::prelude::*;
use std::fmt;

use rumble_simulation::{
    logger, CrouchToggle, Dead, Fighter, FighterId, HitIntent, HitReleaseIntent, JumpIntent,
    MoveDirection, MoveIntent, RunToggle,
};

use crate::AppState;

/// One player's key table. Run and crouch are optional.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub jump: KeyCode,
    pub hit: KeyCode,
    pub run: Option<KeyCode>,
    pub crouch: Option<KeyCode>,
}

impl KeyBindings {
    pub fn player_one() -> Self {
        Self {
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            jump: KeyCode::KeyW,
            hit: KeyCode::KeyS,
            run: Some(KeyCode::ShiftLeft),
            crouch: Some(KeyCode::ControlLeft),
        }
    }

    pub fn player_two() -> Self {
        Self {
            move_left: KeyCode::ArrowLeft,
            move_right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
            hit: KeyCode::ArrowDown,
            run: Some(KeyCode::ShiftRight),
            crouch: Some(KeyCode::ControlRight),
        }
    }

    fn keys(&self) -> Vec<KeyCode> {
        let mut keys = vec![self.move_left, self.move_right, self.jump, self.hit];
        keys.extend(self.run);
        keys.extend(self.crouch);
        keys
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    DuplicateKey(KeyCode),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::DuplicateKey(key) => {
                write!(f, "key {:?} is bound to more than one action", key)
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Both fighters' key tables.
#[derive(Resource, Debug, Clone)]
pub struct PlayerBindings {
    pub one: KeyBindings,
    pub two: KeyBindings,
}

impl Default for PlayerBindings {
    fn default() -> Self {
        Self {
            one: KeyBindings::player_one(),
            two: KeyBindings::player_two(),
        }
    }
}

impl PlayerBindings {
    /// A key may appear once across both tables.
    pub fn validate(&self) -> Result<(), BindingError> {
        let mut seen: Vec<KeyCode> = Vec::new();
        for key in self.one.keys().into_iter().chain(self.two.keys()) {
            if seen.contains(&key) {
                return Err(BindingError::DuplicateKey(key));
            }
            seen.push(key);
        }
        Ok(())
    }

    pub fn for_fighter(&self, id: FighterId) -> &KeyBindings {
        match id {
            FighterId::One => &self.one,
            FighterId::Two => &self.two,
        }
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        let bindings = PlayerBindings::default();
        if let Err(err) = bindings.validate() {
            logger::log_error(&format!("key bindings rejected: {}", err));
        }
        app.insert_resource(bindings).add_systems(
            Update,
            emit_fighter_intents.run_if(in_state(AppState::Battle)),
        );
    }
}

/// Move keys repeat every frame while held; jump and hit fire on edge
/// transitions only. Dead fighters stop reading input entirely.
fn emit_fighter_intents(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<PlayerBindings>,
    fighters: Query<(Entity, &Fighter), Without<Dead>>,
    mut moves: EventWriter<MoveIntent>,
    mut jumps: EventWriter<JumpIntent>,
    mut hits: EventWriter<HitIntent>,
    mut releases: EventWriter<HitReleaseIntent>,
    mut runs: EventWriter<RunToggle>,
    mut crouches: EventWriter<CrouchToggle>,
) {
    for (entity, fighter) in fighters.iter() {
        let table = bindings.for_fighter(fighter.id);
        if keys.pressed(table.move_left) {
            moves.write(MoveIntent {
                fighter: entity,
                direction: MoveDirection::Left,
            });
        }
        if keys.pressed(table.move_right) {
            moves.write(MoveIntent {
                fighter: entity,
                direction: MoveDirection::Right,
            });
        }
        if keys.just_pressed(table.jump) {
            jumps.write(JumpIntent { fighter: entity });
        }
        if keys.just_pressed(table.hit) {
            hits.write(HitIntent { fighter: entity });
        }
        if keys.just_released(table.hit) {
            releases.write(HitReleaseIntent { fighter: entity });
        }
        if table.run.is_some_and(|key| keys.just_pressed(key)) {
            runs.write(RunToggle { fighter: entity });
        }
        if table.crouch.is_some_and(|key| keys.just_pressed(key)) {
            crouches.write(CrouchToggle { fighter: entity });
        }
    }
}
