//! Death and win sequencing.
//!
//! A fighter dies when knocked below the kill plane. The first death
//! decides the winner (the opposing fighter); the winner overlay fires
//! once, a fixed delay later. Further deaths are no-ops.

use bevy::prelude::*;
use std::time::Duration;

use crate::components::{ActiveHitSensor, Fighter, FighterId};
use crate::logger;

/// Fighters below this Y are out of the arena.
pub const KILL_PLANE_Y: f32 = -10.0;

/// Delay between the winning death and the overlay.
pub const WIN_SCREEN_DELAY: Duration = Duration::from_secs(2);

/// Marker: this fighter no longer responds to input.
#[derive(Component, Debug)]
pub struct Dead;

/// A fighter left the arena.
#[derive(Event, Debug, Clone, Copy)]
pub struct FighterDied {
    pub fighter: Entity,
    pub id: FighterId,
}

/// The winner overlay should be shown now. Fires exactly once per match.
#[derive(Event, Debug, Clone, Copy)]
pub struct WinnerDecided {
    pub winner: FighterId,
}

/// Match-wide outcome state. Reset when a new battle starts.
#[derive(Resource, Debug, Default)]
pub struct MatchState {
    pub winner: Option<FighterId>,
    pub overlay_timer: Option<Timer>,
    pub overlay_shown: bool,
}

impl MatchState {
    /// Records a death. Returns true when this death decided the match;
    /// repeated calls after the first are no-ops.
    pub fn record_death(&mut self, dying: FighterId) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(dying.opponent());
        self.overlay_timer = Some(Timer::new(WIN_SCREEN_DELAY, TimerMode::Once));
        true
    }
}

/// Marks fighters below the kill plane as dead, once each.
pub fn detect_fallen_fighters(
    mut died: EventWriter<FighterDied>,
    mut commands: Commands,
    fighters: Query<(Entity, &Fighter, &Transform), Without<Dead>>,
) {
    for (entity, fighter, transform) in fighters.iter() {
        if transform.translation.y < KILL_PLANE_Y {
            commands.entity(entity).insert(Dead);
            died.write(FighterDied {
                fighter: entity,
                id: fighter.id,
            });
            logger::log_info(&format!("Fighter {} fell out of the arena", fighter.id.number()));
        }
    }
}

/// A dead fighter's live hit sensor (if any) is torn down with it.
pub fn retire_dead_fighters(
    mut died: EventReader<FighterDied>,
    mut commands: Commands,
    mut slots: Query<&mut ActiveHitSensor>,
) {
    for event in died.read() {
        if let Ok(mut slot) = slots.get_mut(event.fighter) {
            if let Some(sensor) = slot.0.take() {
                commands.entity(sensor).despawn();
            }
        }
    }
}

/// First death decides the winner and starts the overlay delay.
pub fn decide_winner(mut died: EventReader<FighterDied>, mut match_state: ResMut<MatchState>) {
    for event in died.read() {
        if match_state.record_death(event.id) {
            let winner = event.id.opponent();
            logger::log_info(&format!("Winner decided: fighter {}", winner.number()));
        }
    }
}

/// Fires `WinnerDecided` once the overlay delay elapses.
pub fn announce_winner(
    time: Res<Time>,
    mut match_state: ResMut<MatchState>,
    mut decided: EventWriter<WinnerDecided>,
) {
    let Some(winner) = match_state.winner else {
        return;
    };
    if match_state.overlay_shown {
        return;
    }
    let Some(timer) = match_state.overlay_timer.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if timer.finished() {
        match_state.overlay_shown = true;
        decided.write(WinnerDecided { winner });
    }
}
