//! Match flow: death detection, winner decision, overlay timing.

use bevy::prelude::*;

pub mod flow;

mod flow_tests;

pub use flow::{
    announce_winner, decide_winner, detect_fallen_fighters, retire_dead_fighters, Dead,
    FighterDied, MatchState, WinnerDecided, KILL_PLANE_Y, WIN_SCREEN_DELAY,
};

pub struct MatchFlowPlugin;

impl Plugin for MatchFlowPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FighterDied>()
            .add_event::<WinnerDecided>()
            .init_resource::<MatchState>();

        app.add_systems(
            Update,
            (
                detect_fallen_fighters,
                retire_dead_fighters,
                decide_winner,
                announce_winner,
            )
                .chain(),
        );
    }
}
