//! Tests for death detection and win sequencing.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use std::time::Duration;

    use super::super::flow::{
        announce_winner, decide_winner, detect_fallen_fighters, Dead, FighterDied, MatchState,
        WinnerDecided, KILL_PLANE_Y,
    };
    use crate::components::{Fighter, FighterId};

    fn flow_app() -> App {
        let mut app = App::new();
        app.add_event::<FighterDied>()
            .add_event::<WinnerDecided>()
            .init_resource::<MatchState>()
            .init_resource::<Time>();
        app.add_systems(
            Update,
            (detect_fallen_fighters, decide_winner, announce_winner).chain(),
        );
        app
    }

    #[test]
    fn test_kill_plane_fires_once_per_fighter() {
        let mut app = flow_app();
        let fallen = app
            .world_mut()
            .spawn((
                Fighter { id: FighterId::One },
                Transform::from_xyz(0.0, KILL_PLANE_Y - 5.0, 0.0),
            ))
            .id();

        app.update();
        assert!(app.world().get::<Dead>(fallen).is_some());
        assert_eq!(
            app.world().resource::<MatchState>().winner,
            Some(FighterId::Two)
        );

        // Still below the plane next frame; the Dead marker gates a repeat.
        app.update();
        let events = app.world().resource::<Events<FighterDied>>();
        assert_eq!(events.len(), 0);
    }

    #[test]
    fn test_winner_is_opponent_of_the_dead() {
        let mut app = flow_app();
        app.world_mut()
            .resource_mut::<Events<FighterDied>>()
            .send(FighterDied {
                fighter: Entity::PLACEHOLDER,
                id: FighterId::Two,
            });
        app.update();

        assert_eq!(
            app.world().resource::<MatchState>().winner,
            Some(FighterId::One)
        );
    }

    #[test]
    fn test_win_decision_is_idempotent() {
        let mut app = flow_app();
        for id in [FighterId::One, FighterId::Two] {
            app.world_mut()
                .resource_mut::<Events<FighterDied>>()
                .send(FighterDied {
                    fighter: Entity::PLACEHOLDER,
                    id,
                });
        }
        app.update();

        // First death (fighter one) decides; the second is a no-op.
        assert_eq!(
            app.world().resource::<MatchState>().winner,
            Some(FighterId::Two)
        );
    }

    #[test]
    fn test_overlay_fires_once_after_delay() {
        let mut app = flow_app();
        app.world_mut()
            .resource_mut::<Events<FighterDied>>()
            .send(FighterDied {
                fighter: Entity::PLACEHOLDER,
                id: FighterId::One,
            });
        app.update();

        // 1s in: not yet.
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        assert!(!app.world().resource::<MatchState>().overlay_shown);

        // Past the 2s mark: fires exactly once.
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(1500));
        app.update();
        assert!(app.world().resource::<MatchState>().overlay_shown);
        assert_eq!(app.world().resource::<Events<WinnerDecided>>().len(), 1);

        // Further frames stay quiet.
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        app.update();
        assert_eq!(app.world().resource::<Events<WinnerDecided>>().len(), 0);
    }

    #[test]
    fn test_match_state_reset() {
        let mut state = MatchState::default();
        assert!(state.record_death(FighterId::One));
        assert!(!state.record_death(FighterId::Two));

        state = MatchState::default();
        assert_eq!(state.winner, None);
        assert!(!state.overlay_shown);
    }
}
