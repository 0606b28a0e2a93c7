//! Tests for the jump gate.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_rapier3d::prelude::ExternalImpulse;
    use std::time::Duration;

    use super::super::jump::{apply_jump_intents, jump_allowed, JUMP_DEBOUNCE};
    use super::super::JumpIntent;
    use crate::components::{Fighter, FighterConfig, FighterId, FighterState};

    #[test]
    fn test_jump_requires_ground() {
        let state = FighterState::default();
        assert!(!jump_allowed(&state, Duration::from_secs(1)));
    }

    #[test]
    fn test_jump_blocked_while_crouching() {
        let state = FighterState {
            is_grounded: true,
            is_crouching: true,
            ..Default::default()
        };
        assert!(!jump_allowed(&state, Duration::from_secs(1)));
    }

    #[test]
    fn test_jump_debounce_window() {
        let mut state = FighterState {
            is_grounded: true,
            ..Default::default()
        };
        state.last_jump = Some(Duration::from_millis(1000));
        assert!(!jump_allowed(&state, Duration::from_millis(1050)));
        assert!(!jump_allowed(&state, Duration::from_millis(1100)));
        assert!(jump_allowed(&state, Duration::from_millis(1101)));
        assert_eq!(JUMP_DEBOUNCE, Duration::from_millis(100));
    }

    #[test]
    fn test_jump_applies_single_impulse() {
        let mut app = App::new();
        app.add_event::<JumpIntent>();
        app.init_resource::<Time>();
        app.add_systems(Update, apply_jump_intents);

        let fighter = app
            .world_mut()
            .spawn((
                Fighter { id: FighterId::One },
                FighterConfig::default(),
                FighterState {
                    is_grounded: true,
                    ..Default::default()
                },
                ExternalImpulse::default(),
            ))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        // Two intents in one frame: the second is inside the debounce window.
        for _ in 0..2 {
            app.world_mut()
                .resource_mut::<Events<JumpIntent>>()
                .send(JumpIntent { fighter });
        }
        app.update();

        let impulse = app.world().get::<ExternalImpulse>(fighter).unwrap();
        let expected = FighterConfig::default().jump_impulse;
        assert!(
            (impulse.impulse.y - expected).abs() < 1e-5,
            "impulse = {}",
            impulse.impulse.y
        );

        let state = app.world().get::<FighterState>(fighter).unwrap();
        assert_eq!(state.last_jump, Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_denied_jump_leaves_no_state() {
        let mut app = App::new();
        app.add_event::<JumpIntent>();
        app.init_resource::<Time>();
        app.add_systems(Update, apply_jump_intents);

        let fighter = app
            .world_mut()
            .spawn((
                Fighter { id: FighterId::One },
                FighterConfig::default(),
                FighterState::default(), // airborne
                ExternalImpulse::default(),
            ))
            .id();

        app.world_mut()
            .resource_mut::<Events<JumpIntent>>()
            .send(JumpIntent { fighter });
        app.update();

        let impulse = app.world().get::<ExternalImpulse>(fighter).unwrap();
        assert_eq!(impulse.impulse, Vec3::ZERO);
        let state = app.world().get::<FighterState>(fighter).unwrap();
        assert_eq!(state.last_jump, None);
    }
}
