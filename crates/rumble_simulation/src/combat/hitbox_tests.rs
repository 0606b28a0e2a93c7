//! Tests for the hit sensor lifecycle and knockback.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
    use bevy_rapier3d::prelude::{CollisionEvent, Velocity};

    use super::super::hitbox::{
        apply_sensor_knockback, end_hits, start_hits, HitSensor, KNOCKBACK_SPEED,
    };
    use super::super::{HitIntent, HitReleaseIntent, SwingEnded, SwingStarted};
    use crate::components::{ActiveHitSensor, Fighter, FighterConfig, FighterId, FighterState};
    use crate::DeterministicRng;

    fn combat_app() -> App {
        let mut app = App::new();
        app.add_event::<HitIntent>()
            .add_event::<HitReleaseIntent>()
            .add_event::<SwingStarted>()
            .add_event::<SwingEnded>()
            .add_event::<CollisionEvent>()
            .insert_resource(DeterministicRng::new(7));
        app.add_systems(Update, (start_hits, apply_sensor_knockback, end_hits).chain());
        app
    }

    fn spawn_fighter_shell(app: &mut App, id: FighterId, facing_left: bool) -> Entity {
        app.world_mut()
            .spawn((
                Fighter { id },
                FighterConfig::default(),
                FighterState {
                    facing_left,
                    ..Default::default()
                },
                ActiveHitSensor::default(),
                Transform::default(),
                Velocity::default(),
            ))
            .id()
    }

    fn sensor_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query::<&HitSensor>();
        query.iter(app.world()).count()
    }

    #[test]
    fn test_hit_spawns_single_sensor() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, true);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();

        assert_eq!(sensor_count(&mut app), 1);
        let slot = app.world().get::<ActiveHitSensor>(attacker).unwrap();
        assert!(slot.0.is_some());
    }

    #[test]
    fn test_second_press_replaces_sensor() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, true);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();
        let first = app.world().get::<ActiveHitSensor>(attacker).unwrap().0.unwrap();

        // Key-down again without an intervening key-up.
        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();

        assert_eq!(sensor_count(&mut app), 1);
        let second = app.world().get::<ActiveHitSensor>(attacker).unwrap().0.unwrap();
        assert_ne!(first, second);
        assert!(app.world().get_entity(first).is_err());
    }

    #[test]
    fn test_release_tears_sensor_down() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, false);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();
        app.world_mut()
            .resource_mut::<Events<HitReleaseIntent>>()
            .send(HitReleaseIntent { fighter: attacker });
        app.update();

        assert_eq!(sensor_count(&mut app), 0);
        let slot = app.world().get::<ActiveHitSensor>(attacker).unwrap();
        assert!(slot.0.is_none());
    }

    #[test]
    fn test_knockback_direction_fixed_at_creation() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, true);
        let target = spawn_fighter_shell(&mut app, FighterId::Two, false);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();
        let sensor = app.world().get::<ActiveHitSensor>(attacker).unwrap().0.unwrap();

        // Attacker turns around after the sensor exists; the stored shove
        // direction must not change.
        app.world_mut()
            .get_mut::<FighterState>(attacker)
            .unwrap()
            .facing_left = false;

        app.world_mut()
            .resource_mut::<Events<CollisionEvent>>()
            .send(CollisionEvent::Started(
                sensor,
                target,
                CollisionEventFlags::SENSOR,
            ));
        app.update();

        let velocity = app.world().get::<Velocity>(target).unwrap();
        assert_eq!(velocity.linvel, Vec3::new(KNOCKBACK_SPEED, 0.0, 0.0));
    }

    #[test]
    fn test_contact_end_is_ignored() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, true);
        let target = spawn_fighter_shell(&mut app, FighterId::Two, false);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();
        let sensor = app.world().get::<ActiveHitSensor>(attacker).unwrap().0.unwrap();

        app.world_mut()
            .resource_mut::<Events<CollisionEvent>>()
            .send(CollisionEvent::Stopped(
                sensor,
                target,
                CollisionEventFlags::SENSOR,
            ));
        app.update();

        let velocity = app.world().get::<Velocity>(target).unwrap();
        assert_eq!(velocity.linvel, Vec3::ZERO);
    }

    #[test]
    fn test_owner_is_never_knocked_back() {
        let mut app = combat_app();
        let attacker = spawn_fighter_shell(&mut app, FighterId::One, true);

        app.world_mut()
            .resource_mut::<Events<HitIntent>>()
            .send(HitIntent { fighter: attacker });
        app.update();
        let sensor = app.world().get::<ActiveHitSensor>(attacker).unwrap().0.unwrap();

        app.world_mut()
            .resource_mut::<Events<CollisionEvent>>()
            .send(CollisionEvent::Started(
                sensor,
                attacker,
                CollisionEventFlags::SENSOR,
            ));
        app.update();

        let velocity = app.world().get::<Velocity>(attacker).unwrap();
        assert_eq!(velocity.linvel, Vec3::ZERO);
    }
}
