//! Main camera: fixed framing per scene, plus a slow pan toward the
//! loser while the win overlay delay runs.

use bevy::prelude::*;
use rumble_simulation::{FighterDied, WIN_SCREEN_DELAY};

use crate::AppState;

/// The one persistent camera; scenes reposition it on entry.
#[derive(Component)]
pub struct MainCamera;

/// Pans the camera's look target from the arena center toward the
/// fighter that just died.
#[derive(Resource)]
pub struct DeathFocus {
    pub anchor: Entity,
    pub timer: Timer,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (begin_death_focus, ease_toward_loser)
                    .chain()
                    .run_if(in_state(AppState::Battle)),
            )
            .add_systems(OnExit(AppState::Battle), clear_death_focus);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(0.4, 4.0, 0.2).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Only the first death grabs the camera.
fn begin_death_focus(
    mut died: EventReader<FighterDied>,
    focus: Option<Res<DeathFocus>>,
    mut commands: Commands,
) {
    if focus.is_some() {
        died.clear();
        return;
    }
    if let Some(event) = died.read().next() {
        commands.insert_resource(DeathFocus {
            anchor: event.fighter,
            timer: Timer::new(WIN_SCREEN_DELAY, TimerMode::Once),
        });
    }
}

fn ease_toward_loser(
    time: Res<Time>,
    focus: Option<ResMut<DeathFocus>>,
    targets: Query<&Transform, Without<MainCamera>>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(mut focus) = focus else {
        return;
    };
    focus.timer.tick(time.delta());
    // The pan covers a fixed window; once it elapses the framing freezes
    // instead of tracking the body as it keeps falling.
    if focus.timer.finished() && !focus.timer.just_finished() {
        return;
    }
    let Ok(target) = targets.get(focus.anchor) else {
        return;
    };
    let Ok(mut cam) = cameras.single_mut() else {
        return;
    };
    let t = focus.timer.fraction();
    cam.look_at(target.translation * t, Vec3::Y);
}

fn clear_death_focus(mut commands: Commands) {
    commands.remove_resource::<DeathFocus>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn focus_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_systems(Update, ease_toward_loser);
        app
    }

    #[test]
    fn test_pan_freezes_after_window() {
        let mut app = focus_app();
        let camera = app
            .world_mut()
            .spawn((
                MainCamera,
                Transform::from_xyz(0.0, 1.5, -15.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
            ))
            .id();
        let loser = app
            .world_mut()
            .spawn(Transform::from_xyz(8.0, -12.0, 0.0))
            .id();
        app.world_mut().insert_resource(DeathFocus {
            anchor: loser,
            timer: Timer::new(WIN_SCREEN_DELAY, TimerMode::Once),
        });

        // Run the whole window out; the final frame snaps to the target.
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(3));
        app.update();
        let settled = app.world().get::<Transform>(camera).unwrap().rotation;

        // The body keeps falling; the settled framing must not follow it.
        app.world_mut().get_mut::<Transform>(loser).unwrap().translation =
            Vec3::new(8.0, -60.0, 0.0);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();

        let after = app.world().get::<Transform>(camera).unwrap().rotation;
        assert!(after.angle_between(settled) < 1e-6);
    }

    #[test]
    fn test_pan_tracks_inside_window() {
        let mut app = focus_app();
        let start =
            Transform::from_xyz(0.0, 1.5, -15.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let camera = app.world_mut().spawn((MainCamera, start)).id();
        let loser = app
            .world_mut()
            .spawn(Transform::from_xyz(8.0, -12.0, 0.0))
            .id();
        app.world_mut().insert_resource(DeathFocus {
            anchor: loser,
            timer: Timer::new(WIN_SCREEN_DELAY, TimerMode::Once),
        });

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(500));
        app.update();

        let after = app.world().get::<Transform>(camera).unwrap().rotation;
        assert!(after.angle_between(start.rotation) > 1e-3);
    }
}
