//! UI overlays: menu prompt and the winner screen.

use bevy::prelude::*;
use rumble_simulation::{logger, MatchState, WinnerDecided};

use crate::AppState;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::StartMenu), spawn_menu_prompt)
            .add_systems(
                Update,
                (spawn_winner_overlay, restart_on_space).run_if(in_state(AppState::Battle)),
            );
    }
}

fn spawn_menu_prompt(mut commands: Commands) {
    commands
        .spawn((
            StateScoped(AppState::StartMenu),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(60.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("RUMBLE   press SPACE to fight"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[derive(Component)]
struct WinnerOverlay;

/// Fires when the simulation announces the winner (a fixed delay after
/// the deciding death).
fn spawn_winner_overlay(mut decided: EventReader<WinnerDecided>, mut commands: Commands) {
    for event in decided.read() {
        logger::log_info(&format!(
            "Showing win screen for fighter {}",
            event.winner.number()
        ));
        commands
            .spawn((
                WinnerOverlay,
                StateScoped(AppState::Battle),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(format!("WINNER IS FIGHTER {}", event.winner.number())),
                    TextFont {
                        font_size: 64.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.1, 0.1, 0.1)),
                ));
                parent.spawn((
                    Text::new("press SPACE to restart"),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.3, 0.3, 0.3)),
                ));
            });
    }
}

/// Active only once the overlay is up; going back to the menu tears the
/// whole battle down via state scoping.
fn restart_on_space(
    keys: Res<ButtonInput<KeyCode>>,
    match_state: Res<MatchState>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if match_state.overlay_shown && keys.just_released(KeyCode::Space) {
        next_state.set(AppState::StartMenu);
    }
}
