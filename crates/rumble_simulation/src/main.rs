//! Headless RUMBLE demo
//!
//! Runs the simulation without a renderer: an arena platform, two
//! fighters, and a scripted held move key for fighter one. Useful for
//! smoke-testing the controller and match flow from a terminal.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rumble_simulation::{
    create_headless_app, spawn_fighter, Fighter, FighterConfig, FighterId, FighterState,
    MatchState, MoveDirection, MoveIntent,
};

fn main() {
    let seed = 42;
    println!("Starting RUMBLE headless demo (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_systems(Startup, setup_arena);
    app.add_systems(Update, scripted_input);

    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let mut query = app.world_mut().query::<(&Fighter, &FighterState)>();
            for (fighter, state) in query.iter(app.world()) {
                println!(
                    "Tick {}: fighter {} at ({:.2}, {:.2}) grounded={} falling={} speed={:.3}",
                    tick,
                    fighter.id.number(),
                    state.position.x,
                    state.position.y,
                    state.is_grounded,
                    state.is_falling,
                    state.speed
                );
            }
        }
    }

    let match_state = app.world().resource::<MatchState>();
    match match_state.winner {
        Some(winner) => println!("Match over, fighter {} wins", winner.number()),
        None => println!("Demo complete, no decision"),
    }
}

/// Battle platform and two fighters dropped in from above the edges.
fn setup_arena(mut commands: Commands) {
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(10.0, 0.25, 2.5),
        Friction::coefficient(0.0),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    spawn_fighter(
        &mut commands,
        FighterId::One,
        FighterConfig::default(),
        Vec3::new(8.0, 5.0, 0.0),
    );
    spawn_fighter(
        &mut commands,
        FighterId::Two,
        FighterConfig::default(),
        Vec3::new(-8.0, 5.0, 0.0),
    );
}

/// Holds "move left" for fighter one, forever.
fn scripted_input(mut moves: EventWriter<MoveIntent>, fighters: Query<(Entity, &Fighter)>) {
    for (entity, fighter) in fighters.iter() {
        if fighter.id == FighterId::One {
            moves.write(MoveIntent {
                fighter: entity,
                direction: MoveDirection::Left,
            });
        }
    }
}
