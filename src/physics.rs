use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & world gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .add_systems(Startup, configure_gravity);
    }
}

fn configure_gravity(game_cfg: Res<GameConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut rapier_cfg {
        cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
}
