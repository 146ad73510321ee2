use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{MoveIntent, Player};
use crate::config::GameConfig;

/// Overwrite horizontal velocity with `intent * run_speed` each
/// physics-ordered step. Vertical velocity is inherited from gravity and
/// impulses and never touched here. Direct assignment, no smoothing.
pub fn integrate_velocity(
    cfg: Res<GameConfig>,
    mut q: Query<(&MoveIntent, &mut Velocity), With<Player>>,
) {
    for (intent, mut vel) in &mut q {
        vel.linvel.x = intent.0 * cfg.movement.run_speed;
    }
}
