use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{AnimatorParams, Grounded, Player};

/// One-way push of movement state into the animator parameter table, after
/// the physics step. Grounded: `grounded=true`, zero vertical parameter and
/// the absolute horizontal speed. Airborne: `grounded=false` and the sign of
/// the vertical velocity. Nothing here is read back by movement logic.
pub fn push_animator_params(
    mut q: Query<(&Grounded, &Velocity, &mut AnimatorParams), With<Player>>,
) {
    for (grounded, vel, mut params) in &mut q {
        if grounded.0 != params.grounded {
            info!(
                target: "animator",
                "state -> {}",
                if grounded.0 { "Grounded" } else { "Airborne" }
            );
        }
        if grounded.0 {
            params.grounded = true;
            params.velocity_y = 0.0;
            params.velocity_x = vel.linvel.x.abs();
        } else {
            params.grounded = false;
            params.velocity_y = vel.linvel.y.signum();
        }
    }
}
