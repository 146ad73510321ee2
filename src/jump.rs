use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Grounded, JumpState, Player};
use crate::config::GameConfig;

/// Consume the pending jump request recorded by the input sampler. The flag
/// clears whether or not the jump fires: a request made while airborne is
/// dropped, not retried (single-attempt semantics). Grounded requests apply
/// the configured jump strength as an instantaneous upward velocity change,
/// so the kick and the integrator's horizontal write reach the physics body
/// as one velocity update.
pub fn trigger_jump(
    cfg: Res<GameConfig>,
    mut q: Query<(&Grounded, &mut JumpState, &mut Velocity), With<Player>>,
) {
    for (grounded, mut jump, mut vel) in &mut q {
        if !jump.requested {
            continue;
        }
        jump.requested = false;
        if grounded.0 {
            vel.linvel.y = cfg.movement.jump_height;
        }
    }
}
