use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Grounded, Player};
use crate::config::GameConfig;

/// Classify grounded/airborne with a single downward ray, restricted to the
/// configured ground collision group and excluding the player's own collider.
/// Runs before the jump trigger and velocity integrator so both see a fresh
/// result. No hit (or no physics context yet) means airborne.
pub fn probe_ground(
    rapier: ReadRapierContext,
    cfg: Res<GameConfig>,
    mut q: Query<(Entity, &GlobalTransform, &mut Grounded), With<Player>>,
) {
    let Ok(ctx) = rapier.single() else {
        return;
    };
    let ground = Group::from_bits_truncate(cfg.movement.ground_group);
    for (entity, tf, mut grounded) in &mut q {
        let origin = tf.translation().truncate();
        let filter = QueryFilter::new()
            .exclude_collider(entity)
            .groups(CollisionGroups::new(Group::ALL, ground));
        let hit = ctx.cast_ray(origin, -Vec2::Y, cfg.movement.ground_ray_length, true, filter);
        grounded.0 = hit.is_some();
    }
}
