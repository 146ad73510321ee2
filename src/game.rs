use bevy::prelude::*;

use crate::animation::push_animator_params;
use crate::camera::CameraPlugin;
use crate::debug::DebugPlugin;
use crate::facing::FacingPlugin;
use crate::ground::probe_ground;
use crate::input::InputSamplerPlugin;
use crate::jump::trigger_jump;
use crate::movement::integrate_velocity;
use crate::physics::PhysicsSetupPlugin;
use crate::spawn::SpawnPlugin;
use crate::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            InputSamplerPlugin,
            FacingPlugin,
            SpawnPlugin,
            DebugPlugin,
        ))
        // The probe must be fresh before the jump decision and the velocity
        // write; the animation bridge reads whatever state results.
        .add_systems(
            Update,
            (probe_ground, trigger_jump, integrate_velocity)
                .chain()
                .in_set(PrePhysicsSet),
        )
        .add_systems(Update, push_animator_params.in_set(PostPhysicsAdjustSet));
    }
}
