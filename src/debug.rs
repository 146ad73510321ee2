#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::prelude::*;

#[cfg(feature = "debug")]
use crate::components::{AnimatorParams, Facing, Grounded, Player};

pub struct DebugPlugin;

impl bevy::app::Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut bevy::app::App) {
        app.add_plugins(RapierDebugRenderPlugin::default())
            .add_systems(Update, (movement_log_system, debug_render_toggle));
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut bevy::app::App) {}
}

#[cfg(feature = "debug")]
fn movement_log_system(
    time: Res<Time>,
    mut accum: Local<f32>,
    q: Query<(&Transform, &Velocity, &Grounded, &Facing, &AnimatorParams), With<Player>>,
) {
    *accum += time.delta_secs();
    if *accum < 1.0 {
        return;
    }
    *accum = 0.0;
    for (tf, vel, grounded, facing, params) in &q {
        info!(
            target: "sim",
            "pos=({:.1},{:.1}) vel=({:.1},{:.1}) grounded={} facing={:?} anim=({:.1},{:.0})",
            tf.translation.x,
            tf.translation.y,
            vel.linvel.x,
            vel.linvel.y,
            grounded.0,
            facing,
            params.velocity_x,
            params.velocity_y,
        );
    }
}

#[cfg(feature = "debug")]
fn debug_render_toggle(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ctx: ResMut<DebugRenderContext>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        ctx.enabled = !ctx.enabled;
        info!("debug render {}", if ctx.enabled { "on" } else { "off" });
    }
}
