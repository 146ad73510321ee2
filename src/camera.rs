use bevy::prelude::*;

use crate::components::Player;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player);
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}

/// Track the player horizontally so the level scrolls; vertical framing stays
/// fixed.
fn follow_player(
    q_player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut q_cam: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    for mut cam in &mut q_cam {
        cam.translation.x = player.translation.x;
    }
}
