use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{AnimatorParams, Facing, Grounded, JumpState, MoveIntent, Player};
use crate::config::GameConfig;

/// Collision group the player collider belongs to. Ground geometry uses the
/// configured `movement.ground_group` bits instead.
pub const PLAYER_GROUP: Group = Group::GROUP_1;

pub struct SpawnPlugin;

impl Plugin for SpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_player, spawn_level));
    }
}

fn spawn_player(mut commands: Commands, cfg: Res<GameConfig>) {
    let (x, y) = cfg.level.player_start;
    let (hx, hy) = cfg.level.player_half_extents;
    commands.spawn((
        Player,
        Facing::default(),
        MoveIntent::default(),
        Grounded::default(),
        JumpState::default(),
        AnimatorParams::default(),
        Sprite {
            color: Color::srgb(0.9, 0.5, 0.2),
            custom_size: Some(Vec2::new(hx * 2.0, hy * 2.0)),
            ..default()
        },
        Transform::from_xyz(x, y, 1.0),
        RigidBody::Dynamic,
        Collider::cuboid(hx, hy),
        // A tipping character would invalidate the straight-down probe.
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        CollisionGroups::new(PLAYER_GROUP, Group::ALL),
    ));
}

fn spawn_level(mut commands: Commands, cfg: Res<GameConfig>) {
    let ground = Group::from_bits_truncate(cfg.movement.ground_group);
    for platform in &cfg.level.platforms {
        commands.spawn((
            Sprite {
                color: Color::srgb(0.25, 0.55, 0.3),
                custom_size: Some(Vec2::new(
                    platform.half_width * 2.0,
                    platform.half_height * 2.0,
                )),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(platform.half_width, platform.half_height),
            CollisionGroups::new(ground, Group::ALL),
        ));
    }
}
