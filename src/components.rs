use bevy::prelude::*;

/// The controlled character.
#[derive(Component)]
pub struct Player;

/// Logical direction the sprite currently presents visually.
///
/// Only `Left`/`Right` mirror the sprite; `Up`/`Down` are accepted by the
/// facing logic but produce no visual change.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// Signed horizontal move intent in [-1, 1], rewritten by the input sampler
/// each frame.
#[derive(Component, Debug, Deref, DerefMut, Default, Clone, Copy)]
pub struct MoveIntent(pub f32);

/// Result of the downward ground probe, rewritten each physics-ordered step.
/// No hit means airborne, never an error.
#[derive(Component, Debug, Deref, DerefMut, Default, Clone, Copy)]
pub struct Grounded(pub bool);

/// One-frame pending jump flag. Set on key-down, consumed (and always
/// cleared) at the next physics-ordered step.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct JumpState {
    pub requested: bool,
}

/// Write-only animation parameter table pushed by the animation bridge.
/// Movement logic never reads these back.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimatorParams {
    /// Absolute horizontal speed while grounded, untouched while airborne.
    pub velocity_x: f32,
    /// 0 while grounded, sign of vertical velocity (+/-1) while airborne.
    pub velocity_y: f32,
    pub grounded: bool,
}
