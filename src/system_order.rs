//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (ground probe, jump trigger, manual velocity edits before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (animation bridge, lightweight post-physics reads)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // state decided before the physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // reads/corrections after physics
