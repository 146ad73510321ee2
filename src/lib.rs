pub mod animation;
pub mod camera;
pub mod components;
pub mod config;
pub mod debug;
pub mod facing;
pub mod game;
pub mod ground;
pub mod input;
pub mod jump;
pub mod movement;
pub mod physics;
pub mod spawn;
pub mod system_order;

// Curated re-exports
pub use components::{AnimatorParams, Facing, Grounded, JumpState, MoveIntent, Player};
pub use config::{GameConfig, MovementConfig, WindowConfig};
pub use game::GamePlugin;
pub use input::KeyBindings;
