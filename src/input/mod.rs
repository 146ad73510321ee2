pub mod parse;

use bevy::prelude::*;

use crate::components::{JumpState, MoveIntent, Player};
use parse::parse_bindings_toml;

/// Keyboard bindings for the three movement actions. Loaded from TOML at
/// startup; any action the file leaves out keeps its default keys.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp],
        }
    }
}

impl KeyBindings {
    /// Signed horizontal axis: +1 right, -1 left, 0 when neither or both.
    pub fn axis(&self, keyboard: &ButtonInput<KeyCode>) -> f32 {
        let mut axis = 0.0;
        if self.move_right.iter().any(|k| keyboard.pressed(*k)) {
            axis += 1.0;
        }
        if self.move_left.iter().any(|k| keyboard.pressed(*k)) {
            axis -= 1.0;
        }
        axis
    }

    pub fn jump_just_pressed(&self, keyboard: &ButtonInput<KeyCode>) -> bool {
        self.jump.iter().any(|k| keyboard.just_pressed(*k))
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSampleSet;

pub struct InputSamplerPlugin;

impl Plugin for InputSamplerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .configure_sets(PreUpdate, InputSampleSet.after(bevy::input::InputSystem))
            .add_systems(PreStartup, load_key_bindings)
            .add_systems(PreUpdate, sample_input.in_set(InputSampleSet));
    }
}

fn load_key_bindings(mut commands: Commands) {
    let path =
        std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into());
    let raw = std::fs::read_to_string(&path).unwrap_or_default();
    let parsed = parse_bindings_toml(&raw);
    for e in &parsed.errors {
        error!("input bindings: {e}");
    }
    info!(
        "Input bindings loaded: {} left / {} right / {} jump keys",
        parsed.bindings.move_left.len(),
        parsed.bindings.move_right.len(),
        parsed.bindings.jump.len()
    );
    commands.insert_resource(parsed.bindings);
}

/// Once per frame: rewrite the horizontal intent from the pressed key sets
/// and latch a pending jump request on jump key-down. The request survives
/// until the jump trigger consumes it at the next physics-ordered step.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut q: Query<(&mut MoveIntent, &mut JumpState), With<Player>>,
) {
    let axis = bindings.axis(&keyboard);
    let jump_down = bindings.jump_just_pressed(&keyboard);
    for (mut intent, mut jump) in &mut q {
        intent.0 = axis;
        if jump_down {
            jump.requested = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<KeyBindings>()
            .add_systems(Update, sample_input);
        app.world_mut()
            .spawn((Player, MoveIntent::default(), JumpState::default()));
        app
    }

    fn player_state(app: &mut App) -> (f32, bool) {
        let mut q = app
            .world_mut()
            .query_filtered::<(&MoveIntent, &JumpState), With<Player>>();
        let (intent, jump) = q.single(app.world()).expect("player exists");
        (intent.0, jump.requested)
    }

    #[test]
    fn axis_from_pressed_keys() {
        let mut app = make_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.update();
        assert_eq!(player_state(&mut app).0, 1.0);

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::ArrowLeft);
        app.update();
        // Opposing keys cancel out.
        assert_eq!(player_state(&mut app).0, 0.0);
    }

    #[test]
    fn jump_request_latches_until_consumed() {
        let mut app = make_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();
        assert!(player_state(&mut app).1);

        // Key released on a later frame; nothing clears the latch but the
        // jump trigger.
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::Space);
        keys.clear();
        app.update();
        assert!(player_state(&mut app).1);
    }
}
