//! TOML key-binding parser. Errors are collected, never fatal: an unknown
//! key name is skipped and the action falls back to its defaults if the file
//! leaves it with no usable keys.
use bevy::prelude::*;

use super::KeyBindings;

#[derive(Debug, Default)]
pub struct ParsedBindings {
    pub bindings: KeyBindings,
    pub errors: Vec<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct BindingsToml {
    move_left: Option<Vec<String>>,
    move_right: Option<Vec<String>>,
    jump: Option<Vec<String>>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    bindings: Option<BindingsToml>,
}

pub fn parse_bindings_toml(raw: &str) -> ParsedBindings {
    let mut result = ParsedBindings::default();
    if raw.trim().is_empty() {
        return result;
    }
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("top-level parse: {e}"));
            return result;
        }
    };
    let Some(bindings) = root.bindings else {
        return result;
    };
    apply(&mut result.bindings.move_left, "move_left", bindings.move_left, &mut result.errors);
    apply(&mut result.bindings.move_right, "move_right", bindings.move_right, &mut result.errors);
    apply(&mut result.bindings.jump, "jump", bindings.jump, &mut result.errors);
    result
}

fn apply(target: &mut Vec<KeyCode>, action: &str, names: Option<Vec<String>>, errors: &mut Vec<String>) {
    let Some(names) = names else { return };
    let mut keys = Vec::with_capacity(names.len());
    for name in &names {
        match parse_keycode(name) {
            Ok(kc) => keys.push(kc),
            Err(e) => errors.push(format!("[{action}] {e}")),
        }
    }
    if keys.is_empty() {
        errors.push(format!("[{action}] no usable keys, keeping defaults"));
    } else {
        *target = keys;
    }
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    use bevy::input::keyboard::KeyCode::*;
    let kc = match name {
        "Space" => Space,
        "A" | "KeyA" => KeyA,
        "D" | "KeyD" => KeyD,
        "W" | "KeyW" => KeyW,
        "S" | "KeyS" => KeyS,
        "Left" | "ArrowLeft" => ArrowLeft,
        "Right" | "ArrowRight" => ArrowRight,
        "Up" | "ArrowUp" => ArrowUp,
        "Down" | "ArrowDown" => ArrowDown,
        "ShiftLeft" => ShiftLeft,
        "ControlLeft" => ControlLeft,
        "Enter" => Enter,
        other => return Err(format!("unsupported key name '{other}' (extend parser)")),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults() {
        let parsed = parse_bindings_toml(
            r#"
            [bindings]
            move_left = ["A"]
            jump = ["Enter", "Space"]
            "#,
        );
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(parsed.bindings.move_left, vec![KeyCode::KeyA]);
        assert_eq!(parsed.bindings.jump, vec![KeyCode::Enter, KeyCode::Space]);
        // Untouched action keeps defaults.
        assert_eq!(parsed.bindings.move_right, KeyBindings::default().move_right);
    }

    #[test]
    fn unknown_key_is_skipped_not_fatal() {
        let parsed = parse_bindings_toml(
            r#"
            [bindings]
            jump = ["Hyperspace", "Space"]
            "#,
        );
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.bindings.jump, vec![KeyCode::Space]);
    }

    #[test]
    fn all_keys_unknown_keeps_defaults() {
        let parsed = parse_bindings_toml(
            r#"
            [bindings]
            move_right = ["Warp9"]
            "#,
        );
        assert_eq!(parsed.bindings.move_right, KeyBindings::default().move_right);
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn empty_input_is_defaults() {
        let parsed = parse_bindings_toml("");
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.bindings.jump, KeyBindings::default().jump);
    }
}
