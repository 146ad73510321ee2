use bevy::prelude::*;

use crate::components::{Facing, MoveIntent, Player};

pub struct FacingPlugin;

impl Plugin for FacingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_facing);
    }
}

/// Flip facing when the horizontal intent sign reverses across zero.
/// Positive intent while facing left flips right, negative intent while
/// facing right flips left; same-sign changes and zero intent do nothing.
pub fn update_facing(mut q: Query<(&MoveIntent, &mut Facing, &mut Transform), With<Player>>) {
    for (intent, mut facing, mut tf) in &mut q {
        if intent.0 > 0.0 && *facing == Facing::Left {
            face_direction(Facing::Right, &mut tf);
            *facing = Facing::Right;
        } else if intent.0 < 0.0 && *facing == Facing::Right {
            face_direction(Facing::Left, &mut tf);
            *facing = Facing::Left;
        }
    }
}

/// Mirror the sprite for horizontal facing by negating local scale x.
/// `Up`/`Down` are accepted values with no visual policy attached.
pub fn face_direction(direction: Facing, tf: &mut Transform) {
    match direction {
        Facing::Left | Facing::Right => {
            tf.scale.x = -tf.scale.x;
        }
        Facing::Up | Facing::Down => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_systems(Update, update_facing);
        let e = app
            .world_mut()
            .spawn((
                Player,
                MoveIntent(0.0),
                Facing::default(),
                Transform::default(),
            ))
            .id();
        (app, e)
    }

    fn set_intent(app: &mut App, e: Entity, v: f32) {
        app.world_mut().entity_mut(e).get_mut::<MoveIntent>().unwrap().0 = v;
    }

    fn state(app: &App, e: Entity) -> (Facing, f32) {
        let entity = app.world().entity(e);
        (*entity.get::<Facing>().unwrap(), entity.get::<Transform>().unwrap().scale.x)
    }

    #[test]
    fn reversal_flips_exactly_once() {
        let (mut app, e) = make_app();
        set_intent(&mut app, e, -1.0);
        app.update();
        assert_eq!(state(&app, e), (Facing::Left, -1.0));

        // Holding the same sign must not flip again.
        app.update();
        app.update();
        assert_eq!(state(&app, e), (Facing::Left, -1.0));

        set_intent(&mut app, e, 1.0);
        app.update();
        assert_eq!(state(&app, e), (Facing::Right, 1.0));
    }

    #[test]
    fn zero_intent_never_flips() {
        let (mut app, e) = make_app();
        set_intent(&mut app, e, 0.0);
        app.update();
        assert_eq!(state(&app, e), (Facing::Right, 1.0));
    }

    #[test]
    fn positive_intent_while_facing_right_is_noop() {
        let (mut app, e) = make_app();
        set_intent(&mut app, e, 1.0);
        app.update();
        assert_eq!(state(&app, e), (Facing::Right, 1.0));
    }

    #[test]
    fn vertical_directions_do_not_mirror() {
        let mut tf = Transform::default();
        face_direction(Facing::Up, &mut tf);
        face_direction(Facing::Down, &mut tf);
        assert_eq!(tf.scale.x, 1.0);
        face_direction(Facing::Left, &mut tf);
        assert_eq!(tf.scale.x, -1.0);
    }
}
