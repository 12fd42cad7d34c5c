use crate::constants::*;
use crate::fighter::Fighter;
use crate::types::*;

/// Translate one tick of controller state into fighter intents.
///
/// Held buttons drive walking and guard; pressed buttons fire one-shot
/// intents in a fixed order: dodge, jump, attack, ultimate, teleport, skill.
/// Dodge goes first so its exclusivity rejects same-tick actions.
pub fn apply_player_input(
    f: &mut Fighter,
    input: &PlayerInput,
    opponent_x: f64,
    config: &MatchConfig,
) {
    let state = f.state();
    if !state.is_input_locked() && state != FighterState::Dodge {
        f.block(input.is_held(button::BLOCK));
        if f.state() == FighterState::Block {
            f.facing = Facing::toward(f.center_x(), opponent_x);
        } else {
            f.velocity.x = 0.0;
            if input.is_held(button::MOVE_LEFT) {
                f.velocity.x = -WALK_SPEED;
                f.facing = Facing::Left;
            }
            if input.is_held(button::MOVE_RIGHT) {
                f.velocity.x = WALK_SPEED;
                f.facing = Facing::Right;
            }
        }
    }

    if input.was_pressed(button::DODGE) {
        f.dodge(config);
    }
    if input.was_pressed(button::JUMP) {
        f.attempt_jump();
    }
    if input.was_pressed(button::ATTACK) {
        f.attack(config);
    }
    if input.was_pressed(button::ULTIMATE) {
        f.ultimate(config);
    }
    if input.was_pressed(button::TELEPORT) {
        f.teleport(config);
    }
    if input.was_pressed(button::SKILL) {
        f.trigger_skill();
    }
}
