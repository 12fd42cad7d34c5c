use crate::fighter::Fighter;
use crate::prng::{Mulberry32, RandomSource};
use crate::types::*;

const BLOCK_RANGE: f64 = 120.0;
const BLOCK_CHANCE: f64 = 0.6;
const CHASE_RANGE: f64 = 150.0;
const SKILL_RANGE: f64 = 300.0;
const SKILL_CHANCE: f64 = 0.02;
const ATTACK_BAND: f64 = 0.03;
const ULTIMATE_BAND: f64 = 0.035;
const DODGE_BAND: f64 = 0.045;
const JUMP_CHANCE: f64 = 0.01;

/// CPU opponent. Reads both fighters and produces the same per-tick input a
/// human controller would.
#[derive(Clone, Debug)]
pub struct AiController<R = Mulberry32> {
    rng: R,
}

impl AiController<Mulberry32> {
    pub fn seeded(seed: Seed) -> Self {
        AiController {
            rng: Mulberry32::new(seed),
        }
    }
}

impl<R: RandomSource> AiController<R> {
    pub fn new(rng: R) -> Self {
        AiController { rng }
    }

    pub fn decide(&mut self, me: &Fighter, opponent: &Fighter, config: &MatchConfig) -> PlayerInput {
        if me.is_dead() {
            return NULL_INPUT;
        }

        let dist = (me.position.x - opponent.position.x).abs();
        let forward = if me.position.x < opponent.position.x {
            button::MOVE_RIGHT
        } else {
            button::MOVE_LEFT
        };
        let facing_forward = Facing::toward(me.position.x, opponent.position.x);

        if opponent.is_attacking
            && dist < BLOCK_RANGE
            && me.grounded
            && self.rng.chance(BLOCK_CHANCE)
        {
            return PlayerInput {
                held: button::BLOCK,
                pressed: 0,
            };
        }

        let mut input = NULL_INPUT;
        if dist > SKILL_RANGE && self.rng.chance(SKILL_CHANCE) {
            input.pressed |= button::SKILL;
        }

        let busy = matches!(
            me.state(),
            FighterState::Hurt | FighterState::Block | FighterState::Skill | FighterState::Ultimate
        );
        if !busy {
            if dist > CHASE_RANGE {
                input.held |= forward;
            } else {
                if me.facing != facing_forward {
                    input.held |= forward;
                }
                let roll = self.rng.next_f64();
                if roll < ATTACK_BAND {
                    input.pressed |= button::ATTACK;
                } else if roll < ULTIMATE_BAND && me.energy() >= config.ultimate_cost {
                    input.pressed |= button::ULTIMATE;
                } else if roll < DODGE_BAND {
                    input.pressed |= button::DODGE;
                }
            }
        }

        if !busy && me.grounded && self.rng.chance(JUMP_CHANCE) {
            input.pressed |= button::JUMP;
        }

        input
    }
}
