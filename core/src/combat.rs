use tracing::info;

use crate::constants::*;
use crate::events::SoundCue;
use crate::fighter::Fighter;
use crate::types::*;

/// What a call to `take_damage` did to the defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Dead, dodging or invulnerable.
    Ignored,
    Blocked,
    GuardBreak,
    Hit,
    Slam,
    Knockout,
}

pub struct MeleeHit {
    pub attacker: Side,
    pub victim: Side,
    pub outcome: DamageOutcome,
}

impl Fighter {
    /// Apply `amount` of damage coming from an attacker centred at `source_x`.
    pub fn take_damage(
        &mut self,
        amount: f64,
        kind: DamageKind,
        source_x: f64,
        config: &MatchConfig,
    ) -> DamageOutcome {
        if matches!(self.state, FighterState::Dead | FighterState::Dodge)
            || self.invulnerability_timer > 0
        {
            return DamageOutcome::Ignored;
        }

        let away = Facing::toward(source_x, self.center_x()).sign();

        let mut outcome = if self.state == FighterState::Block {
            self.block_damage += amount;
            if self.block_damage > GUARD_BREAK_THRESHOLD {
                self.health -= amount;
                self.block_damage = 0.0;
                self.transition(FighterState::Hurt);
                self.hurt_timer = GUARD_BREAK_STUN_TICKS;
                self.velocity = Vec2 {
                    x: away * GUARD_BREAK_KNOCKBACK_X,
                    y: GUARD_BREAK_KNOCKBACK_Y,
                };
                self.cue(SoundCue::GuardBreak);
                info!(side = ?self.side, health = self.health, "guard broken");
                DamageOutcome::GuardBreak
            } else {
                self.gain_energy(config.energy_gain_block, config.max_energy);
                self.health -= amount * CHIP_DAMAGE_RATIO;
                self.velocity.x = away * BLOCK_PUSHBACK;
                self.facing = Facing::toward(self.center_x(), source_x);
                self.action_timer = BLOCK_STUN_TICKS;
                self.cue(SoundCue::Block);
                DamageOutcome::Blocked
            }
        } else {
            self.health -= amount;
            self.gain_energy(config.energy_gain_take_hit, config.max_energy);

            let slam = if self.grounded {
                false
            } else {
                self.air_damage += amount;
                self.air_damage >= config.juggle_damage_cap
            };

            self.skill_startup = 0;
            self.transition(FighterState::Hurt);
            if slam {
                self.velocity = Vec2 {
                    x: away * KNOCKBACK_X,
                    y: SLAM_VELOCITY,
                };
                self.hurt_timer = SLAM_HURT_TICKS;
                self.knocked_down = true;
            } else {
                let (kx, ky) = match kind {
                    DamageKind::Heavy => (HEAVY_KNOCKBACK_X, HEAVY_KNOCKBACK_Y),
                    _ => (KNOCKBACK_X, KNOCKBACK_Y),
                };
                self.velocity = Vec2 { x: away * kx, y: ky };
                self.hurt_timer = HURT_TICKS;
            }

            self.hit_marker = Some(HitMarker {
                x: self.center_x(),
                y: self.position.y + self.height / 3.0,
                kind,
                ttl: HIT_MARKER_TICKS,
            });
            self.cue(match kind {
                DamageKind::Melee => SoundCue::Hit,
                DamageKind::Ranged => SoundCue::RangedHit,
                DamageKind::Heavy => SoundCue::HeavyHit,
            });

            if slam {
                DamageOutcome::Slam
            } else {
                DamageOutcome::Hit
            }
        };

        self.health = self.health.min(MAX_HEALTH);
        if self.health <= 0.0 {
            self.health = 0.0;
            self.transition(FighterState::Dead);
            info!(side = ?self.side, "knocked out");
            outcome = DamageOutcome::Knockout;
        }
        outcome
    }
}

/// Check one attacker's live hitbox against the defender's hurtbox. A
/// connecting swing is spent before damage is applied.
pub fn resolve_melee(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    config: &MatchConfig,
) -> Option<DamageOutcome> {
    let hitbox = attacker.hitbox_world()?;
    if !hitbox.overlaps(&defender.bounds()) {
        return None;
    }
    attacker.is_attacking = false;
    let (amount, kind) = if attacker.state() == FighterState::Ultimate {
        (ULTIMATE_DAMAGE, DamageKind::Heavy)
    } else {
        (MELEE_DAMAGE, DamageKind::Melee)
    };
    Some(defender.take_damage(amount, kind, attacker.center_x(), config))
}

/// Melee in both directions, P1's swing first.
pub fn resolve_melee_pair(fighters: &mut [Fighter; 2], config: &MatchConfig) -> Vec<MeleeHit> {
    let mut hits = Vec::new();
    let (left, right) = fighters.split_at_mut(1);
    let (p1, p2) = (&mut left[0], &mut right[0]);

    if let Some(outcome) = resolve_melee(p1, p2, config) {
        hits.push(MeleeHit {
            attacker: Side::P1,
            victim: Side::P2,
            outcome,
        });
    }
    if let Some(outcome) = resolve_melee(p2, p1, config) {
        hits.push(MeleeHit {
            attacker: Side::P2,
            victim: Side::P1,
            outcome,
        });
    }
    hits
}
