use crate::constants::*;
use crate::events::SoundCue;
use crate::physics::move_and_collide;
use crate::projectiles::ProjectileSpawn;
use crate::types::*;

/// One combatant. All state changes go through the intent methods, `update`
/// and `take_damage`; the discrete state is only written by `transition`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fighter {
    pub side: Side,
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
    pub facing: Facing,
    pub color: String,
    pub(crate) health: f64,
    pub(crate) energy: f64,
    pub(crate) state: FighterState,

    // Animation
    pub anim_frame: u32,
    pub anim_ticks: u32,

    // Attack
    pub is_attacking: bool,
    pub hitbox: Hitbox,
    pub combo_step: u8,

    // Timers, all counting down in ticks
    pub action_timer: u32,
    pub hurt_timer: u32,
    pub dodge_timer: u32,
    pub dodge_cooldown: u32,
    pub attack_cooldown: u32,
    pub invulnerability_timer: u32,
    pub skill_startup: u32,
    pub jump_buffer: u32,
    pub teleport_lock: u32,

    // Movement
    pub grounded: bool,
    pub jump_count: u8,

    // Damage tracking
    pub air_damage: f64,
    pub block_damage: f64,
    pub knocked_down: bool,
    pub hit_marker: Option<HitMarker>,

    pending_spawns: Vec<ProjectileSpawn>,
    cues: Vec<SoundCue>,
}

impl Fighter {
    pub fn new(side: Side, x: f64, y: f64, facing: Facing, config: &MatchConfig) -> Fighter {
        let color = match side {
            Side::P1 => "#3b82f6",
            Side::P2 => "#ef4444",
        };
        Fighter {
            side,
            position: Vec2 { x, y },
            velocity: Vec2::default(),
            width: config.fighter_width,
            height: config.fighter_height,
            facing,
            color: color.to_string(),
            health: MAX_HEALTH,
            energy: 0.0,
            state: FighterState::Idle,
            anim_frame: 0,
            anim_ticks: 0,
            is_attacking: false,
            hitbox: Hitbox::NONE,
            combo_step: 0,
            action_timer: 0,
            hurt_timer: 0,
            dodge_timer: 0,
            dodge_cooldown: 0,
            attack_cooldown: 0,
            invulnerability_timer: 0,
            skill_startup: 0,
            jump_buffer: 0,
            teleport_lock: 0,
            grounded: false,
            jump_count: 0,
            air_damage: 0.0,
            block_damage: 0.0,
            knocked_down: false,
            hit_marker: None,
            pending_spawns: Vec::new(),
            cues: Vec::new(),
        }
    }

    // ── Read access ─────────────────────────────────────────

    pub fn state(&self) -> FighterState {
        self.state
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn is_dead(&self) -> bool {
        self.state == FighterState::Dead
    }

    pub fn center_x(&self) -> f64 {
        self.position.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.position.y + self.height / 2.0
    }

    /// Hurtbox: the fixed bounding box, independent of state.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.width,
            height: self.height,
        }
    }

    /// World-space hitbox, mirrored across facing. `None` unless live.
    pub fn hitbox_world(&self) -> Option<Rect> {
        if !self.is_attacking || self.hitbox.width <= 0.0 {
            return None;
        }
        let x = match self.facing {
            Facing::Right => self.position.x + self.hitbox.offset.x,
            Facing::Left => {
                self.position.x - self.hitbox.width + (self.width - self.hitbox.offset.x)
            }
        };
        Some(Rect {
            x,
            y: self.position.y + self.hitbox.offset.y,
            width: self.hitbox.width,
            height: self.hitbox.height,
        })
    }

    // ── Controlled mutation ─────────────────────────────────

    /// The single entry point for state changes. Dead is terminal.
    pub fn transition(&mut self, to: FighterState) {
        if self.state == FighterState::Dead {
            return;
        }
        let from = self.state;
        self.state = to;
        self.anim_frame = 0;
        self.anim_ticks = 0;
        if from == FighterState::Attack && to != FighterState::Attack {
            self.combo_step = 0;
        }
        if !to.keeps_hitbox() {
            self.hitbox = Hitbox::NONE;
            self.is_attacking = false;
        }
    }

    pub fn gain_energy(&mut self, amount: f64, max_energy: f64) {
        self.energy = (self.energy + amount).clamp(0.0, max_energy);
    }

    /// Overwrite health, clamped to range. A zero value kills the fighter.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, MAX_HEALTH);
        if self.health <= 0.0 {
            self.transition(FighterState::Dead);
        }
    }

    pub(crate) fn cue(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn drain_spawns(&mut self) -> Vec<ProjectileSpawn> {
        std::mem::take(&mut self.pending_spawns)
    }

    // ── Intents ─────────────────────────────────────────────

    /// Buffers a jump; velocity changes when `update` consumes the buffer.
    pub fn attempt_jump(&mut self) {
        if self.is_dead() {
            return;
        }
        self.jump_buffer = JUMP_BUFFER_TICKS;
    }

    pub fn attack(&mut self, config: &MatchConfig) {
        if self.teleport_lock > 0 {
            return;
        }
        let chain =
            self.state == FighterState::Attack && self.combo_step == 1 && self.action_timer > 0;
        if !chain {
            let allowed = matches!(
                self.state,
                FighterState::Idle | FighterState::Walk | FighterState::Jump | FighterState::Crouch
            );
            if !allowed || self.attack_cooldown > 0 {
                return;
            }
        }

        if chain {
            self.combo_step = 2;
            self.anim_frame = 2;
            self.anim_ticks = 0;
        } else {
            self.transition(FighterState::Attack);
            self.combo_step = 1;
        }
        self.is_attacking = true;
        self.hitbox = Hitbox {
            offset: Vec2 {
                x: ATTACK_HITBOX_OFFSET_X,
                y: ATTACK_HITBOX_OFFSET_Y,
            },
            width: ATTACK_HITBOX_WIDTH,
            height: ATTACK_HITBOX_HEIGHT,
        };
        self.action_timer = ATTACK_ACTION_TICKS;
        self.attack_cooldown = ATTACK_COOLDOWN_TICKS;
        self.gain_energy(config.energy_gain_hit, config.max_energy);
        if self.grounded {
            self.velocity.x += self.facing.sign() * ATTACK_NUDGE;
        }
        self.cue(SoundCue::Attack);
    }

    pub fn trigger_skill(&mut self) {
        if self.teleport_lock > 0 || !self.state.is_free() {
            return;
        }
        self.transition(FighterState::Skill);
        self.action_timer = SKILL_ACTION_TICKS;
        self.skill_startup = SKILL_STARTUP_TICKS;
        self.velocity = Vec2::default();
        self.cue(SoundCue::Skill);
    }

    pub fn ultimate(&mut self, config: &MatchConfig) {
        if self.teleport_lock > 0 || !self.state.is_free() || self.energy < config.ultimate_cost {
            return;
        }
        self.energy -= config.ultimate_cost;
        self.transition(FighterState::Ultimate);
        self.is_attacking = true;
        self.hitbox = Hitbox {
            offset: Vec2 {
                x: ULTIMATE_HITBOX_OFFSET,
                y: ULTIMATE_HITBOX_OFFSET,
            },
            width: ULTIMATE_HITBOX_SIZE,
            height: ULTIMATE_HITBOX_SIZE,
        };
        self.action_timer = ULTIMATE_ACTION_TICKS;
        self.skill_startup = ULTIMATE_STARTUP_TICKS;
        self.velocity = Vec2::default();
        self.cue(SoundCue::Ultimate);
    }

    pub fn teleport(&mut self, config: &MatchConfig) {
        if self.teleport_lock > 0 || !self.state.is_free() {
            return;
        }
        let target = self.position.x + self.facing.sign() * TELEPORT_DISTANCE;
        self.position.x = target.clamp(0.0, config.world_width - self.width);
        self.teleport_lock = TELEPORT_LOCK_TICKS;
    }

    pub fn dodge(&mut self, config: &MatchConfig) {
        if !self.grounded
            || matches!(self.state, FighterState::Hurt | FighterState::Dead)
            || self.dodge_cooldown > 0
        {
            return;
        }
        self.transition(FighterState::Dodge);
        self.skill_startup = 0;
        self.dodge_timer = config.dodge_duration;
        self.dodge_cooldown = config.dodge_cooldown;
    }

    /// Hold or release guard. Release is ignored during block stun.
    pub fn block(&mut self, active: bool) {
        if active {
            let barred = matches!(
                self.state,
                FighterState::Block
                    | FighterState::Hurt
                    | FighterState::Dead
                    | FighterState::Attack
                    | FighterState::Ultimate
                    | FighterState::Skill
                    | FighterState::Dodge
            );
            if barred || !self.grounded {
                return;
            }
            self.transition(FighterState::Block);
            self.velocity.x = 0.0;
        } else if self.state == FighterState::Block && self.action_timer == 0 {
            self.transition(FighterState::Idle);
        }
    }

    // ── Per-tick update ─────────────────────────────────────

    pub fn update(&mut self, config: &MatchConfig) {
        self.tick_timers();

        if self.state == FighterState::Dodge {
            self.update_dodge(config);
            return;
        }

        if self.state != FighterState::Block {
            self.block_damage = (self.block_damage - BLOCK_DECAY_RATE).max(0.0);
        }

        self.update_startup();
        move_and_collide(self, config);
        self.consume_jump_buffer();
        self.recover(config);
        self.classify();
    }

    fn tick_timers(&mut self) {
        self.anim_ticks += 1;
        if self.state == FighterState::Attack && self.anim_ticks == ATTACK_ACTION_TICKS / 2 {
            self.anim_frame += 1;
        }

        self.action_timer = self.action_timer.saturating_sub(1);
        self.hurt_timer = self.hurt_timer.saturating_sub(1);
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.dodge_cooldown = self.dodge_cooldown.saturating_sub(1);
        self.invulnerability_timer = self.invulnerability_timer.saturating_sub(1);
        self.teleport_lock = self.teleport_lock.saturating_sub(1);

        if let Some(marker) = self.hit_marker.as_mut() {
            marker.ttl = marker.ttl.saturating_sub(1);
            if marker.ttl == 0 {
                self.hit_marker = None;
            }
        }
    }

    fn update_dodge(&mut self, config: &MatchConfig) {
        self.dodge_timer = self.dodge_timer.saturating_sub(1);
        self.velocity.x = self.facing.sign() * DODGE_SPEED;
        move_and_collide(self, config);
        if self.dodge_timer == 0 {
            self.transition(FighterState::Idle);
            self.velocity = Vec2::default();
        }
    }

    fn update_startup(&mut self) {
        if self.skill_startup == 0 {
            return;
        }
        self.skill_startup -= 1;
        if self.skill_startup > 0 {
            return;
        }
        match self.state {
            FighterState::Skill => self.fire_energy_bolts(),
            FighterState::Ultimate => self.fire_beam(),
            _ => {}
        }
    }

    fn fire_energy_bolts(&mut self) {
        let dir = self.facing.sign();
        let x = self.center_x() + dir * self.width / 2.0;
        let y = self.center_y();
        for dy in [-ENERGY_BOLT_SPREAD, ENERGY_BOLT_SPREAD] {
            self.pending_spawns.push(ProjectileSpawn {
                kind: ProjectileKind::Energy,
                x,
                y: y + dy,
                vx: dir * ENERGY_BOLT_SPEED,
                vy: 0.0,
                width: ENERGY_BOLT_SIZE,
                height: ENERGY_BOLT_SIZE,
                damage: ENERGY_BOLT_DAMAGE,
                facing: self.facing,
            });
        }
    }

    fn fire_beam(&mut self) {
        let dir = self.facing.sign();
        self.pending_spawns.push(ProjectileSpawn {
            kind: ProjectileKind::Beam,
            x: self.center_x() + dir * (self.width / 2.0 + BEAM_WIDTH / 2.0),
            y: self.center_y(),
            vx: 0.0,
            vy: 0.0,
            width: BEAM_WIDTH,
            height: BEAM_HEIGHT,
            damage: BEAM_DAMAGE,
            facing: self.facing,
        });
    }

    fn consume_jump_buffer(&mut self) {
        if self.jump_buffer == 0 {
            return;
        }
        self.jump_buffer -= 1;
        if self.state.is_input_locked() {
            return;
        }
        if self.grounded {
            self.velocity.y = JUMP_VELOCITY;
            self.jump_count = 1;
            self.grounded = false;
        } else if self.jump_count < MAX_JUMPS {
            self.velocity.y = DOUBLE_JUMP_VELOCITY;
            self.jump_count = MAX_JUMPS;
        } else {
            return;
        }
        self.jump_buffer = 0;
        // An air attack keeps its swing frames; everything else restarts the jump animation.
        if self.state != FighterState::Attack {
            self.transition(FighterState::Jump);
        }
        self.cue(SoundCue::Jump);
    }

    fn recover(&mut self, config: &MatchConfig) {
        if self.state == FighterState::Hurt && self.hurt_timer == 0 {
            self.transition(FighterState::Idle);
            if self.grounded {
                self.invulnerability_timer = config.wakeup_invulnerability;
            }
        }
        if self.state.is_action_locked() && self.action_timer == 0 {
            self.is_attacking = false;
            self.transition(FighterState::Idle);
            self.combo_step = 0;
        }
    }

    fn classify(&mut self) {
        if !self.state.is_free() {
            return;
        }
        let next = if self.velocity.y != 0.0 {
            FighterState::Jump
        } else if self.velocity.x.abs() > WALK_THRESHOLD {
            FighterState::Walk
        } else {
            FighterState::Idle
        };
        if next != self.state {
            self.transition(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::default_config;

    fn grounded_fighter(config: &MatchConfig) -> Fighter {
        let mut f = Fighter::new(
            Side::P1,
            1000.0,
            config.ground_y - config.fighter_height,
            Facing::Right,
            config,
        );
        f.grounded = true;
        f
    }

    #[test]
    fn attack_starts_combo_and_grants_energy() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attack(&config);
        assert_eq!(f.state(), FighterState::Attack);
        assert_eq!(f.combo_step, 1);
        assert_eq!(f.anim_frame, 0);
        assert!(f.is_attacking);
        assert_eq!(f.energy(), ENERGY_GAIN_HIT);
        assert_eq!(f.velocity.x, ATTACK_NUDGE);
        assert!(f.hitbox_world().is_some());
    }

    #[test]
    fn attack_chains_into_second_hit() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attack(&config);
        f.update(&config);
        f.attack(&config);
        assert_eq!(f.state(), FighterState::Attack);
        assert_eq!(f.combo_step, 2);
        assert_eq!(f.anim_frame, 2);
        assert_eq!(f.action_timer, ATTACK_ACTION_TICKS);
    }

    #[test]
    fn third_attack_waits_for_cooldown() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attack(&config);
        f.attack(&config);
        let energy = f.energy();
        f.attack(&config);
        assert_eq!(f.combo_step, 2);
        assert_eq!(f.energy(), energy);
    }

    #[test]
    fn attack_recovers_to_idle_and_resets_combo() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attack(&config);
        for _ in 0..ATTACK_ACTION_TICKS + 5 {
            f.update(&config);
        }
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.combo_step, 0);
        assert!(!f.is_attacking);
        assert_eq!(f.hitbox, Hitbox::NONE);
    }

    #[test]
    fn attack_rejected_while_hurt() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.transition(FighterState::Hurt);
        f.hurt_timer = 10;
        f.attack(&config);
        assert_eq!(f.state(), FighterState::Hurt);
        assert_eq!(f.energy(), 0.0);
    }

    #[test]
    fn leaving_attack_clears_hitbox() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attack(&config);
        f.transition(FighterState::Hurt);
        assert_eq!(f.combo_step, 0);
        assert!(f.hitbox_world().is_none());
    }

    #[test]
    fn left_facing_hitbox_is_mirrored() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.facing = Facing::Left;
        f.attack(&config);
        let hb = f.hitbox_world().expect("live hitbox");
        assert_eq!(
            hb.x,
            f.position.x - ATTACK_HITBOX_WIDTH + (f.width - ATTACK_HITBOX_OFFSET_X)
        );
        assert!(hb.x < f.position.x);
    }

    #[test]
    fn ultimate_requires_energy() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.gain_energy(99.0, config.max_energy);
        f.ultimate(&config);
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.energy(), 99.0);
    }

    #[test]
    fn ultimate_fires_one_beam_after_startup() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.gain_energy(100.0, config.max_energy);
        f.ultimate(&config);
        assert_eq!(f.energy(), 0.0);
        assert_eq!(f.state(), FighterState::Ultimate);
        for _ in 0..ULTIMATE_STARTUP_TICKS - 1 {
            f.update(&config);
            assert!(f.drain_spawns().is_empty());
        }
        f.update(&config);
        let spawns = f.drain_spawns();
        assert_eq!(spawns.len(), 1);
        assert_eq!(spawns[0].kind, ProjectileKind::Beam);
        for _ in 0..10 {
            f.update(&config);
            assert!(f.drain_spawns().is_empty());
        }
    }

    #[test]
    fn skill_fires_two_offset_bolts() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.velocity.x = 5.0;
        f.trigger_skill();
        assert_eq!(f.velocity.x, 0.0);
        for _ in 0..SKILL_STARTUP_TICKS {
            f.update(&config);
        }
        let spawns = f.drain_spawns();
        assert_eq!(spawns.len(), 2);
        assert!(spawns.iter().all(|s| s.kind == ProjectileKind::Energy && s.vx > 0.0));
        assert_eq!(spawns[1].y - spawns[0].y, 2.0 * ENERGY_BOLT_SPREAD);
    }

    #[test]
    fn skill_not_allowed_from_block() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.block(true);
        f.trigger_skill();
        assert_eq!(f.state(), FighterState::Block);
    }

    #[test]
    fn teleport_moves_and_clamps() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.teleport(&config);
        assert_eq!(f.position.x, 1000.0 + TELEPORT_DISTANCE);

        let mut edge = grounded_fighter(&config);
        edge.position.x = config.world_width - edge.width - 10.0;
        edge.teleport(&config);
        assert_eq!(edge.position.x, config.world_width - edge.width);
    }

    #[test]
    fn teleport_lock_blocks_actions() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.teleport(&config);
        let x = f.position.x;
        f.teleport(&config);
        f.attack(&config);
        assert_eq!(f.position.x, x);
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn dodge_is_exclusive_and_expires() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.dodge(&config);
        assert_eq!(f.state(), FighterState::Dodge);
        f.attack(&config);
        assert_eq!(f.state(), FighterState::Dodge);
        assert!(f.hitbox_world().is_none());

        let start = f.position.x;
        f.update(&config);
        assert!(f.position.x > start);

        for _ in 0..config.dodge_duration {
            f.update(&config);
        }
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.velocity, Vec2::default());
    }

    #[test]
    fn dodge_respects_cooldown_and_ground() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.dodge_cooldown = 5;
        f.dodge(&config);
        assert_eq!(f.state(), FighterState::Idle);

        let mut air = grounded_fighter(&config);
        air.grounded = false;
        air.dodge(&config);
        assert_eq!(air.state(), FighterState::Idle);
    }

    #[test]
    fn block_hold_and_release() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.velocity.x = 7.0;
        f.block(true);
        assert_eq!(f.state(), FighterState::Block);
        assert_eq!(f.velocity.x, 0.0);
        f.block(false);
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn block_needs_ground() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.grounded = false;
        f.block(true);
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn block_damage_decays_when_not_blocking() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.block_damage = 2.0;
        f.update(&config);
        assert_eq!(f.block_damage, 1.5);

        f.block(true);
        f.update(&config);
        assert_eq!(f.block_damage, 1.5);
    }

    #[test]
    fn buffered_jump_fires_on_ground() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attempt_jump();
        assert_eq!(f.velocity.y, 0.0);
        f.update(&config);
        assert_eq!(f.velocity.y, JUMP_VELOCITY);
        assert_eq!(f.jump_count, 1);
        assert_eq!(f.state(), FighterState::Jump);
    }

    #[test]
    fn double_jump_then_no_third() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attempt_jump();
        f.update(&config);
        f.update(&config);
        f.attempt_jump();
        f.update(&config);
        assert_eq!(f.jump_count, 2);
        assert_eq!(f.velocity.y, DOUBLE_JUMP_VELOCITY);

        f.update(&config);
        let vy = f.velocity.y;
        f.attempt_jump();
        f.update(&config);
        assert_eq!(f.jump_count, 2);
        assert!(f.velocity.y > vy);
    }

    #[test]
    fn double_jump_restarts_jump_animation() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attempt_jump();
        f.update(&config);
        for _ in 0..5 {
            f.update(&config);
        }
        assert!(f.anim_ticks > 1);
        f.attempt_jump();
        f.update(&config);
        assert_eq!(f.jump_count, 2);
        assert_eq!(f.state(), FighterState::Jump);
        assert_eq!(f.anim_frame, 0);
        assert_eq!(f.anim_ticks, 0);
    }

    #[test]
    fn air_jump_during_attack_keeps_swing() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.attempt_jump();
        f.update(&config);
        f.update(&config);
        f.attack(&config);
        f.attempt_jump();
        f.update(&config);
        assert_eq!(f.jump_count, 2);
        assert_eq!(f.velocity.y, DOUBLE_JUMP_VELOCITY);
        assert_eq!(f.state(), FighterState::Attack);
        assert!(f.hitbox_world().is_some());
    }

    #[test]
    fn airborne_hurt_recovery_grants_no_invulnerability() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.position.y = 100.0;
        f.grounded = false;
        f.transition(FighterState::Hurt);
        f.hurt_timer = 1;
        f.update(&config);
        assert!(!f.grounded);
        assert!(f.state().is_free());
        assert_eq!(f.invulnerability_timer, 0);
    }

    #[test]
    fn jump_buffer_expires() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.transition(FighterState::Hurt);
        f.hurt_timer = 100;
        f.attempt_jump();
        for _ in 0..JUMP_BUFFER_TICKS {
            f.update(&config);
        }
        assert_eq!(f.jump_buffer, 0);
        assert_eq!(f.jump_count, 0);
    }

    #[test]
    fn hurt_recovery_grants_wakeup_invulnerability() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.transition(FighterState::Hurt);
        f.hurt_timer = 2;
        f.update(&config);
        assert_eq!(f.state(), FighterState::Hurt);
        f.update(&config);
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.invulnerability_timer, config.wakeup_invulnerability);
    }

    #[test]
    fn classification_follows_velocity() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.velocity.x = WALK_SPEED;
        f.update(&config);
        assert_eq!(f.state(), FighterState::Walk);
        f.velocity.x = 0.0;
        f.update(&config);
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn dead_is_terminal() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.set_health(0.0);
        assert!(f.is_dead());
        f.transition(FighterState::Idle);
        f.attack(&config);
        f.block(true);
        f.dodge(&config);
        f.attempt_jump();
        f.update(&config);
        assert_eq!(f.state(), FighterState::Dead);
        assert_eq!(f.jump_count, 0);
    }

    #[test]
    fn energy_is_clamped() {
        let config = default_config(1);
        let mut f = grounded_fighter(&config);
        f.gain_energy(1000.0, config.max_energy);
        assert_eq!(f.energy(), config.max_energy);
        f.gain_energy(-5000.0, config.max_energy);
        assert_eq!(f.energy(), 0.0);
    }
}
