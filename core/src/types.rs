use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

pub type Tick = u32;
pub type Seed = u32;
pub type ProjectileId = u32;

// ── Sides ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Direction from `from_x` toward `to_x`; ties face right.
    pub fn toward(from_x: f64, to_x: f64) -> Facing {
        if to_x < from_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

// ── Fighter state ───────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FighterState {
    Idle,
    Walk,
    Jump,
    Crouch,
    Dodge,
    Attack,
    Skill,
    Ultimate,
    Hurt,
    Dead,
    Block,
}

impl FighterState {
    /// Attack-like states sharing lockout and recovery rules.
    pub fn is_action_locked(self) -> bool {
        matches!(
            self,
            FighterState::Attack | FighterState::Skill | FighterState::Ultimate
        )
    }

    /// States in which movement, blocking and jumping are ignored.
    pub fn is_input_locked(self) -> bool {
        matches!(
            self,
            FighterState::Hurt | FighterState::Dead | FighterState::Skill | FighterState::Ultimate
        )
    }

    /// States whose label is derived from velocity every tick.
    pub fn is_free(self) -> bool {
        matches!(
            self,
            FighterState::Idle | FighterState::Walk | FighterState::Jump
        )
    }

    /// States that keep the active hitbox across a transition.
    pub fn keeps_hitbox(self) -> bool {
        matches!(self, FighterState::Attack | FighterState::Ultimate)
    }
}

/// Hitbox relative to the fighter's top-left corner when facing right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub offset: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub const NONE: Hitbox = Hitbox {
        offset: Vec2 { x: 0.0, y: 0.0 },
        width: 0.0,
        height: 0.0,
    };
}

/// Short-lived marker drawn where a hit landed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitMarker {
    pub x: f64,
    pub y: f64,
    pub kind: DamageKind,
    pub ttl: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageKind {
    Melee,
    Ranged,
    Heavy,
}

// ── Input ───────────────────────────────────────────────────

/// Button bitmask constants. Movement and block are read while held; the
/// rest fire once per press.
pub mod button {
    pub const MOVE_LEFT: u16 = 1;
    pub const MOVE_RIGHT: u16 = 1 << 1;
    pub const BLOCK: u16 = 1 << 2;
    pub const ATTACK: u16 = 1 << 3;
    pub const JUMP: u16 = 1 << 4;
    pub const DODGE: u16 = 1 << 5;
    pub const TELEPORT: u16 = 1 << 6;
    pub const SKILL: u16 = 1 << 7;
    pub const ULTIMATE: u16 = 1 << 8;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Buttons currently held down.
    pub held: u16,
    /// Buttons pressed since the previous tick.
    pub pressed: u16,
}

pub const NULL_INPUT: PlayerInput = PlayerInput {
    held: 0,
    pressed: 0,
};

impl PlayerInput {
    pub fn is_held(&self, mask: u16) -> bool {
        self.held & mask != 0
    }

    pub fn was_pressed(&self, mask: u16) -> bool {
        self.pressed & mask != 0
    }
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileKind {
    Energy,
    Beam,
    Clone,
}

/// Projectile positions are centre points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub owner: Side,
    pub kind: ProjectileKind,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub damage: f64,
    pub facing: Facing,
    pub color: String,
    /// Simulation time in milliseconds when the projectile was spawned.
    pub created_at_ms: f64,
    pub start_x: f64,
    /// Sides already damaged by this beam.
    pub hit_targets: Vec<Side>,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x - self.width / 2.0,
            y: self.y - self.height / 2.0,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Arena ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ── Config ──────────────────────────────────────────────────

/// Startup configuration. Immutable once a match is running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub seed: Seed,
    pub tick_rate: u32,
    pub world_width: f64,
    pub ground_y: f64,
    pub gravity: f64,
    pub fighter_width: f64,
    pub fighter_height: f64,
    pub max_energy: f64,
    pub ultimate_cost: f64,
    pub energy_gain_hit: f64,
    pub energy_gain_take_hit: f64,
    pub energy_gain_block: f64,
    pub dodge_duration: u32,
    pub dodge_cooldown: u32,
    pub juggle_damage_cap: f64,
    pub wakeup_invulnerability: u32,
    pub platforms: Vec<Platform>,
    /// Round length in seconds.
    pub round_time: u32,
    pub wins_needed: u32,
}

impl MatchConfig {
    /// Length of one simulation tick in milliseconds.
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }
}
