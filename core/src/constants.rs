// All values are per-tick at 60 Hz unless noted.

// Tick rate
pub const TICK_RATE: u32 = 60;
pub const SUPPORTED_TICK_RATES: [u32; 4] = [30, 60, 90, 120];

// World
pub const WORLD_WIDTH: f64 = 2500.0;
pub const GROUND_Y: f64 = 500.0;
pub const GRAVITY: f64 = 0.7;

// Fighter hurtbox
pub const FIGHTER_WIDTH: f64 = 80.0;
pub const FIGHTER_HEIGHT: f64 = 76.0;

// Physics
pub const GROUND_FRICTION: f64 = 0.85;
pub const AIR_RESISTANCE: f64 = 0.95;
pub const VELOCITY_EPSILON: f64 = 0.1;
pub const WALK_SPEED: f64 = 7.0;
pub const JUMP_VELOCITY: f64 = -17.0;
pub const DOUBLE_JUMP_VELOCITY: f64 = -13.0;
pub const JUMP_BUFFER_TICKS: u32 = 10;
pub const MAX_JUMPS: u8 = 2;
/// Horizontal speed below which a grounded fighter counts as standing still.
pub const WALK_THRESHOLD: f64 = 0.5;

// Stats
pub const MAX_HEALTH: f64 = 100.0;
pub const MAX_ENERGY: f64 = 300.0;
pub const ULT_COST: f64 = 100.0;

// Energy gains
pub const ENERGY_GAIN_HIT: f64 = 2.0;
pub const ENERGY_GAIN_TAKE_HIT: f64 = 1.0;
pub const ENERGY_GAIN_BLOCK: f64 = 3.0;

// Melee
pub const MELEE_DAMAGE: f64 = 3.0;
pub const ULTIMATE_DAMAGE: f64 = 25.0;
pub const ATTACK_ACTION_TICKS: u32 = 15;
pub const ATTACK_COOLDOWN_TICKS: u32 = 20;
pub const ATTACK_NUDGE: f64 = 3.0;
pub const ATTACK_HITBOX_OFFSET_X: f64 = 50.0;
pub const ATTACK_HITBOX_OFFSET_Y: f64 = 20.0;
pub const ATTACK_HITBOX_WIDTH: f64 = 100.0;
pub const ATTACK_HITBOX_HEIGHT: f64 = 50.0;

// Ranged skill
pub const SKILL_ACTION_TICKS: u32 = 40;
pub const SKILL_STARTUP_TICKS: u32 = 15;
pub const ENERGY_BOLT_SPEED: f64 = 12.0;
pub const ENERGY_BOLT_SIZE: f64 = 30.0;
pub const ENERGY_BOLT_DAMAGE: f64 = 5.0;
pub const ENERGY_BOLT_RANGE: f64 = 350.0;
pub const ENERGY_BOLT_SPREAD: f64 = 15.0;

// Ultimate
pub const ULTIMATE_ACTION_TICKS: u32 = 60;
pub const ULTIMATE_STARTUP_TICKS: u32 = 20;
pub const ULTIMATE_HITBOX_OFFSET: f64 = -50.0;
pub const ULTIMATE_HITBOX_SIZE: f64 = 200.0;
pub const BEAM_WIDTH: f64 = 800.0;
pub const BEAM_HEIGHT: f64 = 40.0;
pub const BEAM_DAMAGE: f64 = 25.0;
pub const BEAM_LIFETIME_MS: f64 = 600.0;

// Clone strike
pub const CLONE_SPEED: f64 = 10.0;
pub const CLONE_DAMAGE: f64 = 5.0;
pub const CLONE_KNOCKBACK: f64 = 8.0;
pub const CLONE_LIFETIME_MS: f64 = 800.0;

/// Projectiles further than this outside the world are dropped.
pub const PROJECTILE_BOUNDS_MARGIN: f64 = 200.0;

// Teleport
pub const TELEPORT_DISTANCE: f64 = 180.0;
pub const TELEPORT_LOCK_TICKS: u32 = 15;

// Dodge
pub const DODGE_DURATION: u32 = 30;
pub const DODGE_COOLDOWN: u32 = 180;
pub const DODGE_SPEED: f64 = 12.0;

// Block / guard break
pub const GUARD_BREAK_THRESHOLD: f64 = 200.0;
pub const BLOCK_DECAY_RATE: f64 = 0.5;
pub const CHIP_DAMAGE_RATIO: f64 = 0.1;
pub const BLOCK_PUSHBACK: f64 = 3.0;
pub const BLOCK_STUN_TICKS: u32 = 8;
pub const GUARD_BREAK_STUN_TICKS: u32 = 60;
pub const GUARD_BREAK_KNOCKBACK_X: f64 = 12.0;
pub const GUARD_BREAK_KNOCKBACK_Y: f64 = -10.0;

// Hurt / knockback
pub const HURT_TICKS: u32 = 20;
pub const KNOCKBACK_X: f64 = 6.0;
pub const KNOCKBACK_Y: f64 = -4.0;
pub const HEAVY_KNOCKBACK_X: f64 = 10.0;
pub const HEAVY_KNOCKBACK_Y: f64 = -7.0;
pub const HIT_MARKER_TICKS: u32 = 12;

// Juggle protection
pub const JUGGLE_DAMAGE_CAP: f64 = 30.0;
pub const SLAM_VELOCITY: f64 = 20.0;
pub const SLAM_HURT_TICKS: u32 = 60;
pub const WAKEUP_INVULNERABILITY: u32 = 120;

// Match rules
pub const ROUND_TIME: u32 = 90; // seconds
pub const WINS_NEEDED: u32 = 2;
/// Ticks the world keeps running after a round is decided.
pub const KO_LINGER_TICKS: u32 = 30;

// Spawn offsets from the world centre
pub const P1_SPAWN_OFFSET: f64 = -300.0;
pub const P2_SPAWN_OFFSET: f64 = 260.0;
