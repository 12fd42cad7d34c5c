use crate::constants::*;
use crate::fighter::Fighter;
use crate::step::World;
use crate::types::*;

/// 2500-wide arena: floor at y=500 plus eight floating platforms.
pub fn arena_platforms() -> Vec<Platform> {
    vec![
        // Left side
        Platform { x: 150.0, y: 350.0, width: 200.0, height: 20.0 },
        Platform { x: 50.0, y: 200.0, width: 150.0, height: 20.0 },
        // Centre
        Platform { x: 600.0, y: 400.0, width: 300.0, height: 20.0 },
        Platform { x: 1000.0, y: 250.0, width: 250.0, height: 20.0 },
        Platform { x: 1100.0, y: 120.0, width: 150.0, height: 20.0 },
        // Right side
        Platform { x: 1600.0, y: 400.0, width: 300.0, height: 20.0 },
        Platform { x: 1900.0, y: 220.0, width: 200.0, height: 20.0 },
        Platform { x: 2200.0, y: 320.0, width: 200.0, height: 20.0 },
    ]
}

/// Default match config for the standard arena.
pub fn default_config(seed: Seed) -> MatchConfig {
    MatchConfig {
        seed,
        tick_rate: TICK_RATE,
        world_width: WORLD_WIDTH,
        ground_y: GROUND_Y,
        gravity: GRAVITY,
        fighter_width: FIGHTER_WIDTH,
        fighter_height: FIGHTER_HEIGHT,
        max_energy: MAX_ENERGY,
        ultimate_cost: ULT_COST,
        energy_gain_hit: ENERGY_GAIN_HIT,
        energy_gain_take_hit: ENERGY_GAIN_TAKE_HIT,
        energy_gain_block: ENERGY_GAIN_BLOCK,
        dodge_duration: DODGE_DURATION,
        dodge_cooldown: DODGE_COOLDOWN,
        juggle_damage_cap: JUGGLE_DAMAGE_CAP,
        wakeup_invulnerability: WAKEUP_INVULNERABILITY,
        platforms: arena_platforms(),
        round_time: ROUND_TIME,
        wins_needed: WINS_NEEDED,
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        default_config(0)
    }
}

/// Both fighters standing on the floor either side of the centre, facing
/// each other.
pub fn spawn_fighters(config: &MatchConfig) -> [Fighter; 2] {
    let centre = config.world_width / 2.0;
    let y = config.ground_y - config.fighter_height;
    let mut p1 = Fighter::new(Side::P1, centre + P1_SPAWN_OFFSET, y, Facing::Right, config);
    let mut p2 = Fighter::new(Side::P2, centre + P2_SPAWN_OFFSET, y, Facing::Left, config);
    p1.grounded = true;
    p2.grounded = true;
    [p1, p2]
}

/// Fresh world for the start of a round.
pub fn create_world(config: &MatchConfig) -> World {
    World {
        tick: 0,
        time_ms: 0.0,
        fighters: spawn_fighters(config),
        projectiles: Vec::new(),
        next_projectile_id: 0,
    }
}
