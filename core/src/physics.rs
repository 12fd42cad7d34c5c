use crate::constants::*;
use crate::fighter::Fighter;
use crate::types::*;

/// Horizontal damping: ground friction if the fighter stood on something
/// last tick, air resistance otherwise. Small speeds snap to zero.
pub fn apply_friction(vx: f64, grounded: bool) -> f64 {
    let factor = if grounded {
        GROUND_FRICTION
    } else {
        AIR_RESISTANCE
    };
    let vx = vx * factor;
    if vx.abs() < VELOCITY_EPSILON {
        0.0
    } else {
        vx
    }
}

/// Gravity for one tick. Falling after a double jump is floatier.
pub fn apply_gravity(vy: f64, jump_count: u8, gravity: f64) -> f64 {
    if jump_count >= MAX_JUMPS && vy > 0.0 {
        vy + gravity / 2.0
    } else {
        vy + gravity
    }
}

/// First platform whose top the feet crossed this tick. Platforms are
/// one-way: only a downward-moving fighter can land on them.
pub fn find_landing_platform<'a>(
    platforms: &'a [Platform],
    prev_y: f64,
    y: f64,
    x: f64,
    width: f64,
    height: f64,
    vy: f64,
) -> Option<&'a Platform> {
    if vy < 0.0 {
        return None;
    }
    let feet_before = prev_y + height;
    let feet_after = y + height;
    platforms.iter().find(|plat| {
        x + width > plat.x
            && x < plat.x + plat.width
            && feet_before <= plat.y
            && feet_after >= plat.y
    })
}

/// Integrate position, damp, resolve platform and floor contact, apply
/// gravity when airborne and clamp to the world's horizontal extent.
pub fn move_and_collide(f: &mut Fighter, config: &MatchConfig) {
    let prev_y = f.position.y;
    let was_grounded = f.grounded;

    f.position.x += f.velocity.x;
    f.position.y += f.velocity.y;
    f.velocity.x = apply_friction(f.velocity.x, was_grounded);

    f.grounded = false;
    let landing = find_landing_platform(
        &config.platforms,
        prev_y,
        f.position.y,
        f.position.x,
        f.width,
        f.height,
        f.velocity.y,
    );

    if let Some(plat) = landing {
        f.position.y = plat.y - f.height;
        f.velocity.y = 0.0;
        f.grounded = true;
    } else if f.position.y + f.height + f.velocity.y >= config.ground_y {
        f.position.y = config.ground_y - f.height;
        f.velocity.y = 0.0;
        f.grounded = true;
    } else {
        f.velocity.y = apply_gravity(f.velocity.y, f.jump_count, config.gravity);
    }

    if f.grounded {
        f.jump_count = 0;
        f.air_damage = 0.0;
        if f.knocked_down {
            f.knocked_down = false;
            f.invulnerability_timer = config.wakeup_invulnerability;
        }
    }

    f.position.x = f.position.x.clamp(0.0, config.world_width - f.width);
}
