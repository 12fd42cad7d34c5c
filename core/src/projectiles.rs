use tracing::debug;

use crate::combat::DamageOutcome;
use crate::constants::*;
use crate::fighter::Fighter;
use crate::types::*;

/// A projectile a fighter asked for; the world assigns id and timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileSpawn {
    pub kind: ProjectileKind,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub damage: f64,
    pub facing: Facing,
}

pub fn spawn_projectile(
    spawn: &ProjectileSpawn,
    owner: &Fighter,
    id: ProjectileId,
    now_ms: f64,
) -> Projectile {
    debug!(id, owner = ?owner.side, kind = ?spawn.kind, "projectile spawned");
    Projectile {
        id,
        owner: owner.side,
        kind: spawn.kind,
        x: spawn.x,
        y: spawn.y,
        vx: spawn.vx,
        vy: spawn.vy,
        width: spawn.width,
        height: spawn.height,
        damage: spawn.damage,
        facing: spawn.facing,
        color: owner.color.clone(),
        created_at_ms: now_ms,
        start_x: spawn.x,
        hit_targets: Vec::new(),
    }
}

/// Shadow clone dashing forward from the fighter's centre.
///
/// No button maps to this; it is public for callers that script a clone
/// strike through `spawn_projectile`.
pub fn clone_strike(owner: &Fighter) -> ProjectileSpawn {
    ProjectileSpawn {
        kind: ProjectileKind::Clone,
        x: owner.center_x(),
        y: owner.center_y(),
        vx: owner.facing.sign() * CLONE_SPEED,
        vy: 0.0,
        width: owner.width,
        height: owner.height,
        damage: CLONE_DAMAGE,
        facing: owner.facing,
    }
}

/// Advance by one tick. Beams stay where they were fired.
pub fn move_projectile(proj: &mut Projectile) {
    if proj.kind == ProjectileKind::Beam {
        return;
    }
    proj.x += proj.vx;
    proj.y += proj.vy;
}

/// Lifetime check: clones and beams by age, energy bolts by range.
pub fn is_expired(proj: &Projectile, now_ms: f64) -> bool {
    let age = now_ms - proj.created_at_ms;
    match proj.kind {
        ProjectileKind::Clone => age > CLONE_LIFETIME_MS,
        ProjectileKind::Beam => age > BEAM_LIFETIME_MS,
        ProjectileKind::Energy => (proj.x - proj.start_x).abs() > ENERGY_BOLT_RANGE,
    }
}

pub fn is_out_of_bounds(proj: &Projectile, world_width: f64) -> bool {
    proj.x < -PROJECTILE_BOUNDS_MARGIN || proj.x > world_width + PROJECTILE_BOUNDS_MARGIN
}

pub struct ProjectileHit {
    pub projectile_id: ProjectileId,
    pub owner: Side,
    pub victim: Side,
    pub kind: ProjectileKind,
    pub outcome: DamageOutcome,
}

/// Resolve projectile-fighter overlaps. Each projectile can only touch the
/// fighter on the other side. Bolts and clones are consumed on contact;
/// beams persist and damage each target at most once.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    fighters: &mut [Fighter; 2],
    config: &MatchConfig,
) -> Vec<ProjectileHit> {
    let mut hits = Vec::new();
    let mut consumed = Vec::new();

    for proj in projectiles.iter_mut() {
        let victim_side = proj.owner.opponent();
        let victim = &mut fighters[victim_side.index()];
        if !proj.bounds().overlaps(&victim.bounds()) {
            continue;
        }

        let targetable = !matches!(victim.state(), FighterState::Dead | FighterState::Dodge);
        if proj.kind == ProjectileKind::Beam {
            if !targetable || proj.hit_targets.contains(&victim_side) {
                continue;
            }
            proj.hit_targets.push(victim_side);
        } else {
            consumed.push(proj.id);
            if !targetable {
                continue;
            }
        }

        let kind = match proj.kind {
            ProjectileKind::Beam => DamageKind::Heavy,
            _ => DamageKind::Ranged,
        };
        // Knock the victim along the projectile's direction of travel.
        let source_x = victim.center_x() - proj.facing.sign();
        let outcome = victim.take_damage(proj.damage, kind, source_x, config);
        if proj.kind == ProjectileKind::Clone {
            victim.velocity.x = proj.facing.sign() * CLONE_KNOCKBACK;
        }

        debug!(
            id = proj.id,
            owner = ?proj.owner,
            victim = ?victim_side,
            outcome = ?outcome,
            "projectile hit"
        );
        hits.push(ProjectileHit {
            projectile_id: proj.id,
            owner: proj.owner,
            victim: victim_side,
            kind: proj.kind,
            outcome,
        });
    }

    projectiles.retain(|p| !consumed.contains(&p.id));
    hits
}

/// Move every projectile, drop the expired and the out-of-bounds.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, now_ms: f64, world_width: f64) {
    for proj in projectiles.iter_mut() {
        move_projectile(proj);
    }
    projectiles.retain(|p| !is_expired(p, now_ms) && !is_out_of_bounds(p, world_width));
}
