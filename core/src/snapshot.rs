use serde::Serialize;

use crate::fighter::Fighter;
use crate::round::MatchState;
use crate::step::World;
use crate::types::*;

/// Read-only fighter state for renderers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterView {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub facing: Facing,
    pub state: FighterState,
    pub health: f64,
    pub energy: f64,
    pub anim_frame: u32,
    pub combo_step: u8,
    pub grounded: bool,
    pub invulnerable: bool,
    pub hurt: bool,
    pub color: String,
    pub hit_marker: Option<HitMarker>,
    /// World-space live hitbox; only filled in debug snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hitbox: Option<Rect>,
}

impl FighterView {
    pub fn from_fighter(f: &Fighter, debug: bool) -> FighterView {
        FighterView {
            side: f.side,
            x: f.position.x,
            y: f.position.y,
            width: f.width,
            height: f.height,
            facing: f.facing,
            state: f.state(),
            health: f.health(),
            energy: f.energy(),
            anim_frame: f.anim_frame,
            combo_step: f.combo_step,
            grounded: f.grounded,
            invulnerable: f.invulnerability_timer > 0,
            hurt: f.hurt_timer > 0,
            color: f.color.clone(),
            hit_marker: f.hit_marker,
            hitbox: if debug { f.hitbox_world() } else { None },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub owner: Side,
    pub kind: ProjectileKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub facing: Facing,
    pub color: String,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        ProjectileView {
            id: p.id,
            owner: p.owner,
            kind: p.kind,
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            facing: p.facing,
            color: p.color.clone(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tick: Tick,
    pub time_ms: f64,
    pub fighters: [FighterView; 2],
    pub projectiles: Vec<ProjectileView>,
    #[serde(rename = "match")]
    pub match_state: MatchState,
}

impl Snapshot {
    pub fn capture(world: &World, state: &MatchState, debug: bool) -> Snapshot {
        Snapshot {
            tick: world.tick,
            time_ms: world.time_ms,
            fighters: [
                FighterView::from_fighter(&world.fighters[0], debug),
                FighterView::from_fighter(&world.fighters[1], debug),
            ],
            projectiles: world.projectiles.iter().map(ProjectileView::from).collect(),
            match_state: state.clone(),
        }
    }
}
