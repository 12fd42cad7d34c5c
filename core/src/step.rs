use crate::combat::{resolve_melee_pair, DamageOutcome, MeleeHit};
use crate::events::SoundCue;
use crate::fighter::Fighter;
use crate::input::apply_player_input;
use crate::projectiles::*;
use crate::types::*;

/// Everything that moves during a round.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub tick: Tick,
    /// Simulation clock; advances by one frame interval per tick.
    pub time_ms: f64,
    pub fighters: [Fighter; 2],
    pub projectiles: Vec<Projectile>,
    pub next_projectile_id: ProjectileId,
}

impl World {
    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }
}

/// Side effects of a single tick, for the orchestrator and front-ends.
#[derive(Default)]
pub struct TickReport {
    pub cues: Vec<(Side, SoundCue)>,
    pub melee_hits: Vec<MeleeHit>,
    pub projectile_hits: Vec<ProjectileHit>,
}

impl TickReport {
    pub fn knockouts(&self) -> impl Iterator<Item = Side> + '_ {
        let melee = self
            .melee_hits
            .iter()
            .filter(|h| h.outcome == DamageOutcome::Knockout)
            .map(|h| h.victim);
        let ranged = self
            .projectile_hits
            .iter()
            .filter(|h| h.outcome == DamageOutcome::Knockout)
            .map(|h| h.victim);
        melee.chain(ranged)
    }
}

/// Advance the world by one tick.
///
/// Sub-step order:
///  1. Apply inputs (held movement/guard, then pressed intents)
///  2. Fighter update (timers, dodge, startup, physics, jump, recovery)
///  3. Collect requested projectiles, assign ids
///  4. Move projectiles, drop expired/out-of-bounds
///  5. Projectile-fighter collision
///  6. Melee, both directions
///  7. Drain sound cues
///  8. Advance tick and clock
pub fn step(prev: &World, inputs: &[PlayerInput; 2], config: &MatchConfig) -> (World, TickReport) {
    let mut world = prev.clone();
    let mut report = TickReport::default();
    let now_ms = prev.time_ms + config.frame_ms();

    // 1. Inputs
    let centres = [world.fighters[0].center_x(), world.fighters[1].center_x()];
    for side in Side::BOTH {
        let opponent_x = centres[side.opponent().index()];
        apply_player_input(
            &mut world.fighters[side.index()],
            &inputs[side.index()],
            opponent_x,
            config,
        );
    }

    // 2. Fighter update
    for f in world.fighters.iter_mut() {
        f.update(config);
    }

    // 3. Spawn
    let mut spawned = Vec::new();
    for f in world.fighters.iter_mut() {
        for spawn in f.drain_spawns() {
            spawned.push(spawn_projectile(&spawn, f, world.next_projectile_id, now_ms));
            world.next_projectile_id += 1;
        }
    }

    // 4. Advance existing projectiles; new ones start moving next tick
    advance_projectiles(&mut world.projectiles, now_ms, config.world_width);
    world.projectiles.extend(spawned);

    // 5. Projectile hits
    report.projectile_hits =
        resolve_projectile_hits(&mut world.projectiles, &mut world.fighters, config);

    // 6. Melee
    report.melee_hits = resolve_melee_pair(&mut world.fighters, config);

    // 7. Cues
    for f in world.fighters.iter_mut() {
        let side = f.side;
        report
            .cues
            .extend(f.drain_cues().into_iter().map(|cue| (side, cue)));
    }

    // 8. Advance
    world.tick += 1;
    world.time_ms = now_ms;

    (world, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::init::{create_world, default_config};

    fn press(mask: u16) -> PlayerInput {
        PlayerInput {
            held: 0,
            pressed: mask,
        }
    }

    #[test]
    fn step_advances_tick_and_clock() {
        let config = default_config(42);
        let world = create_world(&config);
        let (next, _) = step(&world, &[NULL_INPUT; 2], &config);
        assert_eq!(next.tick, 1);
        assert!((next.time_ms - config.frame_ms()).abs() < 1e-9);
        assert_eq!(world.tick, 0);
    }

    #[test]
    fn idle_fighters_stay_put() {
        let config = default_config(42);
        let mut world = create_world(&config);
        let start = world.clone();
        for _ in 0..120 {
            world = step(&world, &[NULL_INPUT; 2], &config).0;
        }
        for side in Side::BOTH {
            assert_eq!(world.fighter(side).position, start.fighter(side).position);
            assert_eq!(world.fighter(side).state(), FighterState::Idle);
        }
    }

    #[test]
    fn skill_spawns_bolts_with_fresh_ids() {
        let config = default_config(42);
        let mut world = create_world(&config);
        world = step(&world, &[press(button::SKILL), NULL_INPUT], &config).0;
        for _ in 0..SKILL_STARTUP_TICKS - 1 {
            world = step(&world, &[NULL_INPUT; 2], &config).0;
        }
        let ids: Vec<_> = world.projectiles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(world.projectiles.iter().all(|p| p.owner == Side::P1));
        assert_eq!(world.next_projectile_id, 2);
    }

    #[test]
    fn cues_are_reported_per_side() {
        let config = default_config(42);
        let world = create_world(&config);
        let (_, report) = step(&world, &[press(button::ATTACK), press(button::JUMP)], &config);
        assert!(report.cues.contains(&(Side::P1, SoundCue::Attack)));
        assert!(report.cues.contains(&(Side::P2, SoundCue::Jump)));
    }

    #[test]
    fn walking_into_range_and_attacking_lands_a_hit() {
        let config = default_config(42);
        let mut world = create_world(&config);
        world.fighters[0].position.x = 1000.0;
        world.fighters[1].position.x = 1100.0;
        let (next, report) = step(&world, &[press(button::ATTACK), NULL_INPUT], &config);
        assert_eq!(report.melee_hits.len(), 1);
        assert_eq!(next.fighters[1].health(), MAX_HEALTH - MELEE_DAMAGE);
        assert_eq!(report.knockouts().count(), 0);
    }

    #[test]
    fn replay_determinism() {
        let config = default_config(42);

        let mut transcript: Vec<[PlayerInput; 2]> = Vec::new();
        for tick in 0..400u16 {
            let p1 = PlayerInput {
                held: if tick % 60 < 30 {
                    button::MOVE_RIGHT
                } else {
                    button::MOVE_LEFT
                },
                pressed: if tick % 25 == 0 { button::ATTACK } else { 0 },
            };
            let p2 = PlayerInput {
                held: if tick % 90 < 20 { button::BLOCK } else { button::MOVE_LEFT },
                pressed: match tick % 70 {
                    0 => button::JUMP,
                    35 => button::SKILL,
                    _ => 0,
                },
            };
            transcript.push([p1, p2]);
        }

        let run = |transcript: &Vec<[PlayerInput; 2]>| -> World {
            let mut world = create_world(&config);
            for inputs in transcript {
                world = step(&world, inputs, &config).0;
            }
            world
        };

        let a = run(&transcript);
        let b = run(&transcript);
        assert_eq!(a, b);
    }
}
