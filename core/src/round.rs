use serde::Serialize;
use tracing::info;

use crate::ai::AiController;
use crate::constants::KO_LINGER_TICKS;
use crate::events::{MatchEvent, RoundOutcome};
use crate::init::create_world;
use crate::snapshot::Snapshot;
use crate::step::{step, TickReport, World};
use crate::types::*;

/// Who drives a side.
#[derive(Clone, Debug)]
pub enum Controller {
    Human,
    Cpu(AiController),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub round: u32,
    pub wins: [u32; 2],
    /// Seconds left in the current round.
    pub round_timer: u32,
    /// Set once a side reaches the required wins. Terminal.
    pub winner: Option<String>,
    pub round_over: bool,
    /// Ticks the decided round keeps simulating before the next one.
    pub linger: u32,
}

/// Round and match lifecycle around the per-tick simulation.
pub struct Match {
    config: MatchConfig,
    world: World,
    state: MatchState,
    names: [String; 2],
    controllers: [Controller; 2],
    events: Vec<MatchEvent>,
}

impl Match {
    pub fn new(config: MatchConfig, names: [String; 2], controllers: [Controller; 2]) -> Match {
        let world = create_world(&config);
        let state = MatchState {
            round: 1,
            wins: [0, 0],
            round_timer: config.round_time,
            winner: None,
            round_over: false,
            linger: 0,
        };
        info!(p1 = %names[0], p2 = %names[1], wins_needed = config.wins_needed, "match started");
        info!(round = 1, "round started");
        Match {
            config,
            world,
            state,
            names,
            controllers,
            events: vec![MatchEvent::RoundStart { round: 1 }],
        }
    }

    /// Player versus player.
    pub fn versus(config: MatchConfig) -> Match {
        Match::new(
            config,
            ["Player 1".to_string(), "Player 2".to_string()],
            [Controller::Human, Controller::Human],
        )
    }

    /// Player versus a CPU seeded from the config.
    pub fn against_cpu(config: MatchConfig) -> Match {
        let ai = AiController::seeded(config.seed);
        Match::new(
            config,
            ["Player 1".to_string(), "CPU".to_string()],
            [Controller::Human, Controller::Cpu(ai)],
        )
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Match decided and the closing linger played out.
    pub fn is_over(&self) -> bool {
        self.state.winner.is_some() && self.state.linger == 0
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self, debug: bool) -> Snapshot {
        Snapshot::capture(&self.world, &self.state, debug)
    }

    /// Advance one tick. Human sides use `inputs`; CPU sides ignore theirs.
    pub fn tick(&mut self, inputs: [PlayerInput; 2]) -> TickReport {
        if self.is_over() {
            return TickReport::default();
        }

        let resolved = self.resolve_inputs(inputs);
        let (world, report) = step(&self.world, &resolved, &self.config);
        self.world = world;

        if self.state.round_over {
            self.state.linger = self.state.linger.saturating_sub(1);
            if self.state.linger == 0 && self.state.winner.is_none() {
                self.start_next_round();
            }
        } else if self.world.fighters[0].is_dead() {
            self.end_round(RoundOutcome::Winner { side: Side::P2 });
        } else if self.world.fighters[1].is_dead() {
            self.end_round(RoundOutcome::Winner { side: Side::P1 });
        }

        report
    }

    /// One second of round time. On expiry the healthier side takes the
    /// round; equal health is a draw.
    pub fn tick_second(&mut self) {
        if self.state.round_over || self.state.winner.is_some() {
            return;
        }
        self.state.round_timer = self.state.round_timer.saturating_sub(1);
        if self.state.round_timer > 0 {
            return;
        }
        let [p1, p2] = [&self.world.fighters[0], &self.world.fighters[1]];
        let outcome = if p1.health() > p2.health() {
            RoundOutcome::Winner { side: Side::P1 }
        } else if p2.health() > p1.health() {
            RoundOutcome::Winner { side: Side::P2 }
        } else {
            RoundOutcome::Draw
        };
        info!(round = self.state.round, "time up");
        self.end_round(outcome);
    }

    fn resolve_inputs(&mut self, inputs: [PlayerInput; 2]) -> [PlayerInput; 2] {
        if self.state.round_over {
            return [NULL_INPUT; 2];
        }
        let mut resolved = inputs;
        for side in Side::BOTH {
            if let Controller::Cpu(ai) = &mut self.controllers[side.index()] {
                let me = &self.world.fighters[side.index()];
                let opponent = &self.world.fighters[side.opponent().index()];
                resolved[side.index()] = ai.decide(me, opponent, &self.config);
            }
        }
        resolved
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        let round = self.state.round;
        self.state.round_over = true;
        self.state.linger = KO_LINGER_TICKS;

        match &outcome {
            RoundOutcome::Winner { side } => {
                self.state.wins[side.index()] += 1;
                info!(round, winner = %self.names[side.index()], wins = ?self.state.wins, "round over");
            }
            RoundOutcome::Draw => info!(round, "round drawn"),
        }
        self.events.push(MatchEvent::RoundEnd { round, outcome: outcome.clone() });

        if let RoundOutcome::Winner { side } = outcome {
            if self.state.wins[side.index()] >= self.config.wins_needed {
                let winner = self.names[side.index()].clone();
                info!(%winner, "match over");
                self.state.winner = Some(winner.clone());
                self.events.push(MatchEvent::MatchEnd { winner });
            }
        }
    }

    fn start_next_round(&mut self) {
        self.state.round += 1;
        self.state.round_timer = self.config.round_time;
        self.state.round_over = false;
        self.world = create_world(&self.config);
        info!(round = self.state.round, "round started");
        self.events.push(MatchEvent::RoundStart {
            round: self.state.round,
        });
    }
}
