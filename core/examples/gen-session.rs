//! Generates session JSON files for the headless host.
//!
//! Usage:
//!   cargo run -p brawl-core --example gen-session -- [idle|brawl|zoner|cpu] > session.json

use brawl_core::*;

fn held(mask: u16) -> PlayerInput {
    PlayerInput {
        held: mask,
        pressed: 0,
    }
}

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let config = default_config(42);
    let round_ticks = (config.round_time * config.tick_rate) as usize;

    let session = match mode.as_str() {
        "idle" => {
            // Nobody moves: the round goes to time and ends in a draw
            Session {
                seed: None,
                cpu: false,
                inputs: vec![[NULL_INPUT; 2]; round_ticks],
            }
        }
        "brawl" => {
            // P1 closes the gap and jabs every 20 ticks, P2 stands still
            let mut inputs = Vec::new();
            for tick in 0..round_ticks {
                let p1 = if tick < 60 {
                    held(button::MOVE_RIGHT)
                } else {
                    PlayerInput {
                        held: 0,
                        pressed: if tick % 20 == 0 { button::ATTACK } else { 0 },
                    }
                };
                inputs.push([p1, NULL_INPUT]);
            }
            Session {
                seed: None,
                cpu: false,
                inputs,
            }
        }
        "zoner" => {
            // P1 walks in to bolt range and fires the skill on cooldown
            let mut inputs = Vec::new();
            for tick in 0..round_ticks {
                let p1 = if tick < 30 {
                    held(button::MOVE_RIGHT)
                } else {
                    PlayerInput {
                        held: 0,
                        pressed: if tick % 45 == 0 { button::SKILL } else { 0 },
                    }
                };
                inputs.push([p1, NULL_INPUT]);
            }
            Session {
                seed: None,
                cpu: false,
                inputs,
            }
        }
        "cpu" => {
            // P1 idles against the CPU
            Session {
                seed: Some(7),
                cpu: true,
                inputs: vec![[NULL_INPUT; 2]; round_ticks],
            }
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'brawl', 'zoner' or 'cpu'", mode);
            std::process::exit(1);
        }
    };

    // Verify by running the sim
    let mut config = config;
    if let Some(seed) = session.seed {
        config.seed = seed;
    }
    let mut m = if session.cpu {
        Match::against_cpu(config.clone())
    } else {
        Match::versus(config.clone())
    };
    let mut seconds = SecondCounter::new(config.tick_rate);
    for tick in 0..session.len() {
        m.tick(session.inputs_at(tick));
        if seconds.tick() {
            m.tick_second();
        }
        if m.is_over() {
            break;
        }
    }

    let state = m.state();
    eprintln!("=== Sim result ({} mode) ===", mode);
    eprintln!("Final tick: {}", m.world().tick);
    eprintln!("Round: {}", state.round);
    eprintln!("Wins: P1={}, P2={}", state.wins[0], state.wins[1]);
    eprintln!(
        "Health: P1={}, P2={}",
        m.world().fighters[0].health(),
        m.world().fighters[1].health()
    );

    match serde_json::to_string(&session) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("serialize session: {}", err);
            std::process::exit(1);
        }
    }
}
