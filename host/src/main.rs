use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{debug, info};

use brawl_core::*;

const USAGE: &str =
    "usage: brawl-host [session.json] [--config arena.toml] [--cpu] [--realtime] [--debug]";

struct Args {
    session_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    cpu: bool,
    realtime: bool,
    debug: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        session_path: None,
        config_path: None,
        cpu: false,
        realtime: false,
        debug: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config_path = Some(PathBuf::from(path));
            }
            "--cpu" => args.cpu = true,
            "--realtime" => args.realtime = true,
            "--debug" => args.debug = true,
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            path => args.session_path = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_session(path: Option<&PathBuf>) -> anyhow::Result<Session> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading session {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading session from stdin")?;
            buf
        }
    };
    serde_json::from_str(&json).context("parsing session JSON")
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading arena config {}", path.display())),
        None => Ok(default_config(0)),
    }
}

/// Sound cues become log lines; a headless run has no speakers.
struct LogAudio;

impl AudioSink for LogAudio {
    fn init(&mut self) {
        debug!("audio: logging sink ready");
    }

    fn play(&mut self, side: Side, cue: SoundCue) {
        debug!(?side, cue = cue.name(), "sound");
    }

    fn shutdown(&mut self) {
        debug!("audio: logging sink closed");
    }
}

#[derive(Serialize)]
struct RunResult {
    winner: Option<String>,
    wins: [u32; 2],
    rounds: u32,
    ticks: u64,
    health: [f64; 2],
    transcript_hash: String,
    world_hash: String,
    seed_commit: String,
}

fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = parse_args()?;
    let session = load_session(args.session_path.as_ref())?;
    let mut config = load_config(args.config_path.as_ref())?;
    if let Some(seed) = session.seed {
        config.seed = seed;
    }
    let cpu = args.cpu || session.cpu;
    info!(
        ticks = session.len(),
        seed = config.seed,
        tick_rate = config.tick_rate,
        cpu,
        realtime = args.realtime,
        "session loaded"
    );

    let mut m = if cpu {
        Match::against_cpu(config.clone())
    } else {
        Match::versus(config.clone())
    };
    let mut audio = LogAudio;
    audio.init();

    let mut seconds = SecondCounter::new(config.tick_rate);
    let mut limiter = FrameLimiter::new(config.tick_rate);
    let mut played = Vec::with_capacity(session.len());
    let mut last = Instant::now();
    let started = Instant::now();

    let mut tick = 0usize;
    while tick < session.len() && !m.is_over() {
        if args.realtime {
            let now = Instant::now();
            let due = limiter.advance(now - last);
            last = now;
            if !due {
                std::thread::sleep(limiter.until_next());
                continue;
            }
        }

        let inputs = session.inputs_at(tick);
        played.push(inputs);
        let report = m.tick(inputs);
        for (side, cue) in report.cues {
            audio.play(side, cue);
        }
        if seconds.tick() {
            m.tick_second();
        }
        for event in m.drain_events() {
            info!(?event, "match event");
        }
        if args.debug {
            let snapshot = serde_json::to_string(&m.snapshot(true))?;
            debug!(%snapshot, "frame");
        }
        tick += 1;
    }
    audio.shutdown();

    if !m.is_over() {
        info!(ticks = tick, "session exhausted before the match was decided");
    }
    info!(
        ticks = tick,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run finished"
    );

    let world = m.world();
    let result = RunResult {
        winner: m.state().winner.clone(),
        wins: m.state().wins,
        rounds: m.state().round,
        ticks: tick as u64,
        health: [world.fighters[0].health(), world.fighters[1].health()],
        transcript_hash: hex::encode(hash_transcript(&played)),
        world_hash: hex::encode(hash_world(world)),
        seed_commit: hex::encode(hash_seed(config.seed)),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
