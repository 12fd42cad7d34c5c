pub mod ai;
pub mod clock;
pub mod combat;
pub mod config;
pub mod constants;
pub mod events;
pub mod fighter;
pub mod hash;
pub mod init;
pub mod input;
pub mod physics;
pub mod prng;
pub mod projectiles;
pub mod round;
pub mod session;
pub mod snapshot;
pub mod step;
pub mod types;

pub use ai::AiController;
pub use clock::{FrameLimiter, SecondCounter};
pub use combat::{resolve_melee, resolve_melee_pair, DamageOutcome, MeleeHit};
pub use config::ConfigError;
pub use constants::*;
pub use events::*;
pub use fighter::Fighter;
pub use hash::*;
pub use init::*;
pub use input::apply_player_input;
pub use physics::{apply_friction, apply_gravity, move_and_collide};
pub use prng::{Mulberry32, RandomSource, ScriptedRandom};
pub use projectiles::{
    advance_projectiles, clone_strike, is_expired, is_out_of_bounds, move_projectile,
    resolve_projectile_hits, spawn_projectile, ProjectileHit, ProjectileSpawn,
};
pub use round::{Controller, Match, MatchState};
pub use session::Session;
pub use snapshot::{FighterView, ProjectileView, Snapshot};
pub use step::{step, TickReport, World};
pub use types::*;
