use sha2::{Digest, Sha256};

use crate::fighter::Fighter;
use crate::step::World;
use crate::types::PlayerInput;

/// SHA-256 of a full input transcript.
pub fn hash_transcript(transcript: &[[PlayerInput; 2]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for tick_inputs in transcript {
        for input in tick_inputs {
            hasher.update(input.held.to_le_bytes());
            hasher.update(input.pressed.to_le_bytes());
        }
    }
    hasher.finalize().into()
}

fn hash_fighter(hasher: &mut Sha256, f: &Fighter) {
    for v in [
        f.position.x,
        f.position.y,
        f.velocity.x,
        f.velocity.y,
        f.health(),
        f.energy(),
        f.air_damage,
        f.block_damage,
    ] {
        hasher.update(v.to_le_bytes());
    }
    hasher.update([f.state() as u8, f.combo_step, f.jump_count, f.grounded as u8]);
    for t in [
        f.action_timer,
        f.hurt_timer,
        f.dodge_timer,
        f.dodge_cooldown,
        f.attack_cooldown,
        f.invulnerability_timer,
        f.skill_startup,
        f.jump_buffer,
        f.teleport_lock,
    ] {
        hasher.update(t.to_le_bytes());
    }
}

/// SHA-256 fingerprint of the gameplay-relevant world state. Cosmetic fields
/// (colours, hit markers, animation frames) are left out.
pub fn hash_world(world: &World) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(world.tick.to_le_bytes());
    hasher.update(world.time_ms.to_le_bytes());
    for f in &world.fighters {
        hash_fighter(&mut hasher, f);
    }
    for p in &world.projectiles {
        hasher.update(p.id.to_le_bytes());
        hasher.update([p.owner.index() as u8, p.kind as u8]);
        hasher.update(p.x.to_le_bytes());
        hasher.update(p.y.to_le_bytes());
        hasher.update((p.hit_targets.len() as u32).to_le_bytes());
    }
    hasher.finalize().into()
}

/// SHA-256 commitment of the seed.
pub fn hash_seed(seed: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
