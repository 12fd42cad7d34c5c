use crate::types::Seed;

/// Source of uniform values in [0, 1). Injected wherever the simulation
/// needs chance, so runs can be reproduced from a seed.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Mulberry32: small, fast 32-bit generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: Seed) -> Self {
        Mulberry32 { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// One Mulberry32 step: (value in [0, 1), next state).
pub fn prng_next(state: u32) -> (f64, u32) {
    let mut t = state.wrapping_add(0x6d2b79f5);
    let next_state = t;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = (t ^ (t >> 14)) as f64 / 4294967296.0;
    (value, next_state)
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        let (value, next) = prng_next(self.state);
        self.state = next;
        value
    }
}

/// Replays a fixed list of values, wrapping around. For tests and scripted
/// opponents.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Mulberry32::new(12345);
        let mut b = Mulberry32::new(12345);
        for _ in 0..50 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn values_in_unit_range() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "value out of range: {}", value);
        }
    }

    #[test]
    fn known_values() {
        let (v, s) = prng_next(0);
        assert_eq!(v, 0.26642920868471265);
        assert_eq!(s, 1831565813);
        let (v, s) = prng_next(s);
        assert_eq!(v, 0.0003297457005828619);
        assert_eq!(s, 3663131626);

        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_f64(), 0.6011037519201636);
        assert_eq!(rng.next_f64(), 0.44829055899754167);
    }

    #[test]
    fn scripted_values_wrap() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9]);
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
        assert_eq!(rng.next_f64(), 0.1);
    }
}
