//! Chaotic map over a decimal modulus.
//!
//! The map is the integer recurrence `state' = (state * prime) mod 10^precision`,
//! stepped by a rotating list of prime multipliers. It doubles as the keystream
//! source for XOR mode and as the direct-mode permutation.

use num_bigint::BigUint;

/// Prime-multiplier chaotic map.
///
/// State is always a non-negative integer strictly below the modulus. The map
/// is deterministic and total: any starting state and step index are accepted.
pub struct ChaoticMap {
    modulus: BigUint,
    primes: Vec<u64>,
}

impl ChaoticMap {
    /// Create a map with modulus 10^precision and the given prime rotation.
    pub fn new(precision: u32, primes: &[u64]) -> Self {
        Self {
            modulus: BigUint::from(10u32).pow(precision),
            primes: primes.to_vec(),
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// One step of the map: multiply by the prime selected by `step_index`
    /// (modulo the rotation length) and reduce modulo 10^precision.
    pub fn step(&self, state: &BigUint, step_index: u64) -> BigUint {
        let prime = self.primes[(step_index % self.primes.len() as u64) as usize];
        (state * prime) % &self.modulus
    }

    /// Apply `k` steps with ascending step indices `0..k`.
    pub fn iterate(&self, state: BigUint, k: u32) -> BigUint {
        (0..k as u64).fold(state, |s, i| self.step(&s, i))
    }

    /// Replay `k` steps with descending step indices `k-1..=0`.
    ///
    /// This is the documented direct-mode decrypt sequence. It is not a
    /// modular inverse of [`iterate`](Self::iterate).
    pub fn iterate_rev(&self, state: BigUint, k: u32) -> BigUint {
        (0..k as u64).rev().fold(state, |s, i| self.step(&s, i))
    }

    /// Generate exactly `length` keystream bytes.
    ///
    /// The state is warmed up with steps `0..k`, then each byte is the low
    /// eight bits of the state, advancing with the constant step index `k`.
    /// After warm-up the recurrence is therefore a fixed-multiplier map.
    pub fn keystream(&self, length: usize, seed: &BigUint, k: u32) -> Vec<u8> {
        let mut state = self.iterate(seed.clone(), k);

        let mut out = Vec::with_capacity(length);
        for _ in 0..length {
            out.push(low_byte(&state));
            state = self.step(&state, k as u64);
        }
        out
    }
}

/// Lowest byte of a big integer (value mod 256).
fn low_byte(value: &BigUint) -> u8 {
    value.iter_u64_digits().next().unwrap_or(0) as u8
}
