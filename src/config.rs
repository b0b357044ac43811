//! Engine configuration.
//!
//! A `ChaosConfig` is supplied once per engine instance and never mutated.
//! Both communicating parties must agree on every field out-of-band: nothing
//! in the wire format identifies the configuration that produced a ciphertext.

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::error::{ChaosError, Result};

/// Default prime multiplier for the chaotic map.
pub const DEFAULT_PRIME: u64 = 9973;

/// Configuration for a [`ChaosEncrypt`](crate::ChaosEncrypt) engine.
#[derive(Clone)]
pub struct ChaosConfig {
    /// Decimal precision of the chaotic map; modulus = 10^precision. Range 1-100.
    pub precision: u32,
    /// Ordered prime multipliers, selected by step index. Never empty, each > 1.
    pub primes: Vec<u64>,
    /// Shared secret keying both parameter derivation and the MAC. Never empty.
    pub shared_secret: Zeroizing<Vec<u8>>,
    /// Maximum plaintext chunk size in UTF-8 bytes. Range 1-1024.
    pub chunk_size: usize,
    /// Base iteration count for the chaotic map. Range 1-100.
    pub base_k: u32,
    /// Derive a per-chunk iteration count from the keyed hash instead of `base_k`.
    pub dynamic_k: bool,
    /// XOR-keystream mode when true, direct-modular mode when false.
    pub xor_mode: bool,
    /// Compute and verify a MAC over the framed ciphertext.
    pub mac_enabled: bool,
}

impl ChaosConfig {
    /// Create a configuration with the default parameters: precision 12,
    /// primes `[9973]`, chunk size 16, base-k 6, dynamic-k/XOR/MAC all on.
    pub fn new(shared_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            precision: 12,
            primes: vec![DEFAULT_PRIME],
            shared_secret: Zeroizing::new(shared_secret.into()),
            chunk_size: 16,
            base_k: 6,
            dynamic_k: true,
            xor_mode: true,
            mac_enabled: true,
        }
    }

    /// The chaotic map modulus, 10^precision.
    pub fn modulus(&self) -> BigUint {
        BigUint::from(10u32).pow(self.precision)
    }

    /// Check every configuration invariant, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.precision < 1 || self.precision > 100 {
            return Err(ChaosError::InvalidConfig(
                "precision must be between 1 and 100".into(),
            ));
        }
        if self.primes.is_empty() {
            return Err(ChaosError::InvalidConfig(
                "at least one prime must be provided".into(),
            ));
        }
        if self.primes.iter().any(|&p| p < 2) {
            return Err(ChaosError::InvalidConfig(
                "all primes must be greater than 1".into(),
            ));
        }
        if self.shared_secret.is_empty() {
            return Err(ChaosError::InvalidConfig(
                "shared secret must be non-empty".into(),
            ));
        }
        if self.chunk_size < 1 || self.chunk_size > 1024 {
            return Err(ChaosError::InvalidConfig(
                "chunk size must be between 1 and 1024".into(),
            ));
        }
        if self.base_k < 1 || self.base_k > 100 {
            return Err(ChaosError::InvalidConfig(
                "base k must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ChaosConfig::new("secret");
        assert!(config.validate().is_ok());
        assert_eq!(config.precision, 12);
        assert_eq!(config.primes, vec![DEFAULT_PRIME]);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.base_k, 6);
        assert!(config.dynamic_k && config.xor_mode && config.mac_enabled);
    }

    #[test]
    fn test_modulus_is_power_of_ten() {
        let mut config = ChaosConfig::new("secret");
        config.precision = 3;
        assert_eq!(config.modulus(), BigUint::from(1000u32));
        config.precision = 20;
        assert_eq!(config.modulus().to_string(), format!("1{}", "0".repeat(20)));
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let mut config = ChaosConfig::new("secret");
        config.precision = 0;
        assert!(config.validate().is_err());

        let mut config = ChaosConfig::new("secret");
        config.precision = 101;
        assert!(config.validate().is_err());

        let mut config = ChaosConfig::new("secret");
        config.primes.clear();
        assert!(config.validate().is_err());

        let mut config = ChaosConfig::new("secret");
        config.primes = vec![1];
        assert!(config.validate().is_err());

        let config = ChaosConfig::new("");
        assert!(config.validate().is_err());

        let mut config = ChaosConfig::new("secret");
        config.chunk_size = 1025;
        assert!(config.validate().is_err());

        let mut config = ChaosConfig::new("secret");
        config.base_k = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_violation_reported_as_invalid_config() {
        let mut config = ChaosConfig::new("secret");
        config.chunk_size = 0;
        match config.validate() {
            Err(ChaosError::InvalidConfig(msg)) => assert!(msg.contains("chunk size")),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
