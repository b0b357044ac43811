//! Per-chunk key schedule.
//!
//! Every chunk's iteration count `k` and numeric seed derive from a single
//! HMAC-SHA-256 digest of the chunk index's decimal string, keyed by the
//! shared secret. No chunk's data or output ever feeds another chunk's
//! parameters, which is what makes chunks independently processable.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 of `data` under `key`.
pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Keyed digest of a chunk index: HMAC-SHA-256(secret, decimal index string).
fn chunk_digest(secret: &[u8], chunk_index: u64) -> [u8; 32] {
    hmac_sha256(secret, chunk_index.to_string().as_bytes())
}

/// Derive the iteration count for a chunk.
///
/// With dynamic-k disabled this is `base_k` unchanged. Otherwise the first
/// four digest bytes, read big-endian, are reduced modulo 50 and added to
/// `base_k`, floored at 1.
pub fn derive_k(secret: &[u8], chunk_index: u64, base_k: u32, dynamic_k: bool) -> u32 {
    if !dynamic_k {
        return base_k;
    }
    let digest = chunk_digest(secret, chunk_index);
    let word = u32::from_be_bytes(digest[0..4].try_into().unwrap());
    (base_k + word % 50).max(1)
}

/// Derive the keystream seed for a chunk: the first eight digest bytes, read
/// big-endian, reduced modulo the map modulus.
pub fn derive_seed(secret: &[u8], chunk_index: u64, modulus: &BigUint) -> BigUint {
    let digest = chunk_digest(secret, chunk_index);
    let word = u64::from_be_bytes(digest[0..8].try_into().unwrap());
    BigUint::from(word) % modulus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_k_returns_base_unchanged() {
        for base in [1u32, 6, 100] {
            assert_eq!(derive_k(b"secret", 0, base, false), base);
            assert_eq!(derive_k(b"secret", 99, base, false), base);
        }
    }

    #[test]
    fn test_dynamic_k_range_and_floor() {
        for index in 0..64u64 {
            let k = derive_k(b"test_secret", index, 6, true);
            assert!((6..6 + 50).contains(&k));
            assert!(k >= 1);
        }
    }

    #[test]
    fn test_derivations_are_pure() {
        let modulus = BigUint::from(10u32).pow(12);
        for index in [0u64, 1, 7, 1000] {
            assert_eq!(
                derive_k(b"test_secret", index, 6, true),
                derive_k(b"test_secret", index, 6, true)
            );
            assert_eq!(
                derive_seed(b"test_secret", index, &modulus),
                derive_seed(b"test_secret", index, &modulus)
            );
        }
    }

    #[test]
    fn test_seed_below_modulus() {
        let modulus = BigUint::from(10u32).pow(3);
        for index in 0..32u64 {
            assert!(derive_seed(b"secret", index, &modulus) < modulus);
        }
    }

    #[test]
    fn test_different_secrets_diverge() {
        let modulus = BigUint::from(10u32).pow(12);
        let a: Vec<_> = (0..8u64).map(|i| derive_seed(b"secret_a", i, &modulus)).collect();
        let b: Vec<_> = (0..8u64).map(|i| derive_seed(b"secret_b", i, &modulus)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_index_keyed_by_decimal_string() {
        // Index 10 must hash the two-byte string "10", not the byte 0x0a.
        let by_string = hmac_sha256(b"secret", b"10");
        let digest = chunk_digest(b"secret", 10);
        assert_eq!(digest, by_string);
    }
}
