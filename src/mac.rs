//! Keyed message authentication over the framed ciphertext.
//!
//! The MAC is the HMAC-SHA-256 digest of the full ciphertext buffer,
//! interpreted as a big-endian integer and reduced modulo a fixed 67-digit
//! constant. It travels out-of-band as a decimal string and is never embedded
//! in the ciphertext.

use num_bigint::BigUint;

use crate::keys::hmac_sha256;

/// The fixed MAC modulus: the digit 1, sixty-four zeros, then 67
/// (10^66 + 67). Process-wide constant, not configuration.
pub fn mac_modulus() -> BigUint {
    BigUint::from(10u32).pow(66) + 67u32
}

/// Compute the MAC of `data` under `secret`.
pub fn compute(secret: &[u8], data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&hmac_sha256(secret, data)) % mac_modulus()
}

/// Recompute and compare for exact equality.
pub fn verify(secret: &[u8], data: &[u8], received: &BigUint) -> bool {
    compute(secret, data) == *received
}
