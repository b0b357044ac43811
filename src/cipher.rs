//! The two chunk-ciphering strategies.
//!
//! XOR mode masks a chunk with chaotic-map keystream bytes and is its own
//! inverse. Direct mode treats the whole chunk as one big-endian integer and
//! pushes it through the map; its decrypt replays the steps with descending
//! indices, exactly as documented, which is not a modular inverse.

use num_bigint::BigUint;

use crate::chaos::ChaoticMap;
use crate::error::{ChaosError, Result};

/// XOR `data` with `keystream` byte-wise. Encrypt and decrypt are identical.
pub fn xor_bytes(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter().zip(keystream).map(|(a, b)| a ^ b).collect()
}

/// Direct-mode encrypt: reduce the chunk's big-endian value modulo the map
/// modulus, apply steps `0..k` ascending, serialize back into the chunk's
/// original byte length.
pub fn direct_encrypt(map: &ChaoticMap, chunk: &[u8], k: u32) -> Result<Vec<u8>> {
    let state = BigUint::from_bytes_be(chunk) % map.modulus();
    to_fixed_be(&map.iterate(state, k), chunk.len())
}

/// Direct-mode decrypt: take the ciphertext's big-endian value unreduced and
/// replay steps `k-1..=0` descending, serializing into the frame's length.
pub fn direct_decrypt(map: &ChaoticMap, chunk: &[u8], k: u32) -> Result<Vec<u8>> {
    let state = BigUint::from_bytes_be(chunk);
    to_fixed_be(&map.iterate_rev(state, k), chunk.len())
}

/// Serialize `value` big-endian into exactly `len` bytes, zero-padded on the
/// left. Errors instead of truncating when the value does not fit.
fn to_fixed_be(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    // Zero fits any width, including a zero-length frame.
    if value.bits() == 0 {
        return Ok(vec![0u8; len]);
    }
    let bytes = value.to_bytes_be();
    if bytes.len() > len {
        return Err(ChaosError::SerializationOverflow {
            needed: bytes.len(),
            available: len,
        });
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}
