//! Engine orchestration.
//!
//! `encrypt` runs chunker → per-chunk key schedule + cipher → framer → MAC;
//! `decrypt` is the inverse with MAC verification up front. The engine holds
//! only the immutable configuration, so a single instance is safe to share
//! across threads and reuse for any number of calls.
//!
//! Chunks depend only on their own index, the shared secret, and the
//! configuration, so ciphering is parallelized with rayon; frames are
//! reassembled strictly in chunk-index order.

use num_bigint::BigUint;
use rayon::prelude::*;
use tracing::debug;

use crate::chaos::ChaoticMap;
use crate::chunker;
use crate::cipher;
use crate::config::ChaosConfig;
use crate::error::{ChaosError, Result};
use crate::frame;
use crate::keys;
use crate::mac;

/// The chaotic-map cipher engine.
pub struct ChaosEncrypt {
    config: ChaosConfig,
    map: ChaoticMap,
}

impl ChaosEncrypt {
    /// Build an engine from a configuration, validating every invariant.
    pub fn new(config: ChaosConfig) -> Result<Self> {
        config.validate()?;
        let map = ChaoticMap::new(config.precision, &config.primes);
        Ok(Self { config, map })
    }

    /// Encrypt a plaintext string.
    ///
    /// Returns the framed ciphertext buffer and, when MAC is enabled, the MAC
    /// over that exact buffer. Identical configuration and plaintext always
    /// produce byte-identical output: there is no nonce or randomness.
    pub fn encrypt(&self, plaintext: &str) -> Result<(Vec<u8>, Option<BigUint>)> {
        let chunks = chunker::split(plaintext, self.config.chunk_size);

        let frames = chunks
            .par_iter()
            .enumerate()
            .map(|(index, chunk)| self.encipher_chunk(index as u64, chunk.as_bytes()))
            .collect::<Result<Vec<_>>>()?;

        let ciphertext = frame::serialize(&frames);
        let mac = self
            .config
            .mac_enabled
            .then(|| mac::compute(&self.config.shared_secret, &ciphertext));

        debug!(
            chunks = frames.len(),
            bytes = ciphertext.len(),
            mac = mac.is_some(),
            "encrypted"
        );
        Ok((ciphertext, mac))
    }

    /// Decrypt a framed ciphertext buffer.
    ///
    /// When MAC is enabled and a MAC value is supplied, it is verified before
    /// anything is parsed; a mismatch aborts immediately with no partial
    /// plaintext. The deciphered chunks are concatenated and the whole buffer
    /// decoded as UTF-8.
    pub fn decrypt(&self, ciphertext: &[u8], received_mac: Option<&BigUint>) -> Result<String> {
        if self.config.mac_enabled {
            if let Some(received) = received_mac {
                if !mac::verify(&self.config.shared_secret, ciphertext, received) {
                    return Err(ChaosError::MacMismatch);
                }
            }
        }

        let frames = frame::parse(ciphertext)?;

        let deciphered = frames
            .par_iter()
            .enumerate()
            .map(|(index, chunk)| self.decipher_chunk(index as u64, chunk))
            .collect::<Result<Vec<_>>>()?;

        let plaintext = String::from_utf8(deciphered.concat()).map_err(|_| ChaosError::Decode)?;

        debug!(chunks = frames.len(), bytes = plaintext.len(), "decrypted");
        Ok(plaintext)
    }

    fn encipher_chunk(&self, index: u64, chunk: &[u8]) -> Result<Vec<u8>> {
        let secret = &self.config.shared_secret;
        let k = keys::derive_k(secret, index, self.config.base_k, self.config.dynamic_k);

        if self.config.xor_mode {
            let seed = keys::derive_seed(secret, index, self.map.modulus());
            let keystream = self.map.keystream(chunk.len(), &seed, k);
            Ok(cipher::xor_bytes(chunk, &keystream))
        } else {
            cipher::direct_encrypt(&self.map, chunk, k)
        }
    }

    fn decipher_chunk(&self, index: u64, chunk: &[u8]) -> Result<Vec<u8>> {
        let secret = &self.config.shared_secret;
        let k = keys::derive_k(secret, index, self.config.base_k, self.config.dynamic_k);

        if self.config.xor_mode {
            let seed = keys::derive_seed(secret, index, self.map.modulus());
            let keystream = self.map.keystream(chunk.len(), &seed, k);
            Ok(cipher::xor_bytes(chunk, &keystream))
        } else {
            cipher::direct_decrypt(&self.map, chunk, k)
        }
    }
}
