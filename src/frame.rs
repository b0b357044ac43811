//! Length-prefixed ciphertext framing.
//!
//! The wire format is the bare concatenation of frames, each a 2-byte
//! big-endian length followed by that many ciphertext bytes. There is no
//! overall header, version tag, or chunk count: chunk order exists only as
//! frame position.

use crate::error::{ChaosError, Result};

/// Frame length field width in bytes.
const LEN_FIELD: usize = 2;

/// Serialize chunk ciphertexts, in index order, into one buffer.
pub fn serialize(frames: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = frames.iter().map(|f| LEN_FIELD + f.len()).sum();
    let mut out = Vec::with_capacity(total);
    for frame in frames {
        debug_assert!(frame.len() <= u16::MAX as usize);
        out.extend_from_slice(&(frame.len() as u16).to_be_bytes());
        out.extend_from_slice(frame);
    }
    out
}

/// Parse a buffer back into ordered chunk ciphertexts.
///
/// Reads length/payload pairs until the buffer is exhausted. Fails if fewer
/// than two bytes remain where a length field is expected, or fewer bytes
/// remain than a length field declares.
pub fn parse(buf: &[u8]) -> Result<Vec<Vec<u8>>> {
    let mut frames = Vec::new();
    let mut idx = 0;

    while idx < buf.len() {
        if idx + LEN_FIELD > buf.len() {
            return Err(ChaosError::TruncatedCiphertext(
                "no space for chunk length field",
            ));
        }
        let len = u16::from_be_bytes([buf[idx], buf[idx + 1]]) as usize;
        idx += LEN_FIELD;

        if idx + len > buf.len() {
            return Err(ChaosError::TruncatedCiphertext(
                "chunk length extends beyond buffer",
            ));
        }
        frames.push(buf[idx..idx + len].to_vec());
        idx += len;
    }
    Ok(frames)
}
