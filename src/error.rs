//! Error types for the chaosencrypt library.

use thiserror::Error;

/// Errors produced by the cipher engine.
///
/// Every error is fatal to the `encrypt`/`decrypt` call that raised it:
/// there are no retries, no partial plaintext, no silent recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChaosError {
    /// A configuration invariant was violated at engine construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The supplied MAC does not match the MAC recomputed over the ciphertext.
    #[error("MAC verification failed")]
    MacMismatch,

    /// Fewer bytes remain than a length field or declared chunk length requires.
    #[error("ciphertext truncated: {0}")]
    TruncatedCiphertext(&'static str),

    /// A direct-mode chunk value needs more bytes than the frame provides.
    #[error("chunk value needs {needed} bytes but only {available} are available")]
    SerializationOverflow { needed: usize, available: usize },

    /// Deciphered bytes are not valid UTF-8 (wrong secret or corrupted data).
    #[error("decryption produced invalid UTF-8: wrong secret or corrupted ciphertext")]
    Decode,
}

pub type Result<T> = std::result::Result<T, ChaosError>;
