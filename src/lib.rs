//! # CHAOSENCRYPT — prime-based chaotic-map cipher
//!
//! A symmetric, chunked, authenticated encryption scheme. Every per-chunk
//! parameter (iteration count and keystream seed) derives deterministically
//! from a shared secret via HMAC-SHA-256, the cipher itself is the integer
//! recurrence `state = (state * prime) mod 10^precision`, and the framed
//! ciphertext is protected by a keyed MAC reduced modulo a fixed 67-digit
//! constant.
//!
//! ## Quick Start
//!
//! ```
//! use chaosencrypt::{ChaosConfig, ChaosEncrypt};
//!
//! # fn main() -> chaosencrypt::Result<()> {
//! let engine = ChaosEncrypt::new(ChaosConfig::new("my shared secret"))?;
//!
//! let (ciphertext, mac) = engine.encrypt("This is a test message.")?;
//! let plaintext = engine.decrypt(&ciphertext, mac.as_ref())?;
//! assert_eq!(plaintext, "This is a test message.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! chunker     (UTF-8 boundary-safe byte-bounded splitting)
//!     ↓ per chunk
//! keys        (HMAC-SHA-256 → iteration count k, keystream seed)
//!     ↓
//! chaos       (state = state * prime mod 10^precision)
//!     ↓
//! cipher      (XOR-keystream mode or direct-modular mode)
//!     ↓
//! frame       ([u16 BE length][bytes] per chunk, concatenated)
//!     ↓
//! mac         (HMAC-SHA-256 of the full buffer mod 10^66 + 67)
//! ```
//!
//! ## Security
//!
//! This is **not** a cryptographically vetted cipher. It is fully
//! deterministic with no per-message nonce: identical plaintext and
//! configuration always yield identical ciphertext. Direct mode's decrypt is
//! a descending-index replay of the forward map, not a proven inverse. The
//! documented behavior is preserved exactly, weaknesses included.

pub mod chaos;
pub mod chunker;
pub mod cipher;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod keys;
pub mod mac;

pub use config::{ChaosConfig, DEFAULT_PRIME};
pub use engine::ChaosEncrypt;
pub use error::{ChaosError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
