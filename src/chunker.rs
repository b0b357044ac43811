//! UTF-8 boundary-safe chunking.
//!
//! Plaintext is split into byte-bounded chunks by accumulating whole Unicode
//! codepoints. A codepoint is never split across chunks, so every chunk is
//! itself valid UTF-8.

/// Split `text` into chunks of at most `max_bytes` UTF-8 bytes.
///
/// The accumulator is flushed whenever appending the next codepoint would
/// exceed `max_bytes`, even when it is empty: a codepoint wider than
/// `max_bytes` becomes its own oversized chunk, and at the very start of the
/// input the flush emits a leading empty chunk. Empty input produces zero
/// chunks.
pub fn split(text: &str, max_bytes: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if current.len() + ch.len_utf8() > max_bytes {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
