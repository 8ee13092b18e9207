//! Random element identifiers in UUID version-4 layout.
//!
//! These are convenience ids for tagging DOM nodes, drawn from a
//! non-cryptographic generator.

use rand::Rng;
use uuid::Builder;

/// Generate a lowercase, hyphenated, 36-character v4 UUID string.
#[must_use]
pub fn generate_uuid() -> String {
    generate_uuid_with(&mut rand::rng())
}

/// [`generate_uuid`] with a caller-supplied generator.
pub fn generate_uuid_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid_from_words(rng.random())
}

/// Format four 32-bit words as a v4 UUID.
///
/// Each word contributes its bytes least-significant first. The version
/// nibble is forced to `4` and the variant bits to `10`.
#[must_use]
pub fn uuid_from_words(words: [u32; 4]) -> String {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
