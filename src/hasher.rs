use sha2::{Digest, Sha256};

/// Length of a fingerprint in hex characters
pub const HASH_LEN: usize = 64;

/// Compute the SHA256 fingerprint of a chunk's text.
///
/// Used for deduplication downstream, the same text always yields the same
/// lowercase hex digest.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
