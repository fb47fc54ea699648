//! Numeric player ids derived from a username/password pair.
//!
//! This is an identifier, not a password store: the id is a few bytes of a
//! SHA3-256 digest and offers no security guarantees.

use crate::error::{QuizError, QuizResult};
use sha3::{Digest, Sha3_256};

/// Digest length the id folding expects
const DIGEST_LEN: usize = 32;

/// Only every eighth byte of the digest contributes to the id
const FOLD_STRIDE: usize = 8;

/// Hash `username + password` into a player id
pub fn credential_id(username: &str, password: &str) -> QuizResult<i32> {
    let mut hasher = Sha3_256::new();
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    digest_to_id(&hasher.finalize())
}

/// Fold bytes 0, 8, 16 and 24 of a digest into an integer.
/// Each byte is sign-extended and the arithmetic wraps.
pub fn digest_to_id(digest: &[u8]) -> QuizResult<i32> {
    if digest.len() < DIGEST_LEN {
        return Err(QuizError::Digest(format!(
            "digest must be at least {} bytes long, got {}",
            DIGEST_LEN,
            digest.len()
        )));
    }
    Ok(digest[..DIGEST_LEN]
        .iter()
        .step_by(FOLD_STRIDE)
        .fold(0i32, |acc, &b| {
            acc.wrapping_shl(8).wrapping_add(i32::from(b as i8))
        }))
}

/// Upper-case hex rendering of a digest
pub fn digest_hex(digest: &[u8]) -> String {
    hex::encode_upper(digest)
}
