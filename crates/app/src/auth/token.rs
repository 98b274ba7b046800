//! Admin session token generation and hashing.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Session token prefix.
pub const SESSION_TOKEN_PREFIX: &str = "kt";

/// Number of random bytes encoded in a token.
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Generates a new session token: `kt_` followed by 64 hex characters.
#[must_use]
pub fn generate_session_token() -> String {
    let mut secret = [0_u8; SESSION_TOKEN_BYTES];

    OsRng.fill_bytes(&mut secret);

    let mut token = String::with_capacity(SESSION_TOKEN_PREFIX.len() + 1 + SESSION_TOKEN_BYTES * 2);

    token.push_str(SESSION_TOKEN_PREFIX);
    token.push('_');

    for byte in secret {
        token.push_str(&format!("{byte:02x}"));
    }

    token
}

/// SHA-256 of a secret, hex encoded. Only hashes are ever held in memory.
#[must_use]
pub fn hash_secret(secret: &str) -> String {
    format!("{:x}", Sha256::digest(secret.as_bytes()))
}
