//! Password hashing.
//!
//! Stored form: `blake3$<salt_hex>$<hash_hex>`, where the hash is BLAKE3 over the 16 salt bytes
//! followed by the UTF-8 password.

use super::{decode_hex, encode_hex};
use rand::{rngs::OsRng, RngCore};

const SCHEME: &str = "blake3";
const SALT_BYTES: usize = 16;

fn digest(salt: &[u8; SALT_BYTES], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

/// Hashes `password` under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    format!(
        "{SCHEME}${}${}",
        encode_hex(&salt),
        digest(&salt, password).to_hex()
    )
}

/// Checks `password` against a stored hash. A malformed stored value never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(SCHEME), Some(salt), Some(hash), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Some(salt) = decode_hex::<SALT_BYTES>(salt) else {
        return false;
    };
    let Ok(expected) = blake3::Hash::from_hex(hash) else {
        return false;
    };
    // `blake3::Hash` equality is constant-time.
    digest(&salt, password) == expected
}
