//! Session tokens.
//!
//! Format: `mk1.<user>.<expires>.<mac>`, where `<user>` is the numeric user id, `<expires>` is a
//! Unix timestamp in seconds and `<mac>` is the hex BLAKE3 keyed hash of `mk1.<user>.<expires>`.

use crate::model::UserId;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use thiserror::Error;

const PREFIX: &str = "mk1";
const KEY_CONTEXT: &str = "marketplace 2024 session token v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Not authorized, no token")]
    MissingToken,

    #[error("Not authorized, token failed")]
    InvalidFormat,

    #[error("Not authorized, token failed")]
    BadSignature,

    #[error("Not authorized, token expired")]
    Expired,
}

/// Issues and checks session tokens under a key derived from the configured secret.
#[derive(Clone)]
pub struct TokenSigner {
    key: [u8; 32],
    ttl: Duration,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"**redacted**")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenSigner {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            ttl,
        }
    }

    fn mac(&self, payload: &str) -> blake3::Hash {
        blake3::keyed_hash(&self.key, payload.as_bytes())
    }

    /// A token for `user` that expires `ttl` after `now`.
    pub fn issue(&self, user: UserId, now: DateTime<Utc>) -> String {
        let payload = format!("{PREFIX}.{}.{}", user.0, (now + self.ttl).timestamp());
        let mac = self.mac(&payload);
        format!("{payload}.{}", mac.to_hex())
    }

    /// The user a token was issued to, if the token is well formed, signed by this key and not
    /// yet expired at `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthError> {
        let (payload, mac) = token.rsplit_once('.').ok_or(AuthError::InvalidFormat)?;
        let mut fields = payload.split('.');
        let (Some(PREFIX), Some(user), Some(expires), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(AuthError::InvalidFormat);
        };
        let user: u32 = user.parse().map_err(|_| AuthError::InvalidFormat)?;
        let expires: i64 = expires.parse().map_err(|_| AuthError::InvalidFormat)?;
        let mac = blake3::Hash::from_hex(mac).map_err(|_| AuthError::InvalidFormat)?;

        if self.mac(payload) != mac {
            return Err(AuthError::BadSignature);
        }
        if now.timestamp() >= expires {
            return Err(AuthError::Expired);
        }
        Ok(UserId(user))
    }
}
