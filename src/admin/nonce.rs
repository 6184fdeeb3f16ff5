//! # Authenticity Tokens
//!
//! Short-lived tokens that tie an admin request to the session that loaded
//! the form, in the style of WordPress nonces.
//!
//! Time is cut into ticks of half a lifetime. A token is a hash of the secret,
//! the tick, the action and the session, and it is accepted during the tick it
//! was issued in and the one after. Its real lifetime is therefore between
//! half and all of the configured one.

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of an issued token, in hex characters.
const TOKEN_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NonceError {
    #[error("Missing authenticity token")]
    Missing,

    #[error("Invalid or expired authenticity token")]
    Invalid,
}

/// How far into its validity window an accepted token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceAge {
    /// Issued during the current tick.
    Fresh,
    /// Issued during the previous tick.
    Aging,
}

#[derive(Clone)]
pub struct NonceIssuer {
    secret: String,
    lifetime_secs: u64,
}

impl std::fmt::Debug for NonceIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceIssuer")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}

impl NonceIssuer {
    pub fn new(secret: impl Into<String>, lifetime_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_secs: lifetime_secs.max(2),
        }
    }

    pub fn create(&self, action: &str, session: &str) -> String {
        self.create_at(action, session, now_secs())
    }

    pub fn verify(&self, token: &str, action: &str, session: &str) -> Result<NonceAge, NonceError> {
        self.verify_at(token, action, session, now_secs())
    }

    /// Issues the token valid for `action` and `session` at `now` (Unix seconds).
    pub fn create_at(&self, action: &str, session: &str, now: u64) -> String {
        self.token(self.tick(now), action, session)
    }

    pub fn verify_at(
        &self,
        token: &str,
        action: &str,
        session: &str,
        now: u64,
    ) -> Result<NonceAge, NonceError> {
        if token.is_empty() {
            return Err(NonceError::Missing);
        }
        let tick = self.tick(now);
        if constant_time_eq(token, &self.token(tick, action, session)) {
            return Ok(NonceAge::Fresh);
        }
        if tick > 0 && constant_time_eq(token, &self.token(tick - 1, action, session)) {
            return Ok(NonceAge::Aging);
        }
        Err(NonceError::Invalid)
    }

    fn tick(&self, now: u64) -> u64 {
        now.div_ceil(self.lifetime_secs / 2)
    }

    fn token(&self, tick: u64, action: &str, session: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(format!("|{tick}|{action}|{session}").as_bytes());
        let mut token = hex::encode(hasher.finalize());
        token.truncate(TOKEN_LEN);
        token
    }
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
