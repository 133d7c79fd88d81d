use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Carries a single identity claim (`sub`) plus the timestamps needed to bound its
/// lifetime. The subject is whatever the issuer chose to identify the holder with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity the token was issued for)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject expiring `ttl` from now.
    ///
    /// A negative `ttl` produces claims that are already expired.
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token stops being accepted at its expiration second, not after it.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
