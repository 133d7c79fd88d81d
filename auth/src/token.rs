use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Process-wide signing configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct TokenSettings {
    /// Shared HMAC secret
    pub secret: String,
    /// Algorithm identifier, e.g. `HS256`
    pub algorithm: String,
    /// Lifetime applied when the caller does not pass one
    pub default_ttl: Duration,
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

/// Issues and verifies time-bounded bearer tokens carrying a single subject claim.
///
/// Stateless: nothing is stored server-side, so validity is decided only by the
/// signature and the expiration at verification time.
pub struct TokenService {
    jwt_handler: JwtHandler,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a token service from signing settings.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - The configured algorithm is not a supported HMAC variant
    pub fn new(settings: &TokenSettings) -> Result<Self, JwtError> {
        Ok(Self {
            jwt_handler: JwtHandler::new(settings.secret.as_bytes(), &settings.algorithm)?,
            default_ttl: settings.default_ttl,
        })
    }

    /// Lifetime of tokens issued without an explicit TTL.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `subject` using the default lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, ttl);
        let token = self.jwt_handler.encode(&claims)?;
        tracing::debug!(expires_at = claims.exp, "Access token issued");
        Ok(token)
    }

    /// Verify a token and return its subject.
    ///
    /// Every failure (bad signature, malformed token, expired, missing subject) yields
    /// `None` with no further detail.
    pub fn verify(&self, token: &str) -> Option<String> {
        let claims: Claims = match self.jwt_handler.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(reason = %e, "Token rejected");
                return None;
            }
        };

        if claims.is_expired(Utc::now().timestamp()) {
            tracing::debug!("Token rejected: expired");
            return None;
        }

        if claims.sub.is_empty() {
            tracing::debug!("Token rejected: empty subject");
            return None;
        }

        Some(claims.sub)
    }
}
