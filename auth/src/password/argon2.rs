use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Well-formed Argon2id digest with the default cost parameters. No password maps to it
/// in practice; verifying against it costs exactly as much as a real verification.
const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$2VtZNINDRehx9b80NaBBOSbOAEh8B25SGYXckSpIrL8";

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation, so hashing the same plaintext twice
    /// yields two different digests that both verify.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash (any string, including empty)
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches; false if it does not or if `hash` is not a valid
    /// PHC string
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Verify a password against a hash that may not exist.
    ///
    /// When `hash` is `None` the password is checked against a decoy digest and the
    /// result is always false, so a missing account costs the same as a wrong password.
    pub fn verify_or_decoy(&self, password: &str, hash: Option<&str>) -> bool {
        match hash {
            Some(hash) => self.verify(password, hash),
            None => {
                let _ = self.verify(password, DECOY_HASH);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_same_password_produces_different_hashes() {
        let hasher = PasswordHasher::new();
        let password = "testpassword123";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("").expect("Failed to hash empty password");

        assert!(hasher.verify("", &hash));
        assert!(!hasher.verify(" ", &hash));
    }

    #[test]
    fn test_various_passwords_roundtrip() {
        let hasher = PasswordHasher::new();

        for password in ["short", "special!@#$%^&*()", "unicode_ñáéíóú", "MixedCase123"] {
            let hash = hasher.hash(password).expect("Failed to hash password");
            assert!(hasher.verify(password, &hash), "{password} should verify");
        }
    }

    #[test]
    fn test_verify_invalid_hash_returns_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "invalid_hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_decoy_hash_is_well_formed() {
        assert!(PasswordHash::new(DECOY_HASH).is_ok());
    }

    #[test]
    fn test_verify_or_decoy() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter22").expect("Failed to hash password");

        assert!(hasher.verify_or_decoy("hunter22", Some(&hash)));
        assert!(!hasher.verify_or_decoy("wrong", Some(&hash)));
        assert!(!hasher.verify_or_decoy("hunter22", None));
        assert!(!hasher.verify_or_decoy("", None));
    }
}
