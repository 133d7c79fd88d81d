use std::fmt;
use std::str::FromStr;

use crate::user::errors::AvatarUrlError;
use crate::user::errors::EmailError;
use crate::user::errors::NameError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered account. `password_hash` is an Argon2 PHC string and never
/// leaves the service; outward representations are built field by field without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub avatar_url: Option<AvatarUrl>,
    pub password_hash: String,
}

/// User record that has not been persisted yet (no identity assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub avatar_url: Option<AvatarUrl>,
    pub password_hash: String,
}

impl NewUser {
    /// Attach the identity assigned by storage.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            avatar_url: self.avatar_url,
            password_hash: self.password_hash,
        }
    }
}

/// Server-assigned user identifier.
///
/// Stable for the lifetime of the record and never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            _ => Err(UserIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name.
///
/// Surrounding whitespace is trimmed; the result must be 1-50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 50;

    pub fn new(name: String) -> Result<Self, NameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(NameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Addresses are trimmed and
/// lower-cased on construction, so uniqueness and lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - Email exceeds 255 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let normalized = email.trim().to_lowercase();
        let length = normalized.chars().count();

        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| EmailAddress(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Optional profile picture location, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrl(String);

impl AvatarUrl {
    const MAX_LENGTH: usize = 500;

    pub fn new(url: String) -> Result<Self, AvatarUrlError> {
        let length = url.chars().count();

        if url.trim().is_empty() {
            Err(AvatarUrlError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(AvatarUrlError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(url))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password accepted at the request boundary.
///
/// Enforces the minimum length policy; it is hashed by the service and never stored.
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    /// * `Blank` - Only whitespace
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            })
        } else if password.trim().is_empty() {
            Err(PasswordPolicyError::Blank)
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub avatar_url: Option<AvatarUrl>,
    pub password: Password,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `first_name` - Validated first name
    /// * `last_name` - Validated last name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        password: Password,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            avatar_url: None,
            password,
        }
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<AvatarUrl>) -> Self {
        self.avatar_url = avatar_url;
        self
    }
}

/// Command to update an existing user with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub avatar_url: Option<AvatarUrl>,
    pub password: Option<Password>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert!(UserId::from_string("0").is_err());
        assert!(UserId::from_string("-3").is_err());
        assert!(UserId::from_string("abc").is_err());
    }

    #[test]
    fn test_person_name_is_trimmed() {
        let name = PersonName::new("  Alice ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_person_name_rejects_blank_and_long() {
        assert_eq!(PersonName::new("   ".to_string()), Err(NameError::Empty));
        assert_eq!(
            PersonName::new("x".repeat(51)),
            Err(NameError::TooLong {
                max: 50,
                actual: 51
            })
        );
    }

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  Alice@X.com ".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@x.com");
    }

    #[test]
    fn test_email_rejects_invalid() {
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_avatar_url_validation() {
        assert!(AvatarUrl::new("https://example.com/a.jpg".to_string()).is_ok());
        assert_eq!(AvatarUrl::new(" ".to_string()), Err(AvatarUrlError::Empty));
        assert!(matches!(
            AvatarUrl::new("x".repeat(501)),
            Err(AvatarUrlError::TooLong { .. })
        ));
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("hunter22".to_string()).is_ok());
        assert_eq!(
            Password::new("short".to_string()),
            Err(PasswordPolicyError::TooShort { min: 6 })
        );
        assert_eq!(
            Password::new("       ".to_string()),
            Err(PasswordPolicyError::Blank)
        );
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter22".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("hunter22"));
    }
}
