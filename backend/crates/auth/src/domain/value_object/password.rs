//! Password Value Objects
//!
//! [`RawPassword`] is the validated user input; [`StoredPassword`] is the
//! database representation produced by a `CredentialScheme`. The shipped
//! scheme stores passwords verbatim - the split between the two types is
//! the seam that lets a hashing scheme slot in without touching use cases.
//!
//! ## Policy
//! - 8 to 16 characters
//! - at least one ASCII letter, one digit, and one of `@$!%*?&`
//! - no characters outside letters, digits, and that special set

use platform::credential::{CredentialScheme, Secret};
use std::fmt;
use thiserror::Error;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 16;

/// Special characters a password must draw from (and may only use)
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when password validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("Password is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one of @$!%*?&")]
    MissingSpecial,

    #[error("Password may only contain letters, digits, and @$!%*?&")]
    InvalidCharacter,
}

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Validated raw password from user input.
///
/// Memory is zeroized on drop and `Debug` output is redacted.
pub struct RawPassword(Secret);

impl RawPassword {
    /// Create a new raw password with policy validation
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        let secret = Secret::new(raw);
        Self::validate(secret.expose())?;
        Ok(Self(secret))
    }

    fn validate(s: &str) -> Result<(), PasswordPolicyError> {
        let length = s.chars().count();
        if length < PASSWORD_MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                length,
                min: PASSWORD_MIN_LENGTH,
            });
        }
        if length > PASSWORD_MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                length,
                max: PASSWORD_MAX_LENGTH,
            });
        }

        if s.chars().any(|c| {
            !c.is_ascii_alphabetic() && !c.is_ascii_digit() && !PASSWORD_SPECIAL_CHARS.contains(&c)
        }) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if !s.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PasswordPolicyError::MissingLetter);
        }
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !s.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c)) {
            return Err(PasswordPolicyError::MissingSpecial);
        }

        Ok(())
    }

    /// Access the secret material
    pub fn secret(&self) -> &Secret {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Stored Password (database representation)
// ============================================================================

/// Password as persisted, in whatever form the credential scheme produced.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredPassword(String);

impl StoredPassword {
    /// Produce the storable form of a validated raw password
    pub fn from_raw(raw: &RawPassword, scheme: &dyn CredentialScheme) -> Self {
        Self(scheme.protect(raw.secret()))
    }

    /// Create from database value
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Stored representation, for database binding only
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a login candidate against the stored value.
    ///
    /// The candidate is deliberately NOT policy-validated: a wrong guess
    /// that happens to break the policy must still read as "incorrect
    /// password", not as a validation error.
    pub fn verify(&self, candidate: &Secret, scheme: &dyn CredentialScheme) -> bool {
        scheme.verify(candidate, &self.0)
    }
}

impl fmt::Debug for StoredPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoredPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
