//! Credential Scheme Infrastructure
//!
//! The seam between handler/use-case logic and credential storage. The
//! shipped [`PlaintextCredentials`] stores and compares passwords verbatim,
//! which mirrors the legacy behavior this application preserves; a salted
//! one-way hash can replace it by implementing [`CredentialScheme`] without
//! touching any caller.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string whose memory is wiped on drop and whose `Debug`
/// output is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Access the secret material. Callers must not log or persist
    /// the returned slice outside a [`CredentialScheme`].
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}

/// Transforms raw credentials into their stored form and verifies
/// candidates against stored values.
pub trait CredentialScheme: Send + Sync {
    /// Produce the storable representation of a raw credential.
    fn protect(&self, raw: &Secret) -> String;

    /// Check a candidate credential against a stored representation.
    fn verify(&self, candidate: &Secret, stored: &str) -> bool;
}

/// Verbatim storage and comparison.
///
/// Passwords round-trip through the database unchanged. Kept for parity
/// with the system this one replaces; see DESIGN.md before relying on it
/// anywhere new.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialScheme for PlaintextCredentials {
    fn protect(&self, raw: &Secret) -> String {
        raw.expose().to_owned()
    }

    fn verify(&self, candidate: &Secret, stored: &str) -> bool {
        candidate.expose() == stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_roundtrip() {
        let scheme = PlaintextCredentials;
        let raw = Secret::new("Passw0rd!");

        let stored = scheme.protect(&raw);
        assert_eq!(stored, "Passw0rd!");
        assert!(scheme.verify(&raw, &stored));
    }

    #[test]
    fn test_plaintext_rejects_mismatch() {
        let scheme = PlaintextCredentials;
        let stored = scheme.protect(&Secret::new("Passw0rd!"));

        assert!(!scheme.verify(&Secret::new("passw0rd!"), &stored));
        assert!(!scheme.verify(&Secret::new(""), &stored));
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = Secret::new("hunter2");
        let debug = format!("{:?}", secret);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }
}
