//! Auth (Accounts & Sessions) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - SQLite repository
//! - `presentation/` - HTML handlers, forms, router, session middleware
//!
//! ## Features
//! - User registration with username/email/password validation
//! - Email + password login, server-side sessions with signed cookie tokens
//! - Session gate middleware that redirects unauthenticated requests
//!
//! ## Security Model
//! - Session tokens are `<uuid>.<HMAC-SHA256 signature>`, secret held server-side
//! - Sessions expire after a configurable TTL and are swept at startup
//! - Credentials go through `platform::credential::CredentialScheme`; the
//!   shipped scheme is plaintext-verbatim (preserved legacy behavior, see
//!   DESIGN.md)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::{CurrentUser, SessionGate, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
