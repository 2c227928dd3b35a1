//! Login Use Case
//!
//! Authenticates a user by email and password, then creates a session.

use std::sync::Arc;

use platform::credential::{CredentialScheme, Secret};

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for the cookie
    pub session_token: String,
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    credentials: Arc<dyn CredentialScheme>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
        credentials: Arc<dyn CredentialScheme>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
            credentials,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed email cannot match an account, so it reads the same
        // as an unknown one.
        let user = match Email::new(&input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let user = user.ok_or(AuthError::EmailNotFound)?;

        let candidate = Secret::new(input.password);
        if !user.password.verify(&candidate, self.credentials.as_ref()) {
            return Err(AuthError::IncorrectPassword);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(user.user_id, ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_id: user.user_id,
        })
    }
}
