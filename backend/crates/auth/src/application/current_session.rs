//! Current Session Use Case
//!
//! Resolves a cookie token to a live session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Current session use case
pub struct CurrentSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CurrentSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Verify the token and load the session.
    ///
    /// Expired rows are deleted on access so the table does not accumulate
    /// between startup sweeps.
    pub async fn get(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = parse_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }

    /// The authenticated user id, or `None` when unauthenticated.
    pub async fn current_user_id(&self, session_token: Option<&str>) -> Option<UserId> {
        match session_token {
            Some(token) => self.get(token).await.ok().map(|s| s.user_id),
            None => None,
        }
    }
}
