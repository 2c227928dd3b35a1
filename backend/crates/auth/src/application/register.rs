//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::credential::CredentialScheme;

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    password::{RawPassword, StoredPassword},
    user_name::UserName,
};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    credentials: Arc<dyn CredentialScheme>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, credentials: Arc<dyn CredentialScheme>) -> Self {
        Self {
            user_repo,
            credentials,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Format checks run username -> email -> password; the first failure
        // short-circuits with its specific message.
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let raw_password =
            RawPassword::new(input.password).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Duplicate checks: username first, then email.
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = StoredPassword::from_raw(&raw_password, self.credentials.as_ref());

        let user = self
            .user_repo
            .create(&NewUser::new(user_name, email, password))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
