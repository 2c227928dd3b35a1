//! Use-case tests for the auth crate
//!
//! Run against an in-memory SQLite database with the real schema so the
//! repository implementation is exercised too.

use std::sync::Arc;

use platform::credential::PlaintextCredentials;
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::{
    CurrentSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;
use crate::infra::sqlite::SqliteAuthRepository;
use kernel::id::UserId;

const SCHEMA: &str = include_str!("../../../../database/migrations/0001_init.sql");

async fn setup_repo() -> Arc<SqliteAuthRepository> {
    // A single connection keeps every statement on the same in-memory db.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("apply schema");

    Arc::new(SqliteAuthRepository::new(pool))
}

fn register_use_case(repo: Arc<SqliteAuthRepository>) -> RegisterUseCase<SqliteAuthRepository> {
    RegisterUseCase::new(repo, Arc::new(PlaintextCredentials))
}

fn login_use_case(
    repo: Arc<SqliteAuthRepository>,
    config: Arc<AuthConfig>,
) -> LoginUseCase<SqliteAuthRepository, SqliteAuthRepository> {
    LoginUseCase::new(repo.clone(), repo, config, Arc::new(PlaintextCredentials))
}

fn input(user_name: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        user_name: user_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Insert a bare user row (id 1) for tests that build sessions directly.
async fn seed_user(repo: &SqliteAuthRepository) {
    sqlx::raw_sql(
        r#"
        INSERT INTO users (user_name, email, password, created_at)
        VALUES ('testuser', 't@example.com', 'Passw0rd!', '2026-01-01T00:00:00Z');
        "#,
    )
    .execute(repo.pool())
    .await
    .expect("seed user");
}

async fn user_count(repo: &SqliteAuthRepository) -> i64 {
    // Peeking at the table directly keeps assertions independent of the
    // repository's own queries.
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(repo.pool())
        .await
        .unwrap()
}

#[cfg(test)]
mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_creates_one_row() {
        let repo = setup_repo().await;
        let use_case = register_use_case(repo.clone());

        let output = use_case
            .execute(input("testuser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap();

        assert_eq!(output.user_id, UserId::from_i64(1));
        assert_eq!(user_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_user_name_rejected() {
        let repo = setup_repo().await;
        let use_case = register_use_case(repo.clone());

        use_case
            .execute(input("testuser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap();

        // Same username, different email
        let err = use_case
            .execute(input("testuser", "other@example.com", "Passw0rd!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNameTaken));
        assert_eq!(user_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = setup_repo().await;
        let use_case = register_use_case(repo.clone());

        use_case
            .execute(input("testuser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("otheruser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(user_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn test_validation_runs_username_first() {
        let repo = setup_repo().await;
        let use_case = register_use_case(repo.clone());

        // Username and email are both invalid; the username message wins.
        let err = use_case
            .execute(input("ab", "not-an-email", "Passw0rd!"))
            .await
            .unwrap_err();

        match err {
            AuthError::Validation(msg) => assert!(msg.contains("Username")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(user_count(&repo).await, 0);
    }

    #[tokio::test]
    async fn test_invalid_password_rejected() {
        let repo = setup_repo().await;
        let use_case = register_use_case(repo.clone());

        let err = use_case
            .execute(input("testuser", "t@example.com", "password"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(user_count(&repo).await, 0);
    }
}

#[cfg(test)]
mod login_tests {
    use super::*;

    async fn registered_repo() -> Arc<SqliteAuthRepository> {
        let repo = setup_repo().await;
        register_use_case(repo.clone())
            .execute(input("testuser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_login_success_creates_session() {
        let repo = registered_repo().await;
        let config = Arc::new(AuthConfig::development());

        let output = login_use_case(repo.clone(), config.clone())
            .execute(LoginInput {
                email: "t@example.com".to_string(),
                password: "Passw0rd!".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_id, UserId::from_i64(1));

        // The token resolves back to a live session
        let session = CurrentSessionUseCase::new(repo, config)
            .get(&output.session_token)
            .await
            .unwrap();
        assert_eq!(session.user_id, UserId::from_i64(1));
    }

    #[tokio::test]
    async fn test_unknown_email_rejected() {
        let repo = registered_repo().await;
        let config = Arc::new(AuthConfig::development());

        let err = login_use_case(repo, config)
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "Passw0rd!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailNotFound));
    }

    #[tokio::test]
    async fn test_malformed_email_reads_as_unknown() {
        let repo = registered_repo().await;
        let config = Arc::new(AuthConfig::development());

        let err = login_use_case(repo, config)
            .execute(LoginInput {
                email: "not-an-email".to_string(),
                password: "Passw0rd!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailNotFound));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let repo = registered_repo().await;
        let config = Arc::new(AuthConfig::development());

        let err = login_use_case(repo, config)
            .execute(LoginInput {
                email: "t@example.com".to_string(),
                password: "WrongPass1!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::IncorrectPassword));
    }

    #[tokio::test]
    async fn test_password_comparison_is_verbatim() {
        let repo = registered_repo().await;
        let config = Arc::new(AuthConfig::development());

        // Case differs - must not match
        let err = login_use_case(repo, config)
            .execute(LoginInput {
                email: "t@example.com".to_string(),
                password: "passw0rd!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::IncorrectPassword));
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    async fn logged_in(
        repo: &Arc<SqliteAuthRepository>,
        config: &Arc<AuthConfig>,
    ) -> String {
        register_use_case(repo.clone())
            .execute(input("testuser", "t@example.com", "Passw0rd!"))
            .await
            .unwrap();

        login_use_case(repo.clone(), config.clone())
            .execute(LoginInput {
                email: "t@example.com".to_string(),
                password: "Passw0rd!".to_string(),
            })
            .await
            .unwrap()
            .session_token
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let repo = setup_repo().await;
        let config = Arc::new(AuthConfig::development());
        let token = logged_in(&repo, &config).await;

        LogoutUseCase::new(repo.clone(), config.clone())
            .execute(&token)
            .await
            .unwrap();

        let err = CurrentSessionUseCase::new(repo, config)
            .get(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let repo = setup_repo().await;
        let config = Arc::new(AuthConfig::development());
        let token = logged_in(&repo, &config).await;

        let use_case = LogoutUseCase::new(repo, config);
        use_case.execute(&token).await.unwrap();
        // Second logout of the same session still succeeds
        use_case.execute(&token).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_deleted() {
        let repo = setup_repo().await;
        let config = Arc::new(AuthConfig::development());
        seed_user(&repo).await;

        // Insert an already-expired session directly
        let session = Session::new(UserId::from_i64(1), chrono::Duration::milliseconds(-1000));
        SessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();

        let token = crate::application::token::sign_session_token(
            &config.session_secret,
            session.session_id,
        );

        let use_case = CurrentSessionUseCase::new(repo.clone(), config);
        let err = use_case.get(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));

        // Lazy deletion removed the row
        let remaining = SessionRepository::find_by_id(repo.as_ref(), session.session_id)
            .await
            .unwrap();
        assert!(remaining.is_none());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let repo = setup_repo().await;
        let config = Arc::new(AuthConfig::development());

        let use_case = CurrentSessionUseCase::new(repo, config);
        assert!(use_case.get("garbage").await.is_err());
        assert_eq!(use_case.current_user_id(None).await, None);
        assert_eq!(use_case.current_user_id(Some("garbage")).await, None);
    }

    #[tokio::test]
    async fn test_startup_sweep_removes_expired_only() {
        let repo = setup_repo().await;
        seed_user(&repo).await;

        let expired = Session::new(UserId::from_i64(1), chrono::Duration::milliseconds(-1000));
        let live = Session::new(UserId::from_i64(1), chrono::Duration::hours(1));
        SessionRepository::create(repo.as_ref(), &expired)
            .await
            .unwrap();
        SessionRepository::create(repo.as_ref(), &live).await.unwrap();

        let deleted = repo.sweep_expired_sessions().await.unwrap();
        assert_eq!(deleted, 1);

        assert!(
            SessionRepository::find_by_id(repo.as_ref(), live.session_id)
                .await
                .unwrap()
                .is_some()
        );
    }
}
