//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::entity::{session::Session, user::NewUser, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, password::StoredPassword, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Remove expired sessions. Called at startup.
    pub async fn sweep_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < ?1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_name,
                email,
                password,
                created_at
            ) VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(User {
            user_id: UserId::from_i64(result.last_insert_rowid()),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            created_at: user.created_at,
        })
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                email,
                password,
                created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = ?1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for SqliteAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                expires_at_ms,
                created_at
            ) VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(session.session_id.to_string())
        .bind(session.user_id.as_i64())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                expires_at_ms,
                created_at
            FROM sessions
            WHERE session_id = ?1
            "#,
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = ?1")
            .bind(session_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.sweep_expired_sessions().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    user_name: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_i64(self.user_id),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            password: StoredPassword::from_db(self.password),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: String,
    user_id: i64,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthResult<Session> {
        let session_id = self
            .session_id
            .parse::<Uuid>()
            .map_err(|e| AuthError::Internal(format!("Invalid session_id: {}", e)))?;

        Ok(Session {
            session_id,
            user_id: UserId::from_i64(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        })
    }
}
