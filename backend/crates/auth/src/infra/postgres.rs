//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{nickname::Nickname, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (
                nickname,
                password_hash
            ) VALUES ($1, $2)
            RETURNING user_id
            "#,
        )
        .bind(user.nickname.as_str())
        .bind(user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique violation: a concurrent signup won the nickname
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AuthError::NicknameTaken
            }
            _ => AuthError::Database(e),
        })?;

        Ok(UserId::from_i64(row.0))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                nickname,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                nickname,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE nickname = $1
            "#,
        )
        .bind(nickname.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_nickname(&self, nickname: &Nickname) -> AuthResult<bool> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE nickname = $1)")
                .bind(nickname.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    nickname: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let nickname = Nickname::new(self.nickname)
            .map_err(|e| AuthError::Internal(format!("Invalid nickname in store: {e}")))?;
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash in store: {e}")))?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            nickname,
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
