use crate::domain::{User, UserId};
use crate::ports::user_repository::{Result, UserRepository as UserRepositoryTrait};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// UserRepositoryのPostgreSQL実装
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, name, email
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            user_id: UserId::from_uuid(row.get("user_id")),
            name: row.get("name"),
            email: row.get("email"),
        }))
    }
}
