use crate::domain::{Item, ItemId, UserId};
use crate::ports::item_repository::{ItemRepository as ItemRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// ItemRepositoryのPostgreSQL実装
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query(
            r#"
            SELECT item_id, owner_id, name, description, available
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(item_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Item {
            item_id: ItemId::from_uuid(row.get("item_id")),
            owner_id: UserId::from_uuid(row.get("owner_id")),
            name: row.get("name"),
            description: row.get("description"),
            available: row.get("available"),
        }))
    }
}
