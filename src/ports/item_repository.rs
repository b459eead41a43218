use crate::domain::{Item, ItemId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// アイテムリポジトリポート
///
/// 貸し出し可否（available）と所有者の確認に使われる。
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// IDでアイテムを取得する
    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>>;
}
