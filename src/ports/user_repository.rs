use crate::domain::{User, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// ユーザーリポジトリポート
///
/// 予約コンテキストはユーザーの存在確認にだけ使う。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// IDでユーザーを取得する
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>>;
}
