use serde::{Deserialize, Serialize};

use super::UserId;

/// ユーザー
///
/// 予約コンテキストからは参照されるだけで、変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}
