use serde::{Deserialize, Serialize};

use super::{ItemId, UserId};

/// 貸し出し対象のアイテム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,

    // 所有者への参照（IDのみ）
    pub owner_id: UserId,

    pub name: String,
    pub description: String,

    /// 所有者が貸し出しを受け付けているか
    pub available: bool,
}

impl Item {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
