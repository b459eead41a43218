use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, ItemId, UserId};

/// コマンド：アイテムを予約する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBooking {
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// コマンド：予約を承認または却下する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideBooking {
    pub booking_id: BookingId,
    pub owner_id: UserId,
    pub approved: bool,
}

/// クエリ：ユーザーに関係する予約の一覧を取得する
///
/// `state` は未検証のトークン。`now` は呼び出し側で一度だけ取得し、
/// フィルタ全体で同じ時刻を使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBookings {
    pub user_id: UserId,
    pub state: String,
    pub now: DateTime<Utc>,
}
