use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, DecideBookingError, Item, ItemId, RequestBookingError, UserId};

/// 予約ステータス
///
/// WAITING が初期状態、APPROVED / REJECTED が終端状態。
/// 遷移は WAITING → APPROVED | REJECTED の一度きり。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// 所有者の判断待ち
    Waiting,
    /// 承認済み
    Approved,
    /// 却下済み
    Rejected,
}

impl BookingStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Waiting)
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Booking集約 - 1つのアイテムに対する1回の予約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    // 識別子
    pub booking_id: BookingId,

    // 他の集約への参照（IDのみ）
    pub item_id: ItemId,
    pub booker_id: UserId,

    // 予約期間
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    pub status: BookingStatus,
}

/// 純粋関数：アイテムを予約する
///
/// ビジネスルール：
/// - アイテムが貸し出し可能（available）であること
/// - 予約者がアイテムの所有者でないこと
/// - 作成された予約は WAITING
///
/// 予約者の存在確認はアプリケーション層の責務。
pub fn request_booking(
    item: &Item,
    booker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Booking, RequestBookingError> {
    if !item.available {
        return Err(RequestBookingError::ItemUnavailable);
    }

    if item.is_owned_by(booker_id) {
        return Err(RequestBookingError::OwnerCannotBookOwnItem);
    }

    Ok(Booking {
        booking_id: BookingId::new(),
        item_id: item.item_id,
        booker_id,
        start,
        end,
        status: BookingStatus::Waiting,
    })
}

/// 純粋関数：予約を承認または却下する
///
/// WAITING の予約だけが遷移できる。所有者の確認はアプリケーション層で行う。
pub fn decide_booking(booking: Booking, approved: bool) -> Result<Booking, DecideBookingError> {
    if booking.status != BookingStatus::Waiting {
        return Err(DecideBookingError::NotWaiting);
    }

    let status = if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };

    Ok(Booking { status, ..booking })
}

/// 予約を閲覧できるのは予約者とアイテムの所有者だけ
pub fn can_view(booking: &Booking, item: &Item, requester_id: UserId) -> bool {
    booking.booker_id == requester_id || item.is_owned_by(requester_id)
}
