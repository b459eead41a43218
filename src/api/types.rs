use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Booking, ItemId, UserId, commands::RequestBooking};

/// 予約作成リクエスト（POST /bookings）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub item_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateBookingRequest {
    /// 予約期間が正しいか（終了が開始より後か）
    pub fn has_valid_period(&self) -> bool {
        self.end > self.start
    }

    pub fn to_command(&self, booker_id: UserId) -> RequestBooking {
        RequestBooking {
            item_id: ItemId::from_uuid(self.item_id),
            booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// 承認・却下のクエリパラメータ（PATCH /bookings/:id）
#[derive(Debug, Deserialize)]
pub struct ApproveBookingQuery {
    pub approved: bool,
}

/// 予約一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// 省略時は ALL
    pub state: Option<String>,
}

impl ListBookingsQuery {
    pub fn state_or_default(&self) -> String {
        self.state.clone().unwrap_or_else(|| "ALL".to_string())
    }
}

/// 予約レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub item_id: Uuid,
    pub booker_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id.value(),
            item_id: booking.item_id.value(),
            booker_id: booking.booker_id.value(),
            start: booking.start,
            end: booking.end,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
