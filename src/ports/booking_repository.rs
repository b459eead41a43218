use crate::domain::{Booking, BookingId, BookingQuery};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約リポジトリポート
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// IDで予約を取得する
    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>>;

    /// 予約を保存する
    ///
    /// 新規の場合はINSERT、既存の場合はUPDATE（upsert）を実行し、
    /// 保存後の予約を返す。
    async fn save(&self, booking: Booking) -> Result<Booking>;

    /// 条件に一致する予約を start の降順で返す
    ///
    /// `Relation::Owner` の場合はアイテムの所有者で絞り込む。
    async fn find(&self, query: BookingQuery) -> Result<Vec<Booking>>;
}
