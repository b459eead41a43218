/// 予約作成のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBookingError {
    /// アイテムが貸し出しを受け付けていない
    ItemUnavailable,
    /// 所有者が自分のアイテムを予約しようとした
    OwnerCannotBookOwnItem,
}

/// 承認・却下のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecideBookingError {
    /// WAITING 以外の予約は承認・却下できない
    NotWaiting,
}

/// 一覧取得で未知の state が指定された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedState(pub String);
