use thiserror::Error;

use crate::domain::{DecideBookingError, RequestBookingError, UnsupportedState};

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// ユーザーが存在しない
    #[error("User not found")]
    UserNotFound,

    /// アイテムが存在しない
    #[error("Item not found")]
    ItemNotFound,

    /// 予約が存在しない
    #[error("Booking not found")]
    BookingNotFound,

    /// アイテムが貸し出しを受け付けていない
    #[error("Item is not available for booking")]
    ItemUnavailable,

    /// 所有者は自分のアイテムを予約できない
    #[error("Owner cannot book own item")]
    OwnerCannotBookOwnItem,

    /// 所有者（閲覧の場合は予約者も）でない
    #[error("User is not the owner of the item or the booker")]
    NotOwner,

    /// WAITING 以外の予約を承認・却下しようとした
    #[error("Booking status can be changed only while waiting")]
    InvalidStateTransition,

    /// 未知の state
    #[error("Unknown state: {0}")]
    UnsupportedState(String),

    /// UserRepositoryのエラー
    #[error("User repository error")]
    UserRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ItemRepositoryのエラー
    #[error("Item repository error")]
    ItemRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BookingRepositoryのエラー
    #[error("Booking repository error")]
    BookingRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<RequestBookingError> for BookingApplicationError {
    fn from(err: RequestBookingError) -> Self {
        match err {
            RequestBookingError::ItemUnavailable => BookingApplicationError::ItemUnavailable,
            RequestBookingError::OwnerCannotBookOwnItem => {
                BookingApplicationError::OwnerCannotBookOwnItem
            }
        }
    }
}

impl From<DecideBookingError> for BookingApplicationError {
    fn from(err: DecideBookingError) -> Self {
        match err {
            DecideBookingError::NotWaiting => BookingApplicationError::InvalidStateTransition,
        }
    }
}

impl From<UnsupportedState> for BookingApplicationError {
    fn from(err: UnsupportedState) -> Self {
        BookingApplicationError::UnsupportedState(err.0)
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
