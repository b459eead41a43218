use crate::application::booking::BookingApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::types::ErrorResponse;

/// クライアントに返す内部エラーのメッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// ドメインの失敗はすべて明示的にマッピングし、それ以外は500にまとめる。
#[derive(Debug)]
pub enum ApiError {
    Application(BookingApplicationError),
    /// リクエスト自体が不正（ヘッダー欠落、予約期間の矛盾など）
    BadRequest(String),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        let err = match self {
            ApiError::BadRequest(msg) => {
                return (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone());
            }
            ApiError::Application(err) => err,
        };

        match err {
            // 404 Not Found - 参照先が存在しない
            BookingApplicationError::UserNotFound => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", err.to_string())
            }
            BookingApplicationError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND", err.to_string())
            }
            BookingApplicationError::BookingNotFound => {
                (StatusCode::NOT_FOUND, "BOOKING_NOT_FOUND", err.to_string())
            }

            // 404 Not Found - 所有関係の不一致も not found として扱う
            BookingApplicationError::NotOwner => {
                (StatusCode::NOT_FOUND, "NOT_OWNER", err.to_string())
            }
            BookingApplicationError::OwnerCannotBookOwnItem => (
                StatusCode::NOT_FOUND,
                "OWNER_CANNOT_BOOK_OWN_ITEM",
                err.to_string(),
            ),

            // 404 Not Found - ビジネスルール違反も同じ扱い
            BookingApplicationError::ItemUnavailable => {
                (StatusCode::NOT_FOUND, "ITEM_UNAVAILABLE", err.to_string())
            }
            BookingApplicationError::InvalidStateTransition => (
                StatusCode::NOT_FOUND,
                "INVALID_STATE_TRANSITION",
                err.to_string(),
            ),
            BookingApplicationError::UnsupportedState(_) => {
                (StatusCode::NOT_FOUND, "UNSUPPORTED_STATE", err.to_string())
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookingApplicationError::UserRepositoryError(e) => {
                tracing::error!("User repository error: {}", e);
                internal_error()
            }
            BookingApplicationError::ItemRepositoryError(e) => {
                tracing::error!("Item repository error: {}", e);
                internal_error()
            }
            BookingApplicationError::BookingRepositoryError(e) => {
                tracing::error!("Booking repository error: {}", e);
                internal_error()
            }
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = self.parts();
        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

/// ハンドラー内のpanicを500に変換する（CatchPanicLayer用）
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    let (status, error_type, message) = internal_error();
    (status, Json(ErrorResponse::new(error_type, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: BookingApplicationError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_not_found_kinds_map_to_404() {
        assert_eq!(status_of(BookingApplicationError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(BookingApplicationError::ItemNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(BookingApplicationError::BookingNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(BookingApplicationError::NotOwner), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(BookingApplicationError::OwnerCannotBookOwnItem),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_business_rule_kinds_map_to_404() {
        assert_eq!(status_of(BookingApplicationError::ItemUnavailable), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(BookingApplicationError::InvalidStateTransition),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(BookingApplicationError::UnsupportedState("X".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_repository_errors_hide_detail() {
        let source: Box<dyn std::error::Error + Send + Sync> = "connection refused".into();
        let (status, error_type, message) =
            ApiError::from(BookingApplicationError::BookingRepositoryError(source)).parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_type, "INTERNAL_ERROR");
        assert_eq!(message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_unsupported_state_message_names_token() {
        let (_, error_type, message) =
            ApiError::from(BookingApplicationError::UnsupportedState("SOON".to_string())).parts();

        assert_eq!(error_type, "UNSUPPORTED_STATE");
        assert_eq!(message, "Unknown state: SOON");
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("missing header".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_panic_maps_to_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
