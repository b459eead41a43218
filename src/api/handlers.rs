use crate::application::booking::{
    ServiceDependencies, add_booking, approve_booking as execute_approve_booking,
    get_booking as execute_get_booking, list_booker_bookings, list_owner_bookings,
};
use crate::domain::commands::{DecideBooking, ListBookings};
use crate::domain::value_objects::{BookingId, UserId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{ApproveBookingQuery, BookingResponse, CreateBookingRequest, ListBookingsQuery},
};

/// 呼び出し元ユーザーを示すヘッダー
pub const SHARER_USER_ID_HEADER: &str = "x-sharer-user-id";

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// X-Sharer-User-Id ヘッダーから呼び出し元を取り出す
fn requester_id(headers: &HeaderMap) -> Result<UserId, ApiError> {
    let value = headers
        .get(SHARER_USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("X-Sharer-User-Id header is required".to_string()))?;

    Uuid::parse_str(value.trim())
        .map(UserId::from_uuid)
        .map_err(|_| ApiError::BadRequest(format!("Invalid X-Sharer-User-Id: {}", value)))
}

// ============================================================================
// Command handlers
// ============================================================================

/// POST /bookings - アイテムを予約
///
/// 強制されるビジネスルール:
/// - 予約者が存在すること
/// - アイテムが貸し出し可能であること
/// - 予約者がアイテムの所有者でないこと
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let booker_id = requester_id(&headers)?;

    if !req.has_valid_period() {
        return Err(ApiError::BadRequest(
            "Booking end must be after its start".to_string(),
        ));
    }

    let booking = add_booking(&state.service_deps, req.to_command(booker_id)).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// PATCH /bookings/:id?approved=true|false - 予約を承認・却下
///
/// アイテムの所有者だけが、WAITING の予約に対して一度だけ実行できる。
pub async fn approve_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(booking_id): Path<Uuid>,
    Query(query): Query<ApproveBookingQuery>,
) -> Result<Json<BookingResponse>, ApiError> {
    let owner_id = requester_id(&headers)?;

    let cmd = DecideBooking {
        booking_id: BookingId::from_uuid(booking_id),
        owner_id,
        approved: query.approved,
    };

    let booking = execute_approve_booking(&state.service_deps, cmd).await?;

    Ok(Json(BookingResponse::from(booking)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /bookings/:id - 予約詳細を取得
///
/// 予約者またはアイテムの所有者だけが閲覧できる。
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let requester = requester_id(&headers)?;

    let booking =
        execute_get_booking(&state.service_deps, requester, BookingId::from_uuid(booking_id))
            .await?;

    Ok(Json(BookingResponse::from(booking)))
}

/// GET /bookings?state= - 自分が行った予約の一覧
///
/// state: ALL（省略時）, CURRENT, PAST, FUTURE, WAITING, REJECTED
pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let list = ListBookings {
        user_id: requester_id(&headers)?,
        state: query.state_or_default(),
        now: Utc::now(),
    };

    let bookings = list_booker_bookings(&state.service_deps, list).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// GET /bookings/owner?state= - 自分のアイテムへの予約の一覧
pub async fn list_owned_item_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let list = ListBookings {
        user_id: requester_id(&headers)?,
        state: query.state_or_default(),
        now: Utc::now(),
    };

    let bookings = list_owner_bookings(&state.service_deps, list).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_requester_id_parses_header() {
        let uuid = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            SHARER_USER_ID_HEADER,
            HeaderValue::from_str(&uuid.to_string()).unwrap(),
        );

        assert_eq!(requester_id(&headers).unwrap(), UserId::from_uuid(uuid));
    }

    #[test]
    fn test_requester_id_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(requester_id(&headers), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_requester_id_invalid_uuid() {
        let mut headers = HeaderMap::new();
        headers.insert(SHARER_USER_ID_HEADER, HeaderValue::from_static("42"));
        assert!(matches!(requester_id(&headers), Err(ApiError::BadRequest(_))));
    }
}
