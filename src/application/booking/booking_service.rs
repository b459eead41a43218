use crate::domain::{self, commands::*, value_objects::*};
use crate::domain::{Booking, BookingQuery, BookingState, Item, Relation};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub booking_repository: Arc<dyn BookingRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// ユーザーの存在を確認するヘルパー関数
async fn ensure_user_exists(deps: &ServiceDependencies, user_id: UserId) -> Result<()> {
    deps.user_repository
        .find_by_id(user_id)
        .await
        .map_err(BookingApplicationError::UserRepositoryError)?
        .map(|_| ())
        .ok_or(BookingApplicationError::UserNotFound)
}

async fn load_item(deps: &ServiceDependencies, item_id: ItemId) -> Result<Item> {
    deps.item_repository
        .find_by_id(item_id)
        .await
        .map_err(BookingApplicationError::ItemRepositoryError)?
        .ok_or(BookingApplicationError::ItemNotFound)
}

/// 予約とその対象アイテムを読み込むヘルパー関数
///
/// approve_booking, get_bookingで共通利用される。
///
/// # エラー
/// - BookingNotFound: 予約が存在しない
/// - ItemNotFound: 予約対象のアイテムが存在しない
async fn load_booking_with_item(
    deps: &ServiceDependencies,
    booking_id: BookingId,
) -> Result<(Booking, Item)> {
    let booking = deps
        .booking_repository
        .find_by_id(booking_id)
        .await
        .map_err(BookingApplicationError::BookingRepositoryError)?
        .ok_or(BookingApplicationError::BookingNotFound)?;

    let item = load_item(deps, booking.item_id).await?;

    Ok((booking, item))
}

/// アイテムを予約する
///
/// ビジネスルール：
/// - 予約者が存在すること
/// - アイテムが存在し、貸し出し可能であること
/// - 予約者がアイテムの所有者でないこと
///
/// 作成された予約は常に WAITING。
pub async fn add_booking(deps: &ServiceDependencies, cmd: RequestBooking) -> Result<Booking> {
    // 1. 予約者の存在確認
    ensure_user_exists(deps, cmd.booker_id).await?;

    // 2. アイテムの取得
    let item = load_item(deps, cmd.item_id).await?;

    // 3. ドメイン層の純粋関数を呼び出し（貸し出し可否・所有者チェック）
    let booking = domain::booking::request_booking(&item, cmd.booker_id, cmd.start, cmd.end)?;

    // 4. 保存
    let saved = deps
        .booking_repository
        .save(booking)
        .await
        .map_err(BookingApplicationError::BookingRepositoryError)?;

    tracing::info!(
        booking_id = %saved.booking_id,
        item_id = %saved.item_id,
        booker_id = %saved.booker_id,
        "Booking created"
    );

    Ok(saved)
}

/// 予約を承認または却下する
///
/// ビジネスルール：
/// - 予約と対象アイテムが存在すること
/// - 呼び出し元がアイテムの所有者であること
/// - 予約が WAITING であること（二重承認は不可）
///
/// 状態遷移の唯一の入口。
///
/// # 並行性
///
/// WAITING チェックは論理的な前提条件であり、排他制御ではない。
/// 同じ予約に対する承認が同時に2件届いた場合、ストレージ側が
/// compare-and-set や行ロックを提供しない限り、両方がチェックを通過しうる。
pub async fn approve_booking(deps: &ServiceDependencies, cmd: DecideBooking) -> Result<Booking> {
    // 1. 予約とアイテムを取得
    let (booking, item) = load_booking_with_item(deps, cmd.booking_id).await?;

    // 2. 所有者確認
    if !item.is_owned_by(cmd.owner_id) {
        return Err(BookingApplicationError::NotOwner);
    }

    // 3. ドメイン層の純粋関数で状態遷移
    let decided = domain::booking::decide_booking(booking, cmd.approved)?;

    // 4. 保存
    let saved = deps
        .booking_repository
        .save(decided)
        .await
        .map_err(BookingApplicationError::BookingRepositoryError)?;

    tracing::info!(
        booking_id = %saved.booking_id,
        status = saved.status.as_str(),
        "Booking decided"
    );

    Ok(saved)
}

/// 予約を1件取得する
///
/// 閲覧できるのは予約者とアイテムの所有者だけ。それ以外は NotOwner。
pub async fn get_booking(
    deps: &ServiceDependencies,
    requester_id: UserId,
    booking_id: BookingId,
) -> Result<Booking> {
    let (booking, item) = load_booking_with_item(deps, booking_id).await?;

    if domain::booking::can_view(&booking, &item, requester_id) {
        Ok(booking)
    } else {
        Err(BookingApplicationError::NotOwner)
    }
}

/// 予約一覧の共通処理
///
/// state の解釈はリポジトリへのアクセスより前に行う。
/// 未知の state の場合は一切読み込まずに UnsupportedState を返す。
async fn list_bookings(
    deps: &ServiceDependencies,
    relation: Relation,
    query: ListBookings,
) -> Result<Vec<Booking>> {
    let state: BookingState = query.state.parse()?;

    ensure_user_exists(deps, query.user_id).await?;

    let query = BookingQuery::for_state(query.user_id, relation, state, query.now);

    deps.booking_repository
        .find(query)
        .await
        .map_err(BookingApplicationError::BookingRepositoryError)
}

/// ユーザーが行った予約の一覧（start の降順）
pub async fn list_booker_bookings(
    deps: &ServiceDependencies,
    query: ListBookings,
) -> Result<Vec<Booking>> {
    list_bookings(deps, Relation::Booker, query).await
}

/// ユーザーが所有するアイテムへの予約の一覧（start の降順）
pub async fn list_owner_bookings(
    deps: &ServiceDependencies,
    query: ListBookings,
) -> Result<Vec<Booking>> {
    list_bookings(deps, Relation::Owner, query).await
}
