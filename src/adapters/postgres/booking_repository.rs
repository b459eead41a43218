use crate::domain::{
    Booking, BookingId, BookingQuery, BookingStatus, ItemId, Relation, TimeFilter, UserId,
};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをBookingに変換する
///
/// status列の文字列が未知の値の場合はエラーにする。
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Booking {
        booking_id: BookingId::from_uuid(row.get("booking_id")),
        item_id: ItemId::from_uuid(row.get("item_id")),
        booker_id: UserId::from_uuid(row.get("booker_id")),
        start: row.get("start_at"),
        end: row.get("end_at"),
        status,
    })
}

/// 検索条件をSQLに変換する
///
/// 所有者側の一覧は items と結合して owner_id で絞り込む。
fn build_find_query(query: &BookingQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        r#"
        SELECT
            b.booking_id,
            b.item_id,
            b.booker_id,
            b.start_at,
            b.end_at,
            b.status
        FROM bookings b
        JOIN items i ON i.item_id = b.item_id
        WHERE "#,
    );

    match query.relation {
        Relation::Booker => builder.push("b.booker_id = "),
        Relation::Owner => builder.push("i.owner_id = "),
    };
    builder.push_bind(query.user_id.value());

    match query.time {
        TimeFilter::Any => {}
        TimeFilter::Current(now) => {
            builder.push(" AND b.start_at <= ").push_bind(now);
            builder.push(" AND b.end_at > ").push_bind(now);
        }
        TimeFilter::Past(now) => {
            builder.push(" AND b.end_at < ").push_bind(now);
        }
        TimeFilter::Future(now) => {
            builder.push(" AND b.start_at > ").push_bind(now);
        }
    }

    if let Some(status) = query.status {
        builder.push(" AND b.status = ").push_bind(status.as_str());
    }

    builder.push(" ORDER BY b.start_at DESC");
    builder
}

/// BookingRepositoryのPostgreSQL実装
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// PostgreSQLコネクションプールから新しいBookingRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT
                booking_id,
                item_id,
                booker_id,
                start_at,
                end_at,
                status
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }

    /// 予約を保存（upsert）
    ///
    /// 既存の予約では status と期間だけが更新される。
    /// item_id と booker_id は作成後に変わらない。
    async fn save(&self, booking: Booking) -> Result<Booking> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                item_id,
                booker_id,
                start_at,
                end_at,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (booking_id)
            DO UPDATE SET
                start_at = EXCLUDED.start_at,
                end_at = EXCLUDED.end_at,
                status = EXCLUDED.status,
                updated_at = NOW()
            RETURNING
                booking_id,
                item_id,
                booker_id,
                start_at,
                end_at,
                status
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.item_id.value())
        .bind(booking.booker_id.value())
        .bind(booking.start)
        .bind(booking.end)
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        map_row_to_booking(&row)
    }

    async fn find(&self, query: BookingQuery) -> Result<Vec<Booking>> {
        let mut builder = build_find_query(&query);
        let mut rows = builder.build().fetch(&self.pool);

        let mut bookings = Vec::new();
        while let Some(row) = rows.try_next().await? {
            bookings.push(map_row_to_booking(&row)?);
        }

        Ok(bookings)
    }
}
