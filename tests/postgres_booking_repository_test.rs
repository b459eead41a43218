//! PostgreSQLアダプターのテスト
//!
//! 実行には DATABASE_URL が指すPostgreSQLが必要：
//! `cargo test --test postgres_booking_repository_test -- --ignored`

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use shareit_booking::adapters::postgres::{
    PostgresBookingRepository, PostgresItemRepository, PostgresUserRepository,
};
use shareit_booking::domain::value_objects::{BookingId, ItemId, UserId};
use shareit_booking::domain::{Booking, BookingQuery, BookingState, BookingStatus, Relation};
use shareit_booking::ports::{BookingRepository, ItemRepository, UserRepository};
use sqlx::PgPool;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

async fn insert_user(pool: &PgPool) -> UserId {
    let user_id = UserId::new();
    sqlx::query("INSERT INTO users (user_id, name, email) VALUES ($1, $2, $3)")
        .bind(user_id.value())
        .bind("user")
        .bind(format!("{}@example.com", user_id))
        .execute(pool)
        .await
        .expect("Failed to insert user");
    user_id
}

async fn insert_item(pool: &PgPool, owner_id: UserId, available: bool) -> ItemId {
    let item_id = ItemId::new();
    sqlx::query(
        "INSERT INTO items (item_id, owner_id, name, description, available) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(item_id.value())
    .bind(owner_id.value())
    .bind("Ladder")
    .bind("Aluminium ladder")
    .bind(available)
    .execute(pool)
    .await
    .expect("Failed to insert item");
    item_id
}

fn booking(item_id: ItemId, booker_id: UserId, start_h: i64, end_h: i64) -> Booking {
    Booking {
        booking_id: BookingId::new(),
        item_id,
        booker_id,
        start: fixed_now() + Duration::hours(start_h),
        end: fixed_now() + Duration::hours(end_h),
        status: BookingStatus::Waiting,
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_user_and_item_lookup() {
    let pool = common::create_test_pool().await;
    let users = PostgresUserRepository::new(pool.clone());
    let items = PostgresItemRepository::new(pool.clone());

    let owner = insert_user(&pool).await;
    let item = insert_item(&pool, owner, false).await;

    let found_user = users.find_by_id(owner).await.unwrap().unwrap();
    assert_eq!(found_user.user_id, owner);
    assert!(users.find_by_id(UserId::new()).await.unwrap().is_none());

    let found_item = items.find_by_id(item).await.unwrap().unwrap();
    assert_eq!(found_item.owner_id, owner);
    assert!(!found_item.available);
    assert!(items.find_by_id(ItemId::new()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_save_inserts_then_updates_status() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookingRepository::new(pool.clone());

    let owner = insert_user(&pool).await;
    let booker = insert_user(&pool).await;
    let item = insert_item(&pool, owner, true).await;

    let waiting = booking(item, booker, 1, 2);
    let saved = repository.save(waiting.clone()).await.unwrap();
    assert_eq!(saved, waiting);

    let approved = Booking {
        status: BookingStatus::Approved,
        ..waiting.clone()
    };
    let saved = repository.save(approved).await.unwrap();
    assert_eq!(saved.status, BookingStatus::Approved);

    let loaded = repository
        .find_by_id(waiting.booking_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.status, BookingStatus::Approved);
    assert!(
        repository
            .find_by_id(BookingId::new())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_booker_and_owner() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookingRepository::new(pool.clone());

    let owner = insert_user(&pool).await;
    let booker = insert_user(&pool).await;
    let item = insert_item(&pool, owner, true).await;

    let past = repository.save(booking(item, booker, -3, -2)).await.unwrap();
    let current = repository.save(booking(item, booker, -1, 1)).await.unwrap();
    let future = repository.save(booking(item, booker, 2, 3)).await.unwrap();
    let approved_future = repository
        .save(Booking {
            status: BookingStatus::Approved,
            ..booking(item, booker, 4, 5)
        })
        .await
        .unwrap();

    let query = |relation: Relation, state: BookingState| {
        let user_id = match relation {
            Relation::Booker => booker,
            Relation::Owner => owner,
        };
        BookingQuery::for_state(user_id, relation, state, fixed_now())
    };

    let all = repository
        .find(query(Relation::Booker, BookingState::All))
        .await
        .unwrap();
    let all_ids: Vec<_> = all.iter().map(|b| b.booking_id).collect();
    assert_eq!(
        all_ids,
        vec![
            approved_future.booking_id,
            future.booking_id,
            current.booking_id,
            past.booking_id
        ]
    );

    let current_list = repository
        .find(query(Relation::Booker, BookingState::Current))
        .await
        .unwrap();
    assert_eq!(current_list.len(), 1);
    assert_eq!(current_list[0].booking_id, current.booking_id);

    let owner_future = repository
        .find(query(Relation::Owner, BookingState::Future))
        .await
        .unwrap();
    assert_eq!(owner_future.len(), 1);
    assert_eq!(owner_future[0].booking_id, approved_future.booking_id);

    let owner_waiting = repository
        .find(query(Relation::Owner, BookingState::Waiting))
        .await
        .unwrap();
    assert_eq!(owner_waiting.len(), 1);
    assert_eq!(owner_waiting[0].booking_id, future.booking_id);
}
