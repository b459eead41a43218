pub mod booking_repository;
pub mod item_repository;
pub mod user_repository;

// パブリックに型を再エクスポート
pub use booking_repository::BookingRepository as PostgresBookingRepository;
pub use item_repository::ItemRepository as PostgresItemRepository;
pub use user_repository::UserRepository as PostgresUserRepository;
