pub mod booking_repository;
pub mod item_repository;
pub mod user_repository;

pub use booking_repository::BookingRepository;
pub use item_repository::ItemRepository;
pub use user_repository::UserRepository;
