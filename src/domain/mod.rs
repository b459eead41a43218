pub mod booking;
pub mod commands;
pub mod errors;
pub mod item;
pub mod query;
pub mod user;
pub mod value_objects;

pub use booking::{Booking, BookingStatus};
pub use errors::*;
pub use item::Item;
pub use query::{BookingQuery, BookingState, Relation, TimeFilter};
pub use user::User;
pub use value_objects::*;
