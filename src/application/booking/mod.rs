mod booking_service;
mod errors;

pub use booking_service::{
    ServiceDependencies, add_booking, approve_booking, get_booking, list_booker_bookings,
    list_owner_bookings,
};
pub use errors::{BookingApplicationError, Result};
