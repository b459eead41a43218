use crate::domain::{Booking, BookingId, BookingQuery};
use crate::ports::booking_repository::{BookingRepository as BookingRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::ItemRepository;

/// In-memory implementation of BookingRepository
///
/// Owner filtering joins against the shared mock ItemRepository,
/// the same way the SQL adapter joins the items table.
pub struct BookingRepository {
    bookings: Mutex<HashMap<BookingId, Booking>>,
    items: Arc<ItemRepository>,
}

impl BookingRepository {
    pub fn new(items: Arc<ItemRepository>) -> Self {
        Self {
            bookings: Mutex::new(HashMap::new()),
            items,
        }
    }

    /// Number of stored bookings
    pub fn len(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingRepositoryTrait for BookingRepository {
    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        Ok(self.bookings.lock().unwrap().get(&booking_id).cloned())
    }

    async fn save(&self, booking: Booking) -> Result<Booking> {
        self.bookings
            .lock()
            .unwrap()
            .insert(booking.booking_id, booking.clone());
        Ok(booking)
    }

    async fn find(&self, query: BookingQuery) -> Result<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|booking| {
                self.items
                    .owner_of(booking.item_id)
                    .is_some_and(|owner| query.matches(booking, owner))
            })
            .cloned()
            .collect();

        found.sort_by(|a, b| b.start.cmp(&a.start));
        Ok(found)
    }
}
