use crate::api::{ApiClient, ApiError, Booking, BookingStatus, CreateReviewRequest};
use std::rc::Rc;

/// Which booking list an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    Mine,
    Advocate,
    All,
}

#[derive(Clone)]
pub struct BookingsRepository {
    client: Rc<ApiClient>,
}

impl BookingsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, scope: BookingScope) -> Result<Vec<Booking>, ApiError> {
        match scope {
            BookingScope::Mine => self.client.my_bookings().await,
            BookingScope::Advocate => self.client.advocate_bookings().await,
            BookingScope::All => self.client.admin_bookings().await,
        }
    }

    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.client.cancel_booking(id).await.map(|_| ())
    }

    pub async fn update_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.client
            .update_booking_status(id, status)
            .await
            .map(|_| ())
    }

    pub async fn submit_review(&self, request: &CreateReviewRequest) -> Result<(), ApiError> {
        self.client.create_review(request).await.map(|_| ())
    }
}
