use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{
        ApiError, Booking, BookingStatus, CreateBookingRequest, CreateBookingResponse,
        StatusUpdateRequest,
    },
};

impl ApiClient {
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, ApiError> {
        self.request_json(Method::POST, "/bookings", Some(request), &[])
            .await
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings/my-bookings", &[]).await
    }

    pub async fn advocate_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings/advocate-bookings", &[]).await
    }

    pub async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<Value, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/bookings/{}/status", id),
            &StatusUpdateRequest { status },
        )
        .await
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<Value, ApiError> {
        self.send_empty(Method::PATCH, &format!("/bookings/{}/cancel", id))
            .await
    }
}
