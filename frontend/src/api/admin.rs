use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{Advocate, AdminStats, AdminUser, ApiError, Booking, VerifyAdvocateRequest},
};

impl ApiClient {
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/dashboard", &[]).await
    }

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_json("/admin/users", &[]).await
    }

    pub async fn admin_advocates(&self) -> Result<Vec<Advocate>, ApiError> {
        self.get_json("/admin/advocates", &[]).await
    }

    pub async fn admin_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/admin/bookings", &[]).await
    }

    pub async fn verify_advocate(&self, id: i64, is_verified: bool) -> Result<Value, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/admin/advocates/{}/verify", id),
            &VerifyAdvocateRequest { is_verified },
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Value, ApiError> {
        self.send_empty(Method::DELETE, &format!("/admin/users/{}", id))
            .await
    }
}
