use crate::api::{Advocate, AdminStats, AdminUser, ApiClient, ApiError, Booking};
use std::rc::Rc;

/// Everything the admin dashboard shows, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminSnapshot {
    pub stats: AdminStats,
    pub users: Vec<AdminUser>,
    pub advocates: Vec<Advocate>,
    pub bookings: Vec<Booking>,
}

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn snapshot(&self) -> Result<AdminSnapshot, ApiError> {
        Ok(AdminSnapshot {
            stats: self.client.admin_stats().await?,
            users: self.client.admin_users().await?,
            advocates: self.client.admin_advocates().await?,
            bookings: self.client.admin_bookings().await?,
        })
    }

    pub async fn set_verified(&self, advocate_id: i64, verified: bool) -> Result<(), ApiError> {
        self.client
            .verify_advocate(advocate_id, verified)
            .await
            .map(|_| ())
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.client.delete_user(user_id).await.map(|_| ())
    }
}
