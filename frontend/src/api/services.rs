use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, Service, ServicePayload},
};

impl ApiClient {
    pub async fn my_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json("/services/my-services", &[]).await
    }

    pub async fn services_for_advocate(&self, advocate_id: i64) -> Result<Vec<Service>, ApiError> {
        self.get_json(&format!("/services/advocate/{}", advocate_id), &[])
            .await
    }

    pub async fn create_service(&self, payload: &ServicePayload) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/services", payload).await
    }

    pub async fn update_service(&self, id: i64, payload: &ServicePayload) -> Result<Value, ApiError> {
        self.send_json(Method::PUT, &format!("/services/{}", id), payload)
            .await
    }

    pub async fn delete_service(&self, id: i64) -> Result<Value, ApiError> {
        self.send_empty(Method::DELETE, &format!("/services/{}", id))
            .await
    }
}
