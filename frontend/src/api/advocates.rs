use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{Advocate, AdvocateDetail, AdvocateProfilePayload, AdvocateSearchFilters, ApiError},
};

impl ApiClient {
    pub async fn search_advocates(
        &self,
        filters: &AdvocateSearchFilters,
    ) -> Result<Vec<Advocate>, ApiError> {
        self.get_json("/advocates", &filters.query_params()).await
    }

    /// Profile with nested `services` and `reviews`.
    pub async fn get_advocate(&self, id: i64) -> Result<AdvocateDetail, ApiError> {
        self.get_json(&format!("/advocates/{}", id), &[]).await
    }

    pub async fn register_advocate(
        &self,
        payload: &AdvocateProfilePayload,
    ) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/advocates/register", payload)
            .await
    }

    pub async fn update_advocate(
        &self,
        id: i64,
        payload: &AdvocateProfilePayload,
    ) -> Result<Value, ApiError> {
        self.send_json(Method::PUT, &format!("/advocates/{}", id), payload)
            .await
    }
}
