use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, CreateReviewRequest, Review},
};

impl ApiClient {
    pub async fn create_review(&self, request: &CreateReviewRequest) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/reviews", request).await
    }

    pub async fn advocate_reviews(&self, advocate_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/reviews/advocate/{}", advocate_id), &[])
            .await
    }
}
