use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, Session},
};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .request_json(Method::POST, "/auth/register", Some(request), &[])
            .await?;
        self.persist_auth(&response)?;
        Ok(response)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .request_json(Method::POST, "/auth/login", Some(request), &[])
            .await?;
        self.persist_auth(&response)?;
        Ok(response)
    }

    /// Local only: the server keeps no session state to revoke.
    pub fn logout(&self) {
        self.session().clear();
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<Session>, ApiError> {
        self.send_json(Method::PUT, "/auth/profile", update).await?;
        self.session()
            .update_profile(update)
            .map_err(ApiError::unknown)
    }

    fn persist_auth(&self, response: &AuthResponse) -> Result<(), ApiError> {
        match response.token.as_deref() {
            Some(token) if !token.is_empty() => self
                .session()
                .set(response.user.clone(), token.to_string())
                .map_err(ApiError::unknown),
            _ => Ok(()),
        }
    }
}
