use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::SessionStore};

/// Single point of egress for every server call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::browser(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_session(base_url, SessionStore::in_memory())
    }

    pub fn with_session(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.session.token() {
            let value = format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unknown("Invalid token format"))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        let params = non_empty_params(query);

        let mut builder = self
            .client
            .request(method.clone(), url)
            .headers(self.auth_headers()?);
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        log::debug!("{} {}", method, path);
        let response = self.send(builder).await?;
        let result = map_json_response(response).await;
        if let Err(err) = &result {
            log::warn!("{} {} failed: {:?} {}", method, path, err.status, err.error);
        }
        result
    }

    pub async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(method, path, body, query).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request_json::<T, Value>(Method::GET, path, None, query)
            .await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.request(method, path, Some(body), &[]).await
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<Value, ApiError> {
        self.request::<Value>(method, path, None, &[]).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::unknown(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client.execute(request).await.map_err(|err| {
            log::warn!("transport failure: {}", err);
            ApiError::network()
        })
    }
}

/// Drops unset filters so they never reach the wire as `key=`.
pub fn non_empty_params<'a>(query: &'a [(&'a str, String)]) -> Vec<(&'a str, &'a str)> {
    query
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (*key, value.as_str()))
        .collect()
}

async fn map_json_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|_| ApiError::network())?;
    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(ApiError::http(
            status.as_u16(),
            server_message(&text)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        ))
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_params_drops_blank_values() {
        let query = vec![
            ("city", "Pune".to_string()),
            ("specialization", String::new()),
            ("minRating", "4".to_string()),
        ];
        assert_eq!(
            non_empty_params(&query),
            vec![("city", "Pune"), ("minRating", "4")]
        );
        let empty: Vec<(&str, String)> = vec![("search", String::new())];
        assert!(non_empty_params(&empty).is_empty());
    }

    #[test]
    fn server_message_prefers_error_then_message() {
        assert_eq!(
            server_message(r#"{"error":"Slot unavailable","message":"ignored"}"#).as_deref(),
            Some("Slot unavailable")
        );
        assert_eq!(
            server_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert!(server_message("<html>oops</html>").is_none());
        assert!(server_message(r#"{"error":""}"#).is_none());
    }
}
