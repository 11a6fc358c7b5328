use crate::api::{ApiClient, ApiError, Service, ServicePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct ServicesRepository {
    client: Rc<ApiClient>,
}

impl ServicesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Service>, ApiError> {
        self.client.my_services().await
    }

    /// Creates when `id` is `None`, otherwise updates that service.
    pub async fn save(&self, id: Option<i64>, payload: &ServicePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_service(id, payload).await.map(|_| ()),
            None => self.client.create_service(payload).await.map(|_| ()),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_service(id).await.map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ServiceType;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn payload() -> ServicePayload {
        ServicePayload {
            title: "Consultation".into(),
            description: "45 minute call".into(),
            service_type: ServiceType::Both,
            category: String::new(),
            price: 1500.0,
            duration_minutes: 45,
        }
    }

    #[tokio::test]
    async fn save_creates_or_updates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/services");
            then.status(201).json_body(json!({ "message": "Service created" }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/services/3");
            then.status(200).json_body(json!({ "message": "Service updated" }));
        });
        let repo = ServicesRepository::new(ApiClient::new_with_base_url(server.url("/api")));

        repo.save(None, &payload()).await.unwrap();
        repo.save(Some(3), &payload()).await.unwrap();
        assert_eq!(server.hits(&POST, "/api/services"), 1);
        assert_eq!(server.hits(&PUT, "/api/services/3"), 1);
        let body = server.last(&POST, "/api/services").unwrap().body.unwrap();
        assert_eq!(body["service_type"], "both");
        assert_eq!(body["duration_minutes"], 45);
    }

    #[tokio::test]
    async fn list_and_delete() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/services/my-services");
            then.status(200).json_body(json!([
                { "id": 3, "title": "Consultation", "price": "1500.00", "duration_minutes": 45 }
            ]));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/services/3");
            then.status(200).json_body(json!({}));
        });
        let repo = ServicesRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let services = repo.list().await.unwrap();
        assert_eq!(services[0].price, 1500.0);
        repo.delete(3).await.unwrap();
        assert_eq!(server.hits(&DELETE, "/api/services/3"), 1);
    }
}
