use crate::api::{Advocate, AdvocateSearchFilters, ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct SearchRepository {
    client: Rc<ApiClient>,
}

impl SearchRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub async fn search(&self, filters: &AdvocateSearchFilters) -> Result<Vec<Advocate>, ApiError> {
        self.client.search_advocates(filters).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn search_sends_only_filled_filters() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/advocates");
            then.status(200).json_body(json!([
                { "id": 7, "name": "Asha Rao", "specialization": "Family Law", "rating": "4.50" }
            ]));
        });
        let repo = SearchRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let filters = AdvocateSearchFilters {
            specialization: "Family Law".into(),
            service_type: "online".into(),
            ..Default::default()
        };
        let advocates = repo.search(&filters).await.unwrap();
        assert_eq!(advocates.len(), 1);
        let request = server.last(&GET, "/api/advocates").unwrap();
        assert_eq!(
            request.query.as_deref(),
            Some("specialization=Family+Law&serviceType=online")
        );
    }
}
