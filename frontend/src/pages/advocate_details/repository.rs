use crate::api::{AdvocateDetail, ApiClient, ApiError, CreateBookingRequest, CreateBookingResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdvocateDetailsRepository {
    client: Rc<ApiClient>,
}

impl AdvocateDetailsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self, advocate_id: i64) -> Result<AdvocateDetail, ApiError> {
        self.client.get_advocate(advocate_id).await
    }

    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, ApiError> {
        self.client.create_booking(request).await
    }
}
