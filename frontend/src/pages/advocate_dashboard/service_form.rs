use crate::api::{Service, ServicePayload, ServiceType};
use thiserror::Error;

pub const DURATION_STEP_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceFormError {
    #[error("Service name is required")]
    MissingTitle,
    #[error("Description is required")]
    MissingDescription,
    #[error("Price must be greater than 0")]
    InvalidPrice,
    #[error("Duration must be at least 15 minutes, in steps of 15")]
    InvalidDuration,
}

/// Raw values of the add/edit service form. Numbers stay as typed until
/// the form is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub service_type: ServiceType,
    pub category: String,
    pub price: String,
    pub duration_minutes: String,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            service_type: ServiceType::Both,
            category: String::new(),
            price: String::new(),
            duration_minutes: String::new(),
        }
    }
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            service_type: service.service_type,
            category: service.category.clone().unwrap_or_default(),
            price: service.price.to_string(),
            duration_minutes: service.duration_minutes.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<ServicePayload, ServiceFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ServiceFormError::MissingTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ServiceFormError::MissingDescription);
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or(ServiceFormError::InvalidPrice)?;
        let duration_minutes = self
            .duration_minutes
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d >= DURATION_STEP_MINUTES && d % DURATION_STEP_MINUTES == 0)
            .ok_or(ServiceFormError::InvalidDuration)?;
        Ok(ServicePayload {
            title: title.to_string(),
            description: description.to_string(),
            service_type: self.service_type,
            category: self.category.trim().to_string(),
            price,
            duration_minutes,
        })
    }
}

/// The service modal: a form plus the id being edited, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceEditor {
    pub editing: Option<i64>,
    pub form: ServiceForm,
    pub error: Option<String>,
}

impl ServiceEditor {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(service: &Service) -> Self {
        Self {
            editing: Some(service.id),
            form: ServiceForm::from_service(service),
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Service"
        } else {
            "Add New Service"
        }
    }
}
