use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use crate::{
    api::{ApiError, BookingMode, CreateBookingRequest, CreateBookingResponse, Role, Service, Session},
    components::guard::{can_access, AccessDecision},
    utils::time::parse_datetime_local,
};

use super::repository::AdvocateDetailsRepository;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing datetime")]
    MissingDateTime,
    #[error("invalid datetime")]
    InvalidDateTime,
    #[error("datetime must be in the future")]
    PastDateTime,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] ApiError),
    #[error("a booking is already being submitted")]
    AlreadySubmitting,
    #[error("only pending bookings can be cancelled")]
    NotCancellable,
    #[error("no booking form is open")]
    NoActiveForm,
}

/// In-progress booking form. `date_time` holds the raw `datetime-local`
/// value; it is only validated on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub service: Option<Service>,
    pub service_type: BookingMode,
    pub date_time: String,
    pub notes: String,
}

impl BookingForm {
    pub fn for_service(service: Option<Service>) -> Self {
        Self {
            service,
            service_type: BookingMode::Online,
            date_time: String::new(),
            notes: String::new(),
        }
    }

    pub fn service_title(&self) -> String {
        self.service
            .as_ref()
            .map(|service| service.title.clone())
            .unwrap_or_else(|| "Consultation".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingField {
    ServiceType(BookingMode),
    DateTime(String),
    Notes(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    ServiceSelected { form: BookingForm },
    Submitting { form: BookingForm },
    Confirmed { booking_id: Option<i64> },
    /// Modal stays open with the form intact; resubmitting re-runs validation.
    Failed { form: BookingForm, message: String },
}

/// Booking flow for one advocate page. Owns its form exclusively and allows
/// one submission in flight at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWorkflow {
    advocate_id: i64,
    state: WorkflowState,
}

impl BookingWorkflow {
    pub fn new(advocate_id: i64) -> Self {
        Self {
            advocate_id,
            state: WorkflowState::Idle,
        }
    }

    pub fn advocate_id(&self) -> i64 {
        self.advocate_id
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn form(&self) -> Option<&BookingForm> {
        match &self.state {
            WorkflowState::ServiceSelected { form }
            | WorkflowState::Submitting { form }
            | WorkflowState::Failed { form, .. } => Some(form),
            WorkflowState::Idle | WorkflowState::Confirmed { .. } => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Opens the booking modal for `service`. Only signed-in users with the
    /// `user` role may book; anyone else gets the guard's redirect and the
    /// workflow stays where it was. Ignored while a submission is in flight.
    pub fn select_service(
        &mut self,
        service: Option<Service>,
        session: Option<&Session>,
    ) -> AccessDecision {
        let decision = can_access(Some(Role::User), session);
        if decision != AccessDecision::Allow {
            return decision;
        }
        if self.is_submitting() {
            log::warn!("ignoring service selection while a booking is submitting");
            return decision;
        }
        self.state = WorkflowState::ServiceSelected {
            form: BookingForm::for_service(service),
        };
        decision
    }

    pub fn update_field(&mut self, field: BookingField) -> Result<(), BookingError> {
        let form = match &mut self.state {
            WorkflowState::ServiceSelected { form } | WorkflowState::Failed { form, .. } => form,
            WorkflowState::Submitting { .. } => return Err(BookingError::AlreadySubmitting),
            WorkflowState::Idle | WorkflowState::Confirmed { .. } => {
                return Err(BookingError::NoActiveForm)
            }
        };
        match field {
            BookingField::ServiceType(mode) => form.service_type = mode,
            BookingField::DateTime(value) => form.date_time = value,
            BookingField::Notes(value) => form.notes = value,
        }
        Ok(())
    }

    /// Closes the modal without booking. Refused while submitting.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.state = WorkflowState::Idle;
        true
    }

    /// Validates the form and moves to `Submitting`, returning the request
    /// to send. Validation failures keep the form open with the message.
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Result<CreateBookingRequest, BookingError> {
        let form = match &self.state {
            WorkflowState::Submitting { .. } => return Err(BookingError::AlreadySubmitting),
            WorkflowState::ServiceSelected { form } | WorkflowState::Failed { form, .. } => {
                form.clone()
            }
            WorkflowState::Idle | WorkflowState::Confirmed { .. } => {
                return Err(BookingError::NoActiveForm)
            }
        };
        match build_booking_request(self.advocate_id, &form, now) {
            Ok(request) => {
                self.state = WorkflowState::Submitting { form };
                Ok(request)
            }
            Err(err) => {
                self.state = WorkflowState::Failed {
                    form,
                    message: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    /// Applies the create-booking outcome. On success the caller must treat
    /// any "my bookings" list as stale.
    pub fn complete_submit(
        &mut self,
        result: Result<CreateBookingResponse, ApiError>,
    ) -> Result<Option<i64>, BookingError> {
        let WorkflowState::Submitting { form } = &self.state else {
            return Err(BookingError::NoActiveForm);
        };
        match result {
            Ok(response) => {
                log::info!("booking created: {:?}", response.booking_id);
                self.state = WorkflowState::Confirmed {
                    booking_id: response.booking_id,
                };
                Ok(response.booking_id)
            }
            Err(err) => {
                self.state = WorkflowState::Failed {
                    form: form.clone(),
                    message: err.error.clone(),
                };
                Err(err.into())
            }
        }
    }

    pub async fn submit(
        &mut self,
        repo: &AdvocateDetailsRepository,
        now: NaiveDateTime,
    ) -> Result<Option<i64>, BookingError> {
        let request = self.begin_submit(now)?;
        let result = repo.create_booking(&request).await;
        self.complete_submit(result)
    }
}

/// Splits a `datetime-local` value into `YYYY-MM-DD` and `HH:MM:00`,
/// keeping the wall-clock value exactly as picked.
pub fn split_datetime(
    value: &str,
    now: NaiveDateTime,
) -> Result<(String, String), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingDateTime);
    }
    // Minute precision, matching the `HH:MM:00` sent.
    let moment = parse_datetime_local(value)
        .and_then(|moment| moment.with_second(0))
        .and_then(|moment| moment.with_nanosecond(0))
        .ok_or(ValidationError::InvalidDateTime)?;
    if moment <= now {
        return Err(ValidationError::PastDateTime);
    }
    Ok((
        moment.format("%Y-%m-%d").to_string(),
        moment.format("%H:%M:00").to_string(),
    ))
}

pub fn build_booking_request(
    advocate_id: i64,
    form: &BookingForm,
    now: NaiveDateTime,
) -> Result<CreateBookingRequest, ValidationError> {
    let (booking_date, booking_time) = split_datetime(&form.date_time, now)?;
    Ok(CreateBookingRequest {
        advocate_id,
        service_id: form.service.as_ref().map(|service| service.id),
        booking_date,
        booking_time,
        service_type: form.service_type,
        notes: form.notes.clone(),
    })
}
