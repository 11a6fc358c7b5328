use crate::api::{
    AdvocateDetail, ApiClient, ApiError, CreateBookingRequest, CreateBookingResponse, Service,
};
use crate::components::guard::{redirect_to, AccessDecision};
use crate::pages::advocate_details::{
    repository::AdvocateDetailsRepository,
    workflow::{BookingError, BookingField, BookingWorkflow},
};
use crate::state::auth::use_auth;
use crate::utils::{message::MessageState, time::now_local};
use leptos::*;

pub const AFTER_BOOKING_ROUTE: &str = "/my-bookings";

#[derive(Clone, Copy)]
pub struct AdvocateDetailsViewModel {
    pub advocate_id: i64,
    pub detail_resource: Resource<i64, Result<AdvocateDetail, ApiError>>,
    pub workflow: RwSignal<BookingWorkflow>,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<CreateBookingRequest, Result<CreateBookingResponse, ApiError>>,
}

/// Feeds a finished create-booking call back into the workflow. Returns
/// `true` once the booking is confirmed.
fn apply_optional_submit_result(
    result: Option<Result<CreateBookingResponse, ApiError>>,
    workflow: RwSignal<BookingWorkflow>,
    message: RwSignal<MessageState>,
) -> bool {
    let Some(result) = result else {
        return false;
    };
    if !workflow.with_untracked(BookingWorkflow::is_submitting) {
        return false;
    }
    let outcome = workflow
        .try_update(|workflow| workflow.complete_submit(result))
        .unwrap_or(Err(BookingError::NoActiveForm));
    match outcome {
        Ok(_) => {
            message.update(|msg| msg.set_success("Booking created successfully!"));
            true
        }
        Err(err) => {
            message.update(|msg| msg.set_error(err.to_string()));
            false
        }
    }
}

impl AdvocateDetailsViewModel {
    pub fn new(advocate_id: i64) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdvocateDetailsRepository::new(api));
        let workflow = create_rw_signal(BookingWorkflow::new(advocate_id));
        let message = create_rw_signal(MessageState::default());

        let detail_resource = create_resource(
            move || advocate_id,
            move |id| {
                let repo = repository.get_value();
                async move { repo.load(id).await }
            },
        );

        let submit_action = create_action(move |request: &CreateBookingRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.create_booking(&request).await }
        });

        create_effect(move |_| {
            if apply_optional_submit_result(submit_action.value().get(), workflow, message) {
                redirect_to(AFTER_BOOKING_ROUTE);
            }
        });

        Self {
            advocate_id,
            detail_resource,
            workflow,
            message,
            submit_action,
        }
    }

    pub fn on_book(&self) -> Callback<Option<Service>> {
        let workflow = self.workflow;
        let message = self.message;
        let (auth, _) = use_auth();
        Callback::new(move |service: Option<Service>| {
            let session = auth.with_untracked(|state| state.session.clone());
            let decision = workflow
                .try_update(|workflow| workflow.select_service(service, session.as_ref()))
                .unwrap_or(AccessDecision::Allow);
            match decision {
                AccessDecision::Allow => message.update(|msg| msg.clear()),
                AccessDecision::Redirect(target) => {
                    message.update(|msg| msg.set_error("Please login to book a service"));
                    redirect_to(target);
                }
            }
        })
    }

    pub fn on_field(&self) -> Callback<BookingField> {
        let workflow = self.workflow;
        Callback::new(move |field: BookingField| {
            let result = workflow
                .try_update(|workflow| workflow.update_field(field))
                .unwrap_or(Err(BookingError::NoActiveForm));
            if let Err(err) = result {
                log::debug!("booking field ignored: {}", err);
            }
        })
    }

    pub fn on_submit(&self) -> Callback<()> {
        let workflow = self.workflow;
        let submit_action = self.submit_action;
        Callback::new(move |_| {
            let request = workflow
                .try_update(|workflow| workflow.begin_submit(now_local()))
                .unwrap_or(Err(BookingError::NoActiveForm));
            match request {
                Ok(request) => submit_action.dispatch(request),
                Err(err) => log::debug!("booking not submitted: {}", err),
            }
        })
    }

    pub fn on_close(&self) -> Callback<()> {
        let workflow = self.workflow;
        Callback::new(move |_| {
            workflow.update(|workflow| {
                workflow.close();
            });
        })
    }
}
