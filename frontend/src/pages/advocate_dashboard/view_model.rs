use super::{
    repository::ServicesRepository,
    service_form::ServiceEditor,
};
use crate::api::{AdvocateAction, ApiClient, ApiError, BookingStatus, Service, ServicePayload};
use crate::pages::advocate_details::workflow::BookingError;
use crate::pages::bookings::{self, BookingList, BookingScope, BookingsRepository};
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub pending: usize,
    pub services: usize,
}

pub fn dashboard_stats(list: &BookingList, services: &[Service]) -> DashboardStats {
    DashboardStats {
        total_bookings: list.items().len(),
        pending: list.count_with_status(BookingStatus::Pending),
        services: services.len(),
    }
}

#[derive(Clone, Copy)]
pub struct AdvocateDashboardViewModel {
    pub bookings: RwSignal<BookingList>,
    pub services: RwSignal<Vec<Service>>,
    pub editor: RwSignal<Option<ServiceEditor>>,
    pub delete_target: RwSignal<Option<i64>>,
    pub message: RwSignal<MessageState>,
    pub load_action: Action<(), Result<(), String>>,
    pub status_action: Action<(i64, AdvocateAction), Result<(), BookingError>>,
    pub save_action: Action<(Option<i64>, ServicePayload), Result<(), ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

async fn reload_services(
    repo: &ServicesRepository,
    services: RwSignal<Vec<Service>>,
) -> Result<(), ApiError> {
    let items = repo.list().await?;
    services.set(items);
    Ok(())
}

/// Applies a finished save: closes the modal on success, keeps it open with
/// the server message otherwise.
fn apply_save_result(
    result: Option<Result<(), ApiError>>,
    editing: Option<i64>,
    editor: RwSignal<Option<ServiceEditor>>,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(())) => {
            editor.set(None);
            let text = if editing.is_some() {
                "Service updated successfully"
            } else {
                "Service added successfully"
            };
            message.update(|m| m.set_success(text));
        }
        Some(Err(err)) => editor.update(|editor| {
            if let Some(editor) = editor {
                editor.error = Some(err.error);
            }
        }),
        None => {}
    }
}

impl AdvocateDashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let bookings_repo = store_value(BookingsRepository::new(api.clone()));
        let services_repo = store_value(ServicesRepository::new(api));
        let bookings = create_rw_signal(BookingList::new(BookingScope::Advocate));
        let services = create_rw_signal(Vec::<Service>::new());
        let editor = create_rw_signal(None::<ServiceEditor>);
        let delete_target = create_rw_signal(None::<i64>);
        let message = create_rw_signal(MessageState::default());

        let load_action = create_action(move |_: &()| {
            let bookings_repo = bookings_repo.get_value();
            let services_repo = services_repo.get_value();
            async move {
                let loaded_bookings = bookings::refetch(&bookings_repo, bookings).await;
                let loaded_services = reload_services(&services_repo, services).await;
                loaded_bookings.map_err(|err| err.to_string())?;
                loaded_services.map_err(|err| err.error)
            }
        });

        let status_action = create_action(move |(id, action): &(i64, AdvocateAction)| {
            let repo = bookings_repo.get_value();
            let (id, action) = (*id, *action);
            async move { bookings::update_booking_status(&repo, bookings, id, action).await }
        });

        let save_action = create_action(move |(id, payload): &(Option<i64>, ServicePayload)| {
            let repo = services_repo.get_value();
            let (id, payload) = (*id, payload.clone());
            async move {
                repo.save(id, &payload).await?;
                reload_services(&repo, services).await
            }
        });

        let delete_action = create_action(move |id: &i64| {
            let repo = services_repo.get_value();
            let id = *id;
            async move {
                repo.delete(id).await?;
                reload_services(&repo, services).await
            }
        });

        create_effect(move |loaded: Option<()>| {
            if loaded.is_none() {
                load_action.dispatch(());
            }
        });
        create_effect(move |_| {
            if let Some(Err(err)) = load_action.value().get() {
                message.update(|m| m.set_error(err));
            }
        });
        create_effect(move |_| match status_action.value().get() {
            Some(Ok(())) => message.update(|m| m.set_success("Booking status updated")),
            Some(Err(err)) => message.update(|m| m.set_error(err.to_string())),
            None => {}
        });
        create_effect(move |_| {
            let editing = editor.with_untracked(|e| e.as_ref().and_then(|e| e.editing));
            apply_save_result(save_action.value().get(), editing, editor, message);
        });
        create_effect(move |_| match delete_action.value().get() {
            Some(Ok(())) => message.update(|m| m.set_success("Service deleted successfully")),
            Some(Err(_)) => message.update(|m| m.set_error("Failed to delete service")),
            None => {}
        });

        Self {
            bookings,
            services,
            editor,
            delete_target,
            message,
            load_action,
            status_action,
            save_action,
            delete_action,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let services = self.services;
        self.bookings
            .with(|list| services.with(|services| dashboard_stats(list, services)))
    }

    pub fn open_create(&self) {
        self.editor.set(Some(ServiceEditor::create()));
    }

    pub fn open_edit(&self, service: &Service) {
        self.editor.set(Some(ServiceEditor::edit(service)));
    }

    /// Validates the open form; only a valid form is sent.
    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(editor) = self.editor.get_untracked() else {
            return;
        };
        match editor.form.to_payload() {
            Ok(payload) => {
                self.editor.update(|e| {
                    if let Some(e) = e {
                        e.error = None;
                    }
                });
                self.save_action.dispatch((editor.editing, payload));
            }
            Err(err) => self.editor.update(|e| {
                if let Some(e) = e {
                    e.error = Some(err.to_string());
                }
            }),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.delete_target.get_untracked() {
            self.delete_target.set(None);
            self.delete_action.dispatch(id);
        }
    }

    pub fn change_status(&self, id: i64, action: AdvocateAction) {
        self.status_action.dispatch((id, action));
    }
}

impl Default for AdvocateDashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
