use super::review::ReviewDraft;
use crate::api::ApiClient;
use crate::pages::advocate_details::workflow::BookingError;
use crate::pages::bookings::{self, BookingList, BookingScope, BookingsRepository};
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct MyBookingsViewModel {
    pub list: RwSignal<BookingList>,
    pub message: RwSignal<MessageState>,
    pub cancel_target: RwSignal<Option<i64>>,
    pub review: RwSignal<Option<ReviewDraft>>,
    pub load_action: Action<(), Result<(), BookingError>>,
    pub cancel_action: Action<i64, Result<(), BookingError>>,
    pub review_action: Action<ReviewDraft, Result<(), String>>,
}

fn apply_cancel_result(result: Option<Result<(), BookingError>>, message: RwSignal<MessageState>) {
    match result {
        Some(Ok(())) => message.update(|m| m.set_success("Booking cancelled successfully")),
        Some(Err(err)) => message.update(|m| m.set_error(err.to_string())),
        None => {}
    }
}

fn apply_review_result(
    result: Option<Result<(), String>>,
    review: RwSignal<Option<ReviewDraft>>,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(())) => {
            review.set(None);
            message.update(|m| m.set_success("Review submitted successfully"));
        }
        Some(Err(err)) => message.update(|m| m.set_error(err)),
        None => {}
    }
}

impl MyBookingsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(BookingsRepository::new(api));
        let list = create_rw_signal(BookingList::new(BookingScope::Mine));
        let message = create_rw_signal(MessageState::default());
        let cancel_target = create_rw_signal(None::<i64>);
        let review = create_rw_signal(None::<ReviewDraft>);

        let load_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            async move { bookings::refetch(&repo, list).await }
        });
        let cancel_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { bookings::cancel_booking(&repo, list, id).await }
        });
        let review_action = create_action(move |draft: &ReviewDraft| {
            let repo = repository.get_value();
            let request = draft.to_request();
            async move {
                let request = request?;
                repo.submit_review(&request).await.map_err(|err| err.error)
            }
        });

        create_effect(move |loaded: Option<()>| {
            if loaded.is_none() {
                load_action.dispatch(());
            }
        });
        create_effect(move |_| {
            if let Some(Err(err)) = load_action.value().get() {
                message.update(|m| m.set_error(err.to_string()));
            }
        });
        create_effect(move |_| apply_cancel_result(cancel_action.value().get(), message));
        create_effect(move |_| apply_review_result(review_action.value().get(), review, message));

        Self {
            list,
            message,
            cancel_target,
            review,
            load_action,
            cancel_action,
            review_action,
        }
    }

    pub fn request_cancel(&self, id: i64) {
        self.cancel_target.set(Some(id));
    }

    pub fn confirm_cancel(&self) {
        if let Some(id) = self.cancel_target.get_untracked() {
            self.cancel_target.set(None);
            self.cancel_action.dispatch(id);
        }
    }

    pub fn start_review(&self, booking_id: i64) {
        let draft = self
            .list
            .with_untracked(|list| list.find(booking_id).and_then(ReviewDraft::for_booking));
        self.review.set(draft);
    }

    pub fn submit_review(&self) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        if let Some(draft) = self.review.get_untracked() {
            self.review_action.dispatch(draft);
        }
    }
}

impl Default for MyBookingsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
