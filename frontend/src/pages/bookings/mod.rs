//! Booking lists and the status changes made from them.
//!
//! A list is never patched locally: every successful mutation marks it stale
//! and replaces it with a fresh fetch, so what is shown always reflects the
//! last successful read from the server.

pub mod repository;

use crate::api::{AdvocateAction, Booking, BookingStatus};
use crate::pages::advocate_details::workflow::BookingError;
use leptos::*;

pub use repository::{BookingScope, BookingsRepository};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingList {
    scope: BookingScope,
    items: Vec<Booking>,
    stale: bool,
}

impl BookingList {
    /// Starts stale: nothing has been fetched yet.
    pub fn new(scope: BookingScope) -> Self {
        Self {
            scope,
            items: Vec::new(),
            stale: true,
        }
    }

    pub fn scope(&self) -> BookingScope {
        self.scope
    }

    pub fn items(&self) -> &[Booking] {
        &self.items
    }

    pub fn find(&self, id: i64) -> Option<&Booking> {
        self.items.iter().find(|booking| booking.id == id)
    }

    pub fn count_with_status(&self, status: BookingStatus) -> usize {
        self.items
            .iter()
            .filter(|booking| booking.status == status)
            .count()
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn replace(&mut self, items: Vec<Booking>) {
        self.items = items;
        self.stale = false;
    }

    /// Fetches the list for this scope. Items are only replaced on success.
    pub async fn refetch(&mut self, repo: &BookingsRepository) -> Result<(), BookingError> {
        let items = repo.list(self.scope).await?;
        self.replace(items);
        Ok(())
    }
}

pub async fn refetch(
    repo: &BookingsRepository,
    list: RwSignal<BookingList>,
) -> Result<(), BookingError> {
    let scope = list.with_untracked(BookingList::scope);
    let items = repo.list(scope).await?;
    list.update(|list| list.replace(items));
    Ok(())
}

/// User-side cancel. Only a booking currently shown as pending may be
/// cancelled; anything else is refused without a request.
pub async fn cancel_booking(
    repo: &BookingsRepository,
    list: RwSignal<BookingList>,
    id: i64,
) -> Result<(), BookingError> {
    let cancellable = list.with_untracked(|list| {
        list.find(id)
            .map(|booking| booking.status.user_can_cancel())
            .unwrap_or(false)
    });
    if !cancellable {
        return Err(BookingError::NotCancellable);
    }
    repo.cancel(id).await?;
    list.update(BookingList::invalidate);
    refetch(repo, list).await
}

/// Advocate-side status change. The target status is forwarded as-is; the
/// server is the authority on whether the transition is allowed.
pub async fn update_booking_status(
    repo: &BookingsRepository,
    list: RwSignal<BookingList>,
    id: i64,
    action: AdvocateAction,
) -> Result<(), BookingError> {
    repo.update_status(id, action.target()).await?;
    list.update(BookingList::invalidate);
    refetch(repo, list).await
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, Role};
    use crate::pages::advocate_details::repository::AdvocateDetailsRepository;
    use crate::pages::advocate_details::workflow::{BookingField, BookingWorkflow};
    use crate::test_support::helpers::{consultation_service, session_for};
    use chrono::NaiveDate;
    use serde_json::json;

    fn booking_json(id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "advocate_id": 7,
            "service_id": 3,
            "booking_date": "2030-05-17T00:00:00.000Z",
            "booking_time": "14:30:00",
            "service_type": "online",
            "status": status,
            "payment_status": "pending",
            "total_amount": "1500.00",
            "service_title": "Consultation"
        })
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new_with_base_url(server.url("/api"))
    }

    #[tokio::test]
    async fn refetch_failure_keeps_previous_items() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/my-bookings");
            then.status(200).json_body(json!([booking_json(1, "pending")]));
        });
        let repo = BookingsRepository::new(client(&server));
        let mut list = BookingList::new(BookingScope::Mine);
        list.refetch(&repo).await.unwrap();
        assert_eq!(list.items().len(), 1);

        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/my-bookings");
            then.status(500).json_body(json!({ "error": "Database unavailable" }));
        });
        list.invalidate();
        let err = list.refetch(&repo).await.unwrap_err();
        assert_eq!(err.to_string(), "Database unavailable");
        assert!(list.is_stale());
        assert_eq!(list.items().len(), 1);
    }

    #[tokio::test]
    async fn cancel_is_refused_unless_pending() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PATCH).path("/api/bookings/5/cancel");
            then.status(200).json_body(json!({}));
        });
        let runtime = create_runtime();
        let repo = BookingsRepository::new(client(&server));
        let list = create_rw_signal(BookingList::new(BookingScope::Mine));
        list.update(|list| list.replace(vec![tests::booking(5, BookingStatus::Confirmed)]));

        assert_eq!(
            cancel_booking(&repo, list, 5).await,
            Err(BookingError::NotCancellable)
        );
        assert_eq!(
            cancel_booking(&repo, list, 99).await,
            Err(BookingError::NotCancellable)
        );
        assert_eq!(server.hits(&PATCH, "/api/bookings/5/cancel"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancel_pending_booking_refetches_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PATCH).path("/api/bookings/5/cancel");
            then.status(200).json_body(json!({ "message": "Booking cancelled" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/my-bookings");
            then.status(200).json_body(json!([booking_json(5, "cancelled")]));
        });
        let runtime = create_runtime();
        let repo = BookingsRepository::new(client(&server));
        let list = create_rw_signal(BookingList::new(BookingScope::Mine));
        list.update(|list| list.replace(vec![tests::booking(5, BookingStatus::Pending)]));

        cancel_booking(&repo, list, 5).await.unwrap();
        assert_eq!(server.hits(&PATCH, "/api/bookings/5/cancel"), 1);
        assert_eq!(server.hits(&GET, "/api/bookings/my-bookings"), 1);
        let snapshot = list.get_untracked();
        assert!(!snapshot.is_stale());
        assert_eq!(snapshot.find(5).map(|b| b.status), Some(BookingStatus::Cancelled));
        runtime.dispose();
    }

    #[tokio::test]
    async fn advocate_moves_booking_through_confirm_and_complete() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/bookings/42/status");
            then.status(200).json_body(json!({ "message": "Booking status updated" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/advocate-bookings");
            then.status(200).json_body(json!([booking_json(42, "pending")]));
        });
        let runtime = create_runtime();
        let repo = BookingsRepository::new(client(&server));
        let list = create_rw_signal(BookingList::new(BookingScope::Advocate));
        refetch(&repo, list).await.unwrap();
        let status = || list.with_untracked(|l| l.find(42).map(|b| b.status));
        assert_eq!(status(), Some(BookingStatus::Pending));

        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/advocate-bookings");
            then.status(200).json_body(json!([booking_json(42, "confirmed")]));
        });
        update_booking_status(&repo, list, 42, AdvocateAction::Confirm)
            .await
            .unwrap();
        assert_eq!(status(), Some(BookingStatus::Confirmed));
        assert_eq!(
            server.last(&PUT, "/api/bookings/42/status").unwrap().body,
            Some(json!({ "status": "confirmed" }))
        );

        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/advocate-bookings");
            then.status(200).json_body(json!([booking_json(42, "completed")]));
        });
        update_booking_status(&repo, list, 42, AdvocateAction::Complete)
            .await
            .unwrap();
        assert_eq!(status(), Some(BookingStatus::Completed));
        assert_eq!(server.hits(&PUT, "/api/bookings/42/status"), 2);
        assert_eq!(
            server.last(&PUT, "/api/bookings/42/status").unwrap().body,
            Some(json!({ "status": "completed" }))
        );
        assert!(BookingStatus::Completed.advocate_actions().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn booked_service_shows_up_pending_after_refetch() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/bookings");
            then.status(201)
                .json_body(json!({ "message": "Booking created", "bookingId": 42 }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/bookings/my-bookings");
            then.status(200).json_body(json!([booking_json(42, "pending")]));
        });
        let api = client(&server);
        let details = AdvocateDetailsRepository::new(api.clone());
        let bookings = BookingsRepository::new(api);
        let now = NaiveDate::from_ymd_opt(2030, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let service = consultation_service();
        assert_eq!((service.price, service.duration_minutes), (1500.0, 45));
        let mut workflow = BookingWorkflow::new(7);
        workflow.select_service(Some(service), Some(&session_for(Role::User)));
        workflow
            .update_field(BookingField::DateTime("2030-05-17T14:30".into()))
            .unwrap();
        workflow.submit(&details, now).await.unwrap();

        assert_eq!(server.hits(&POST, "/api/bookings"), 1);
        let body = server.last(&POST, "/api/bookings").unwrap().body.unwrap();
        assert_eq!(body["service_type"], "online");
        assert_eq!(body["service_id"], 3);
        assert_eq!(body["booking_date"], "2030-05-17");

        let mut list = BookingList::new(BookingScope::Mine);
        list.refetch(&bookings).await.unwrap();
        assert_eq!(list.find(42).map(|b| b.status), Some(BookingStatus::Pending));
    }
}
