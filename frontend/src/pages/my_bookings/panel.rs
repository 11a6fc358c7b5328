use crate::{
    api::{Booking, BookingMode},
    components::{
        cards::StatusBadge,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    pages::my_bookings::{
        review::{ReviewDraft, ReviewForm},
        view_model::MyBookingsViewModel,
    },
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let vm = MyBookingsViewModel::new();
    let message = vm.message;
    let loading = vm.load_action.pending();
    let review_pending = vm.review_action.pending();
    let items = Signal::derive(move || vm.list.with(|list| list.items().to_vec()));
    let on_cancel = Callback::new(move |id: i64| vm.request_cancel(id));
    let on_review = Callback::new(move |id: i64| vm.start_review(id));

    view! {
        <Layout>
            <div class="space-y-4">
                <h1 class="text-2xl font-semibold text-fg">"My Bookings"</h1>
                {move || message.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
                {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <BookingCards
                        items=items
                        review=vm.review
                        review_pending=review_pending.into()
                        on_cancel=on_cancel
                        on_review=on_review
                        on_submit_review=Callback::new(move |_| vm.submit_review())
                    />
                </Show>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.cancel_target.get().is_some())
                title="Cancel booking"
                message="Are you sure you want to cancel this booking?"
                confirm_label="Cancel Booking"
                cancel_label="Keep"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_cancel())
                on_cancel=Callback::new(move |_| vm.cancel_target.set(None))
            />
        </Layout>
    }
}

#[component]
pub fn BookingCards(
    items: Signal<Vec<Booking>>,
    review: RwSignal<Option<ReviewDraft>>,
    review_pending: Signal<bool>,
    on_cancel: Callback<i64>,
    on_review: Callback<i64>,
    on_submit_review: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="You don't have any bookings yet." /> }
        >
            <div class="space-y-4">
                <For
                    each=move || items.get()
                    key=|booking| (booking.id, booking.status)
                    children=move |booking| {
                        let id = booking.id;
                        let reviewing = Signal::derive(move || {
                            review.with(|d| d.as_ref().map(|d| d.booking_id) == Some(id))
                        });
                        view! {
                            <BookingCard booking=booking on_cancel=on_cancel on_review=on_review />
                            <Show when=move || reviewing.get()>
                                <ReviewForm draft=review pending=review_pending on_submit=on_submit_review />
                            </Show>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn BookingCard(booking: Booking, on_cancel: Callback<i64>, on_review: Callback<i64>) -> impl IntoView {
    let id = booking.id;
    let mode = match booking.service_type {
        BookingMode::Online => "💻 Online",
        BookingMode::Offline => "📍 Offline",
    };
    let date = booking
        .booking_date
        .map(format_display_date)
        .unwrap_or_else(|| "-".to_string());
    let amount = booking
        .total_amount
        .map(|amount| format!("₹{}", amount))
        .unwrap_or_else(|| "-".to_string());
    let can_cancel = booking.status.user_can_cancel();
    let can_review = ReviewDraft::for_booking(&booking).is_some();

    view! {
        <div class="card space-y-2">
            <div class="flex justify-between items-center">
                <h3 class="font-semibold">{booking.advocate_name.clone().unwrap_or_default()}</h3>
                <StatusBadge badge_class=booking.status.badge_class() label=booking.status.as_str() />
            </div>
            <div class="grid gap-1 text-sm md:grid-cols-2">
                <p><strong>"Service: "</strong>{booking.service_title.clone().unwrap_or_else(|| "General Consultation".into())}</p>
                <p><strong>"Specialization: "</strong>{booking.specialization.clone().unwrap_or_default()}</p>
                <p><strong>"Type: "</strong>{mode}</p>
                <p><strong>"Date: "</strong>{date}</p>
                <p><strong>"Time: "</strong>{booking.booking_time.clone().unwrap_or_default()}</p>
                <p><strong>"Location: "</strong>{booking.location.clone().unwrap_or_default()}</p>
                <p><strong>"Price: "</strong>{amount}</p>
                <p>
                    <strong>"Payment: "</strong>
                    <StatusBadge badge_class=booking.payment_status.badge_class() label=booking.payment_status.as_str() />
                </p>
                {booking.notes.clone().filter(|n| !n.is_empty()).map(|notes| view! { <p><strong>"Notes: "</strong>{notes}</p> })}
            </div>
            <div class="flex justify-between items-center text-sm text-fg-muted">
                <span>{booking.advocate_phone.clone().map(|phone| format!("📞 {}", phone)).unwrap_or_default()}</span>
                <div class="flex gap-2">
                    {can_review.then(|| view! {
                        <button class="btn btn-secondary btn-sm" on:click=move |_| on_review.call(id)>"Write Review"</button>
                    })}
                    {can_cancel.then(|| view! {
                        <button class="btn btn-danger btn-sm" on:click=move |_| on_cancel.call(id)>"Cancel Booking"</button>
                    })}
                </div>
            </div>
        </div>
    }
}
