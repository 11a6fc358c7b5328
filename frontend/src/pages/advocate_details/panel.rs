use crate::api::{Advocate, BookingMode, Review, Role, Service};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage};
use crate::pages::advocate_details::{
    view_model::AdvocateDetailsViewModel,
    workflow::{BookingField, BookingForm, BookingWorkflow},
};
use crate::state::auth::use_auth;
use crate::utils::time::{datetime_local_min, now_local};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn AdvocateDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let advocate_id = params.with_untracked(|params| {
        params
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or_default()
    });
    view! { <Layout><AdvocateDetailsPanel advocate_id=advocate_id /></Layout> }
}

#[component]
pub fn AdvocateDetailsPanel(advocate_id: i64) -> impl IntoView {
    let vm = AdvocateDetailsViewModel::new(advocate_id);
    let (auth, _) = use_auth();
    let can_book = Signal::derive(move || auth.get().role() == Some(Role::User));
    let on_book = vm.on_book();
    let message = vm.message;

    view! {
        <div class="space-y-6">
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message={message.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.unwrap_or_default()} />
            </Show>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.detail_resource.get().map(|result| match result {
                    Ok(detail) => view! {
                        <AdvocateHeader advocate=detail.advocate.clone() />
                        <div class="grid gap-6 lg:grid-cols-2">
                            <ServicesCard services=detail.services.clone() can_book=can_book on_book=on_book />
                            <ReviewsCard reviews=detail.reviews.clone() />
                        </div>
                    }
                    .into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
            <BookingModal
                workflow=vm.workflow
                on_field=vm.on_field()
                on_submit=vm.on_submit()
                on_close=vm.on_close()
            />
        </div>
    }
}

#[component]
pub fn AdvocateHeader(advocate: Advocate) -> impl IntoView {
    let experience = advocate
        .experience_years
        .map(|years| format!("{} years experience", years))
        .unwrap_or_else(|| "Experience not listed".to_string());
    let verified = advocate.is_verified;
    view! {
        <div class="card">
            <h1 class="text-2xl font-semibold text-fg">{advocate.name.clone()}</h1>
            <p class="text-fg-muted">{advocate.specialization.clone().unwrap_or_default()}</p>
            <div class="flex gap-4 text-sm text-fg-muted mt-2">
                <span>{format!("Rating {}", advocate.rating_label())}</span>
                <span>{advocate.place_label()}</span>
                <span>{experience}</span>
                <Show when=move || verified>
                    <span class="badge badge-success">"Verified"</span>
                </Show>
            </div>
            <p class="mt-3">{advocate.bio.clone().unwrap_or_else(|| "No bio available".to_string())}</p>
        </div>
    }
}

#[component]
pub fn ServicesCard(
    services: Vec<Service>,
    can_book: Signal<bool>,
    on_book: Callback<Option<Service>>,
) -> impl IntoView {
    let empty = services.is_empty();
    view! {
        <div class="card">
            <h2 class="text-lg font-medium">"Services Offered"</h2>
            <Show when=move || !empty fallback=|| view! { <p>"No services available"</p> }>
                <ul class="divide-y divide-border">
                    {services
                        .iter()
                        .cloned()
                        .map(|service| {
                            let booked = service.clone();
                            view! {
                                <li class="py-3 flex justify-between items-start gap-4">
                                    <div>
                                        <h3 class="font-medium">{service.title.clone()}</h3>
                                        <p class="text-sm text-fg-muted">{service.description.clone()}</p>
                                        <p class="text-sm">
                                            <span class="font-semibold">{format!("₹{}", service.price)}</span>
                                            " · "
                                            <span>{format!("{} mins", service.duration_minutes)}</span>
                                            " · "
                                            <span>{service.service_type.label()}</span>
                                        </p>
                                    </div>
                                    <Show when=move || can_book.get()>
                                        {
                                            let booked = booked.clone();
                                            view! {
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| on_book.call(Some(booked.clone()))
                                                >
                                                    "Book Now"
                                                </button>
                                            }
                                        }
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn ReviewsCard(reviews: Vec<Review>) -> impl IntoView {
    let empty = reviews.is_empty();
    view! {
        <div class="card">
            <h2 class="text-lg font-medium">"Reviews & Ratings"</h2>
            <Show when=move || !empty fallback=|| view! { <p>"No reviews yet"</p> }>
                <ul class="divide-y divide-border">
                    {reviews
                        .iter()
                        .map(|review| view! {
                            <li class="py-3">
                                <div class="flex justify-between">
                                    <strong>{review.user_name.clone().unwrap_or_else(|| "Anonymous".into())}</strong>
                                    <span class="text-status-warning-text">{"★".repeat(review.rating.min(5) as usize)}</span>
                                </div>
                                <p class="text-sm">{review.comment.clone().unwrap_or_default()}</p>
                                <span class="text-xs text-fg-muted">
                                    {review
                                        .created_at
                                        .as_deref()
                                        .and_then(|at| at.get(..10))
                                        .unwrap_or_default()
                                        .to_string()}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn BookingModal(
    workflow: RwSignal<BookingWorkflow>,
    on_field: Callback<BookingField>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = create_memo(move |_| workflow.with(BookingWorkflow::is_open));
    let submitting = create_memo(move |_| workflow.with(BookingWorkflow::is_submitting));
    let form_value = move |read: fn(&BookingForm) -> String| {
        workflow.with(|workflow| workflow.form().map(read).unwrap_or_default())
    };
    let error = move || workflow.with(|workflow| workflow.error_message().map(str::to_string));

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold">
                        {move || format!("Book Service: {}", form_value(|form| form.service_title()))}
                    </h2>
                    {move || error().map(|message| view! { <ErrorMessage message=message /> })}
                    <form
                        class="space-y-3"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_submit.call(());
                        }
                    >
                        <label class="block text-sm font-medium">"Service Type"</label>
                        <select
                            class="form-control"
                            prop:value=move || form_value(|form| form.service_type.as_str().to_string())
                            on:change=move |ev| {
                                if let Some(mode) = BookingMode::parse(&event_target_value(&ev)) {
                                    on_field.call(BookingField::ServiceType(mode));
                                }
                            }
                        >
                            <option value="online">{BookingMode::Online.label()}</option>
                            <option value="offline">{BookingMode::Offline.label()}</option>
                        </select>
                        <label class="block text-sm font-medium">"Preferred Date & Time"</label>
                        <input
                            type="datetime-local"
                            class="form-control"
                            min=move || datetime_local_min(now_local())
                            prop:value=move || form_value(|form| form.date_time.clone())
                            on:input=move |ev| on_field.call(BookingField::DateTime(event_target_value(&ev)))
                            required
                        />
                        <label class="block text-sm font-medium">"Additional Notes"</label>
                        <textarea
                            class="form-control"
                            rows="3"
                            prop:value=move || form_value(|form| form.notes.clone())
                            on:input=move |ev| on_field.call(BookingField::Notes(event_target_value(&ev)))
                        ></textarea>
                        <div class="flex justify-end gap-2">
                            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Booking..." } else { "Confirm Booking" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled=move || submitting.get()
                                on:click=move |_| on_close.call(())
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
