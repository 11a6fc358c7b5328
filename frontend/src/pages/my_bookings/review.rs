use crate::api::{Booking, BookingStatus, CreateReviewRequest};
use leptos::*;

/// Review being written for one completed booking.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub booking_id: i64,
    pub advocate_id: Option<i64>,
    pub rating: u32,
    pub comment: String,
}

impl ReviewDraft {
    pub fn for_booking(booking: &Booking) -> Option<Self> {
        (booking.status == BookingStatus::Completed).then(|| Self {
            booking_id: booking.id,
            advocate_id: booking.advocate_id,
            rating: 5,
            comment: String::new(),
        })
    }

    pub fn to_request(&self) -> Result<CreateReviewRequest, String> {
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5".into());
        }
        let advocate_id = self
            .advocate_id
            .ok_or_else(|| "This booking has no advocate to review".to_string())?;
        Ok(CreateReviewRequest {
            advocate_id,
            booking_id: Some(self.booking_id),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
        })
    }
}

#[component]
pub fn ReviewForm(
    draft: RwSignal<Option<ReviewDraft>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || draft.with(Option::is_some)>
            <form
                class="mt-3 space-y-2 border-t border-border pt-3"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <label class="block text-sm font-medium">"Rating"</label>
                <select
                    class="form-control"
                    prop:value=move || draft.with(|d| d.as_ref().map(|d| d.rating.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        if let Ok(rating) = event_target_value(&ev).parse::<u32>() {
                            draft.update(|d| {
                                if let Some(d) = d {
                                    d.rating = rating;
                                }
                            });
                        }
                    }
                >
                    {(1..=5u32)
                        .rev()
                        .map(|n| view! { <option value=n.to_string()>{"★".repeat(n as usize)}</option> })
                        .collect_view()}
                </select>
                <textarea
                    class="form-control"
                    rows="3"
                    placeholder="Share your experience"
                    prop:value=move || draft.with(|d| d.as_ref().map(|d| d.comment.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(d) = d {
                                d.comment = value;
                            }
                        });
                    }
                ></textarea>
                <div class="flex gap-2">
                    <button type="submit" class="btn btn-primary btn-sm" disabled=move || pending.get()>
                        {move || if pending.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                    <button type="button" class="btn btn-secondary btn-sm" on:click=move |_| draft.set(None)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
