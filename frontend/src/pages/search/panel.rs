use crate::{
    api::{Advocate, AdvocateSearchFilters},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::search::view_model::{bio_excerpt, SearchViewModel},
};
use leptos::{ev::SubmitEvent, *};

pub const SPECIALIZATIONS: &[&str] = &[
    "Criminal Law",
    "Corporate Law",
    "Family Law",
    "Property Law",
    "Civil Litigation",
    "Tax Law",
    "Labour Law",
];

const RATING_OPTIONS: &[(&str, &str)] = &[
    ("4.5", "4.5+ Stars"),
    ("4.0", "4.0+ Stars"),
    ("3.5", "3.5+ Stars"),
    ("3.0", "3.0+ Stars"),
];

#[component]
pub fn SearchPage() -> impl IntoView {
    let vm = SearchViewModel::new();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.search();
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-semibold text-fg">"Find Legal Advocates"</h1>
                    <p class="text-fg-muted">"Search and connect with experienced legal professionals"</p>
                </div>
                <form class="card" on:submit=on_submit>
                    <SearchFilters filters=vm.filters />
                    <div class="flex gap-2 mt-4">
                        <button type="submit" class="btn btn-primary">"Search"</button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| vm.clear()>
                            "Clear"
                        </button>
                    </div>
                </form>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || vm.results.get().map(|result| match result {
                        Ok(advocates) => view! { <AdvocateResults advocates=advocates /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </div>
        </Layout>
    }
}

#[component]
pub fn SearchFilters(filters: RwSignal<AdvocateSearchFilters>) -> impl IntoView {
    let text_input = move |name: &'static str,
                           placeholder: &'static str,
                           read: fn(&AdvocateSearchFilters) -> String,
                           write: fn(&mut AdvocateSearchFilters, String)| {
        view! {
            <input
                type="text"
                name=name
                class="form-control"
                placeholder=placeholder
                prop:value=move || filters.with(read)
                on:input=move |ev| filters.update(|f| write(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="grid gap-3 md:grid-cols-3">
            {text_input("search", "Search by name, specialization...", |f| f.search.clone(), |f, v| f.search = v)}
            <select
                name="specialization"
                class="form-control"
                prop:value=move || filters.with(|f| f.specialization.clone())
                on:change=move |ev| filters.update(|f| f.specialization = event_target_value(&ev))
            >
                <option value="">"All Specializations"</option>
                {SPECIALIZATIONS
                    .iter()
                    .map(|s| view! { <option value=*s>{*s}</option> })
                    .collect_view()}
            </select>
            {text_input("city", "City", |f| f.city.clone(), |f, v| f.city = v)}
            {text_input("location", "Location", |f| f.location.clone(), |f, v| f.location = v)}
            <input
                type="number"
                name="minExperience"
                min="0"
                class="form-control"
                placeholder="Min. years of experience"
                prop:value=move || filters.with(|f| f.min_experience.clone())
                on:input=move |ev| filters.update(|f| f.min_experience = event_target_value(&ev))
            />
            <select
                name="minRating"
                class="form-control"
                prop:value=move || filters.with(|f| f.min_rating.clone())
                on:change=move |ev| filters.update(|f| f.min_rating = event_target_value(&ev))
            >
                <option value="">"Any Rating"</option>
                {RATING_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <select
                name="serviceType"
                class="form-control"
                prop:value=move || filters.with(|f| f.service_type.clone())
                on:change=move |ev| filters.update(|f| f.service_type = event_target_value(&ev))
            >
                <option value="">"All Services"</option>
                <option value="online">"Online Only"</option>
                <option value="offline">"Offline Only"</option>
            </select>
        </div>
    }
}

#[component]
pub fn AdvocateResults(advocates: Vec<Advocate>) -> impl IntoView {
    let count = advocates.len();
    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-medium">{format!("{} Advocates Found", count)}</h2>
            {if advocates.is_empty() {
                view! { <EmptyState title="No advocates found matching your criteria" /> }.into_view()
            } else {
                view! {
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {advocates
                            .into_iter()
                            .map(|advocate| view! { <AdvocateCard advocate=advocate /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
pub fn AdvocateCard(advocate: Advocate) -> impl IntoView {
    let href = format!("/advocates/{}", advocate.id);
    let rating = if advocate.rating.is_some() {
        advocate.rating_label()
    } else {
        "New".to_string()
    };
    let experience = advocate
        .experience_years
        .map(|years| format!("{} years", years))
        .unwrap_or_default();
    let rate = advocate
        .hourly_rate
        .map(|rate| format!("₹{}/hr", rate))
        .unwrap_or_default();
    let (availability_class, availability) = if advocate.is_available {
        ("badge badge-success", "Available")
    } else {
        ("badge badge-danger", "Busy")
    };

    view! {
        <div class="card space-y-2">
            <div class="flex justify-between items-start">
                <h3 class="font-semibold">{advocate.name.clone()}</h3>
                {advocate.is_verified.then(|| view! { <span class="badge badge-success">"✓ Verified"</span> })}
            </div>
            <p class="text-sm text-fg-muted">{advocate.specialization.clone().unwrap_or_default()}</p>
            <p class="text-sm">{advocate.place_label()}</p>
            <div class="flex gap-3 text-sm">
                <span>{format!("⭐ {}", rating)}</span>
                <span>{format!("({} reviews)", advocate.total_reviews)}</span>
                <span>{experience}</span>
            </div>
            {advocate.bio.as_deref().map(|bio| view! { <p class="text-sm">{bio_excerpt(bio)}</p> })}
            <div class="flex justify-between items-center">
                <span class="font-semibold">{rate}</span>
                <span class=availability_class>{availability}</span>
            </div>
            <a href=href class="btn btn-primary w-full text-center">"View Profile"</a>
        </div>
    }
}
