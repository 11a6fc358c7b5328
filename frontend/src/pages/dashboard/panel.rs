use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

/// Shortcut cards on the client dashboard: (href, icon, title, blurb).
pub const SHORTCUTS: &[(&str, &str, &str, &str)] = &[
    ("/search", "🔍", "Find Advocates", "Search by specialization, city or rating"),
    ("/my-bookings", "📅", "My Bookings", "Track and manage your consultations"),
    ("/profile", "👤", "My Profile", "Keep your contact details up to date"),
];

const QUICK_TIPS: &[&str] = &[
    "Check an advocate's reviews before booking.",
    "Add notes to your booking so the advocate can prepare.",
    "You can cancel a booking while it is still pending.",
    "Leave a review once your consultation is completed.",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <Layout><DashboardPanel /></Layout> }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let name = move || {
        auth.with(|state| {
            state
                .session
                .as_ref()
                .map(|session| session.name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{move || format!("Welcome, {}!", name())}</h1>
                <p class="mt-1 text-sm text-fg-muted">"Find the right advocate and manage your consultations."</p>
            </div>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                {SHORTCUTS
                    .iter()
                    .map(|(href, icon, title, blurb)| view! {
                        <a href=*href class="card block hover:shadow-md">
                            <div class="text-3xl">{*icon}</div>
                            <h3 class="text-lg font-medium text-fg mt-2">{*title}</h3>
                            <p class="text-sm text-fg-muted">{*blurb}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
            <div class="card">
                <h3 class="text-lg font-medium text-fg mb-2">"Quick Tips"</h3>
                <ul class="list-disc pl-5 space-y-1 text-sm">
                    {QUICK_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::helpers::{provide_auth, session_for};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn greets_signed_in_user_with_shortcuts() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::User)));
            view! { <DashboardPanel /> }
        });
        assert!(html.contains("Welcome, Ravi Kumar!"));
        for (href, _, title, _) in SHORTCUTS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(title));
        }
        assert!(html.contains("Quick Tips"));
    }
}
