use crate::{
    components::{guard::landing_route_for, layout::Layout},
    state::auth::use_auth,
};
use leptos::*;

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚖️", "Verified Advocates", "Every advocate profile is reviewed before it is marked verified."),
    ("📅", "Easy Booking", "Pick a service, choose a time and book online or in person."),
    ("⭐", "Honest Reviews", "Ratings come from clients after completed consultations."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let role = create_memo(move |_| auth.get().role());

    view! {
        <Layout>
            <div class="py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Find the Right Advocate"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Search verified legal professionals, compare services and book a consultation in minutes."
                    </p>
                    <div class="mt-5 max-w-md mx-auto flex flex-wrap gap-3 justify-center lg:mt-8">
                        <a href="/search" class="btn btn-primary lg:text-lg">"Find Advocates"</a>
                        {move || match role.get() {
                            None => view! {
                                <a href="/register" class="btn btn-secondary">"Sign Up"</a>
                                <a href="/advocate-register" class="btn btn-secondary">"Join as Advocate"</a>
                            }
                            .into_view(),
                            Some(role) => view! {
                                <a href=landing_route_for(role) class="btn btn-secondary">"Go to Dashboard"</a>
                            }
                            .into_view(),
                        }}
                    </div>
                </div>
                <div class="mt-12 grid gap-6 md:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, blurb)| view! {
                            <div class="card text-center">
                                <div class="text-3xl">{*icon}</div>
                                <h3 class="text-lg font-medium mt-2">{*title}</h3>
                                <p class="text-sm text-fg-muted">{*blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </Layout>
    }
}
