use crate::{
    api::Role,
    components::guard::{redirect_to, LANDING_ROUTE},
    state::auth::{self, use_auth},
};
use leptos::*;

/// Links shown in the navbar for a signed-in role, in display order.
pub fn nav_links_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::User => &[("/my-bookings", "My Bookings"), ("/dashboard", "Dashboard")],
        Role::Advocate => &[("/advocate-dashboard", "Dashboard")],
        Role::Admin => &[("/admin-dashboard", "Admin Dashboard")],
    }
}

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Navbar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let role = create_memo(move |_| auth.get().role());
    let logout = auth::use_logout();
    let on_logout = move |_| {
        logout.call(());
        redirect_to(LANDING_ROUTE);
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"BookMyAdvocate"</a>
                    <nav class="flex items-center space-x-4">
                        <a href="/search" class=NAV_LINK_CLASS>"Find Advocates"</a>
                        {move || match role.get() {
                            None => view! {
                                <a href="/login" class=NAV_LINK_CLASS>"Login"</a>
                                <a href="/register" class="btn btn-primary">"Sign Up"</a>
                            }
                            .into_view(),
                            Some(role) => view! {
                                {nav_links_for(role)
                                    .iter()
                                    .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                    .collect_view()}
                                <a href="/profile" class=NAV_LINK_CLASS>"Profile"</a>
                                <button on:click=on_logout class="btn btn-secondary">"Logout"</button>
                            }
                            .into_view(),
                        }}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <div class="flex flex-col justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <p class="mt-2 text-sm text-fg-muted">{text}</p>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
