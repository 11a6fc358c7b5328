use crate::{
    api::{Role, Session},
    components::layout::LoadingSpinner,
    state::auth::use_auth,
};
use leptos::*;

pub const LOGIN_ROUTE: &str = "/login";
pub const LANDING_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(&'static str),
}

/// `required == None` means "any signed-in user". A role mismatch is a
/// silent redirect to the landing page, not an error.
pub fn can_access(required: Option<Role>, session: Option<&Session>) -> AccessDecision {
    match (session, required) {
        (None, _) => AccessDecision::Redirect(LOGIN_ROUTE),
        (Some(_), None) => AccessDecision::Allow,
        (Some(session), Some(role)) if session.role() == role => AccessDecision::Allow,
        (Some(_), Some(_)) => AccessDecision::Redirect(LANDING_ROUTE),
    }
}

pub fn landing_route_for(role: Role) -> &'static str {
    match role {
        Role::User => "/dashboard",
        Role::Advocate => "/advocate-dashboard",
        Role::Admin => "/admin-dashboard",
    }
}

pub fn redirect_to(target: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {}", target);
}

fn guarded(required: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| auth.with(|state| can_access(required, state.session.as_ref())));
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if is_loading.get() {
            return;
        }
        if let AccessDecision::Redirect(target) = decision.get() {
            redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(decision.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(decision: AccessDecision, is_loading: bool) -> bool {
    decision == AccessDecision::Allow && !is_loading
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(None, children)
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    guarded(Some(role), children)
}
