use crate::{
    api::{ApiError, LoginRequest},
    components::{
        error::InlineErrorMessage,
        guard::{landing_route_for, redirect_to},
        layout::Layout,
    },
    pages::login::utils,
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    redirect_to(landing_route_for(session.role()));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            error.set(Some(ApiError::unknown(msg)));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto card space-y-6">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Login"</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class="form-control"
                            required
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class="form-control"
                            required
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <InlineErrorMessage error=error.into() />
                    <button type="submit" class="btn btn-primary w-full" disabled=move || pending.get()>
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Don't have an account? "
                    <a href="/register" class="text-link">"Sign up"</a>
                </p>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("/register"));
    }
}
